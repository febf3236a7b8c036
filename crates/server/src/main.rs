#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mediatag_server::start().await
}
