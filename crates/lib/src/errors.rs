use thiserror::Error;

/// Custom error types for the tagging pipeline.
#[derive(Error, Debug)]
pub enum TagError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to the vision model: {0}")]
    ModelRequest(reqwest::Error),
    #[error("Vision model call failed: {0}")]
    ModelCall(String),
    #[error("Vision model reply contained no parseable JSON object: {0}")]
    MalformedReply(String),
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}
