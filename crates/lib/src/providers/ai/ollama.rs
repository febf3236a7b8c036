use crate::{errors::TagError, providers::ai::VisionProvider};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Low temperature keeps the reply shape close to the requested JSON.
const SAMPLING_TEMPERATURE: f32 = 0.2;

// --- Ollama `/api/chat` request and response structures ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    options: ChatOptions,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    images: Option<&'a [String]>,
}

#[derive(Serialize)]
struct ChatOptions {
    temperature: f32,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize, Debug)]
struct ResponseMessage {
    content: Option<String>,
}

// --- Ollama Provider implementation ---

/// A provider for a locally hosted, vision-capable Ollama endpoint.
#[derive(Clone, Debug)]
pub struct OllamaProvider {
    client: ReqwestClient,
    base_url: String,
    model: String,
}

impl OllamaProvider {
    /// Creates a new `OllamaProvider`.
    ///
    /// `timeout` bounds the whole outbound call; when it expires the request
    /// fails and the error surfaces to the caller unchanged.
    pub fn new(base_url: String, model: String, timeout: Duration) -> Result<Self, TagError> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(TagError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        })
    }
}

#[async_trait]
impl VisionProvider for OllamaProvider {
    /// Sends a non-streaming chat request and returns the raw reply text.
    async fn chat(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        images: &[String],
    ) -> Result<String, TagError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                    images: None,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                    images: Some(images),
                },
            ],
            stream: false,
            options: ChatOptions {
                temperature: SAMPLING_TEMPERATURE,
            },
        };

        let url = format!("{}/api/chat", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(TagError::ModelRequest)?;

        let status = response.status();
        let body = response.text().await.map_err(TagError::ModelRequest)?;
        if !status.is_success() {
            return Err(TagError::ModelCall(format!("{status}: {body}")));
        }

        // The reply text lives at `message.content`. Anything else is an
        // unexpected shape and carries the raw body for diagnosis.
        let chat_response: ChatResponse = serde_json::from_str(&body)
            .map_err(|_| TagError::ModelCall(format!("unexpected response shape: {body}")))?;

        chat_response
            .message
            .and_then(|message| message.content)
            .ok_or_else(|| TagError::ModelCall(format!("unexpected response shape: {body}")))
    }
}
