pub mod ollama;

use crate::errors::TagError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with a vision-capable chat model.
///
/// This defines a common interface for endpoints that accept role-tagged
/// messages where a message may carry both text and base64 image payloads,
/// and that return generated text.
#[async_trait]
pub trait VisionProvider: Send + Sync + Debug + DynClone {
    /// Sends one system/user exchange, with `images` attached to the user
    /// message, and returns the model's raw reply text.
    async fn chat(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        images: &[String],
    ) -> Result<String, TagError>;
}

dyn_clone::clone_trait_object!(VisionProvider);
