//! # Media Tagging
//!
//! This crate turns a media description into normalized tags, topics, and
//! keywords by prompting a locally hosted vision-capable chat model and
//! post-processing its free-form JSON reply.

pub mod errors;
pub mod extract;
pub mod images;
pub mod normalize;
pub mod prompts;
pub mod providers;
pub mod types;

pub use errors::TagError;
pub use types::{MediaDescription, Suggested, TagResult};

use crate::{
    extract::force_json,
    images::collect_images,
    normalize::normalize_reply,
    prompts::{build_context_text, TAGGING_SYSTEM_PROMPT},
    providers::ai::VisionProvider,
};
use tracing::{debug, info};

/// Runs the full tagging pipeline for one media item.
///
/// Builds the context block, gathers previews (at most `max_frames` video
/// frames), sends a single system/user exchange to the provider, and
/// normalizes the reply. There are no retries: one failed outbound call
/// fails the whole request.
pub async fn tag_media(
    provider: &dyn VisionProvider,
    desc: &MediaDescription,
    max_frames: usize,
) -> Result<TagResult, TagError> {
    let context = build_context_text(desc);
    let images = collect_images(desc, max_frames);
    info!(
        file = %desc.name,
        file_type = %desc.file_type,
        images = images.len(),
        "Requesting tags from the vision model"
    );

    let reply = provider
        .chat(TAGGING_SYSTEM_PROMPT, &context, &images)
        .await?;
    debug!("<-- Vision model reply: {reply}");

    let parsed = force_json(&reply)?;
    Ok(normalize_reply(&parsed))
}
