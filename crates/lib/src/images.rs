//! # Preview Collection
//!
//! Gathers the base64 preview payloads that accompany a tagging request.
//! The vision endpoint wants raw base64, so data-URL prefixes are stripped;
//! the payload bytes themselves are never validated here.

use crate::types::MediaDescription;

/// Strips a `data:` URL prefix, returning the raw base64 payload.
///
/// Strings that are already raw base64 are returned unchanged.
pub fn strip_data_url(payload: &str) -> &str {
    if payload.starts_with("data:") {
        if let Some((_, raw)) = payload.split_once(',') {
            return raw;
        }
    }
    payload
}

/// Collects the previews to forward, in a fixed order: the still image,
/// then at most `max_frames` video frames, then the first PDF page.
/// Frames beyond the cap are dropped silently.
pub fn collect_images(desc: &MediaDescription, max_frames: usize) -> Vec<String> {
    let mut images = Vec::new();

    if let Some(image) = &desc.image_b64 {
        images.push(strip_data_url(image).to_string());
    }
    if let Some(frames) = &desc.video_frames_b64 {
        for frame in frames.iter().take(max_frames) {
            images.push(strip_data_url(frame).to_string());
        }
    }
    if let Some(page) = &desc.pdf_page0_b64 {
        images.push(strip_data_url(page).to_string());
    }

    images
}
