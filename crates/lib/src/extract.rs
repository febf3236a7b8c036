//! # Tolerant Reply Extraction
//!
//! Vision models are asked for JSON only, but frequently wrap the object in
//! commentary or a markdown fence anyway. This module recovers the object
//! from such replies.

use crate::errors::TagError;
use regex::Regex;
use serde_json::Value;

/// Interprets reply text as a JSON object even when the model surrounds it
/// with prose.
///
/// Strict parsing is attempted first. On failure, the largest `{`..`}` span
/// in the text (first opening brace to last closing brace) is parsed
/// instead; a non-greedy match would stop at the first `}` and truncate any
/// reply whose object nests `suggested`. Markdown fences fall outside the
/// span, so fenced replies parse too.
pub fn force_json(reply: &str) -> Result<Value, TagError> {
    if let Ok(value) = serde_json::from_str::<Value>(reply) {
        if value.is_object() {
            return Ok(value);
        }
    }

    let re = Regex::new(r"(?s)\{.*\}")?;
    let candidate = re
        .find(reply)
        .ok_or_else(|| TagError::MalformedReply(reply.to_string()))?;

    match serde_json::from_str::<Value>(candidate.as_str()) {
        Ok(value) if value.is_object() => Ok(value),
        _ => Err(TagError::MalformedReply(reply.to_string())),
    }
}
