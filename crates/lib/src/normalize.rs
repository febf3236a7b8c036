//! # Reply Normalization
//!
//! Turns the model's free-form JSON reply into a `TagResult`. The reply
//! shape is not guaranteed, so every field is checked at runtime (list vs.
//! object vs. scalar) and coerced branch by branch. Nothing in here fails:
//! malformed fields degrade to empty or default values so a partially
//! sensible reply still yields a usable result.

use crate::types::{Suggested, TagResult};
use serde_json::Value;

/// Longest rename the normalizer keeps, in characters. The prompt declares
/// the same bound; enforcement happens only here.
pub const RENAME_MAX_CHARS: usize = 80;
/// Longest rename reason the normalizer keeps, in characters.
pub const REASON_MAX_CHARS: usize = 140;

/// Builds a `TagResult` from a parsed reply object.
pub fn normalize_reply(reply: &Value) -> TagResult {
    TagResult {
        tags: normalize_list(reply.get("tags")),
        topics: normalize_list(reply.get("topics")),
        raw_keywords: normalize_list(reply.get("raw_keywords")),
        suggested: normalize_suggested(reply.get("suggested")),
    }
}

/// Normalizes one string-list field from the reply.
///
/// Non-list values count as empty. Entries survive only when they are
/// strings that remain non-empty after trimming; survivors are lowercased
/// and deduplicated, preserving first-occurrence order.
pub fn normalize_list(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    let mut out: Vec<String> = Vec::new();
    for item in items {
        let Some(raw) = item.as_str() else { continue };
        let entry = raw.trim().to_lowercase();
        if entry.is_empty() || out.contains(&entry) {
            continue;
        }
        out.push(entry);
    }
    out
}

/// Extracts the rename suggestion, if the reply carries an object-shaped
/// `suggested` field. Sub-fields degrade individually: missing or
/// wrongly-typed strings become empty, an uncoercible confidence becomes
/// `0.0`.
fn normalize_suggested(value: Option<&Value>) -> Option<Suggested> {
    let Some(Value::Object(map)) = value else {
        return None;
    };

    let rename = map.get("rename").and_then(Value::as_str).unwrap_or_default();
    let reason = map.get("reason").and_then(Value::as_str).unwrap_or_default();
    let confidence = map.get("confidence").map_or(0.0, coerce_confidence);

    Some(Suggested {
        rename: truncate_chars(rename, RENAME_MAX_CHARS),
        reason: truncate_chars(reason, REASON_MAX_CHARS),
        confidence,
    })
}

/// Coerces a confidence value to a float. JSON numbers pass through and
/// numeric strings are parsed; everything else is `0.0`.
fn coerce_confidence(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

// Truncation counts characters, not bytes: slicing could split a UTF-8
// sequence.
fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
