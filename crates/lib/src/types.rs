use serde::{Deserialize, Serialize};

/// Describes one media item submitted for tagging.
///
/// Numeric facts (dimensions, duration, page count) are informational only
/// and are never derived or rewritten by the service; they travel into the
/// model's context verbatim.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaDescription {
    // Identity
    pub name: String,

    // Meta
    #[serde(default)]
    pub mime: Option<String>,
    #[serde(default)]
    pub size_bytes: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub modified_at: Option<String>,

    // Type & numeric facts
    pub file_type: String,
    #[serde(default)]
    pub image_width: Option<u32>,
    #[serde(default)]
    pub image_height: Option<u32>,
    #[serde(default)]
    pub video_width: Option<u32>,
    #[serde(default)]
    pub video_height: Option<u32>,
    #[serde(default)]
    pub video_duration_sec: Option<f64>,
    #[serde(default)]
    pub video_fps: Option<f64>,
    #[serde(default)]
    pub video_codec: Option<String>,
    #[serde(default)]
    pub pdf_page_count: Option<u32>,

    // Previews: raw base64 strings, or data URLs whose prefix is stripped
    // before forwarding. The payload itself is never validated here.
    #[serde(default)]
    pub image_b64: Option<String>,
    #[serde(default)]
    pub video_frames_b64: Option<Vec<String>>,
    #[serde(default)]
    pub pdf_page0_b64: Option<String>,

    // Seed keywords supplied by the caller, passed into the model's context.
    #[serde(default)]
    pub raw_keywords: Vec<String>,
}

/// The normalized tagging result returned to the caller.
///
/// Every entry in the three lists is trimmed, lowercase, non-empty, and
/// unique within its list, in first-occurrence order from the model's reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagResult {
    pub tags: Vec<String>,
    pub topics: Vec<String>,
    pub raw_keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested: Option<Suggested>,
}

/// The model's rename suggestion, with bounded strings and a coerced
/// confidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggested {
    pub rename: String,
    pub reason: String,
    pub confidence: f64,
}
