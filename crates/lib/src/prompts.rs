//! # Tagging Prompts
//!
//! The hardcoded system prompt sent with every tagging request, plus the
//! builder for the per-item context block that accompanies it.

use crate::types::MediaDescription;

/// The system instruction for the vision model. Free-form tags and topics,
/// no fixed taxonomy.
pub const TAGGING_SYSTEM_PROMPT: &str = r#"You are a media categorisation AI.

GOAL
Return a JSON object describing the media using:
- "tags": 3-8 short, free-form tags that describe the visual FORM and salient attributes. Examples of form tags (not exhaustive): photo, diagram, erd, flowchart, uml, chart, graph, table, spreadsheet, screenshot, slide, document_page, map, blueprint, poster.
- "topics": 1-4 short, free-form subject/domain topics about what it's about (e.g., sports, golf, tournament, databases, data_modeling, schema_design). Do not limit yourself to examples; invent new ones when appropriate.
- "raw_keywords": 0-12 short keywords you infer from visible text or core concepts (lowercase).
- "suggested": { "rename": string, "reason": string, "confidence": 0..1 } - snake_case, keep extension if determinable, <= 80 chars.

RULES
1) Always cover BOTH axes:
   - at least ONE FORM-oriented tag (e.g., diagram/erd/flowchart/photo/...),
   - and at least ONE DOMAIN topic (e.g., golf/tournament/databases/...).
2) Prefer lowercase; use single words or kebab_case/snake_case; no spaces.
3) Do NOT invent or change numeric metadata (width/height/duration/pages). They are informational only.
4) Base decisions primarily on the provided pixels (and frames/pages). Ignore filename unless helpful.
5) The rename should reflect both the form and the subject when clear (e.g., golf_competition_entity_relationship_diagram.png).

OUTPUT
Return ONLY valid JSON with keys:
{"tags":[...], "topics":[...], "raw_keywords":[...], "suggested":{"rename":"...", "reason":"...", "confidence":0.0}}"#;

/// Builds the per-item context block: one line per fact, closing with the
/// JSON-only instruction. Pure; missing facts render as `unknown`.
pub fn build_context_text(desc: &MediaDescription) -> String {
    format!(
        "file_type={}\n\
         mime={}\n\
         size_bytes={}\n\
         image_wh={}x{}\n\
         video_wh={}x{} dur={}s fps={}\n\
         pdf_page_count={}\n\
         seed_keywords={}\n\
         filename={}\n\
         Respond with JSON only.",
        desc.file_type,
        show(&desc.mime),
        show(&desc.size_bytes),
        show(&desc.image_width),
        show(&desc.image_height),
        show(&desc.video_width),
        show(&desc.video_height),
        show(&desc.video_duration_sec),
        show(&desc.video_fps),
        show(&desc.pdf_page_count),
        desc.raw_keywords.join(", "),
        desc.name,
    )
}

fn show<T: std::fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "unknown".to_string(),
    }
}
