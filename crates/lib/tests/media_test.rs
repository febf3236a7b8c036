//! Tests for preview collection and context building.

use mediatag::images::{collect_images, strip_data_url};
use mediatag::prompts::build_context_text;
use mediatag::types::MediaDescription;

fn frame(i: usize) -> String {
    format!("ZnJhbWU{i}=")
}

#[test]
fn test_data_url_prefix_is_stripped() {
    assert_eq!(strip_data_url("data:image/png;base64,aGVsbG8="), "aGVsbG8=");
    assert_eq!(strip_data_url("aGVsbG8="), "aGVsbG8=");
    // A data URL without a comma has no payload to recover.
    assert_eq!(strip_data_url("data:image/png"), "data:image/png");
}

#[test]
fn test_data_url_and_raw_payload_produce_identical_images() {
    let raw = MediaDescription {
        name: "a.png".into(),
        file_type: "image".into(),
        image_b64: Some("aGVsbG8=".into()),
        ..Default::default()
    };
    let data_url = MediaDescription {
        image_b64: Some("data:image/png;base64,aGVsbG8=".into()),
        ..raw.clone()
    };

    assert_eq!(collect_images(&raw, 8), collect_images(&data_url, 8));
}

#[test]
fn test_frame_cap_forwards_exactly_the_first_n() {
    let desc = MediaDescription {
        name: "clip.mp4".into(),
        file_type: "video".into(),
        video_frames_b64: Some((0..10).map(frame).collect()),
        ..Default::default()
    };

    let images = collect_images(&desc, 8);

    assert_eq!(images.len(), 8);
    assert_eq!(images[0], frame(0));
    assert_eq!(images[7], frame(7));
}

#[test]
fn test_collection_order_is_image_then_frames_then_pdf_page() {
    let desc = MediaDescription {
        name: "mixed".into(),
        file_type: "other".into(),
        image_b64: Some("aW1n".into()),
        video_frames_b64: Some(vec![frame(0), frame(1)]),
        pdf_page0_b64: Some("cGRm".into()),
        ..Default::default()
    };

    let images = collect_images(&desc, 8);

    assert_eq!(images, vec!["aW1n".to_string(), frame(0), frame(1), "cGRm".to_string()]);
}

#[test]
fn test_absent_previews_yield_no_images() {
    let desc = MediaDescription {
        name: "notes.txt".into(),
        file_type: "other".into(),
        ..Default::default()
    };

    assert!(collect_images(&desc, 8).is_empty());
}

#[test]
fn test_malformed_base64_passes_through_untouched() {
    let desc = MediaDescription {
        name: "odd.png".into(),
        file_type: "image".into(),
        image_b64: Some("not base64 at all!!".into()),
        ..Default::default()
    };

    assert_eq!(collect_images(&desc, 8), vec!["not base64 at all!!".to_string()]);
}

#[test]
fn test_context_text_enumerates_facts_and_demands_json() {
    let desc = MediaDescription {
        name: "golf_erd.png".into(),
        file_type: "image".into(),
        mime: Some("image/png".into()),
        size_bytes: Some(12345),
        image_width: Some(800),
        image_height: Some(600),
        raw_keywords: vec!["golf".into(), "erd".into()],
        ..Default::default()
    };

    let context = build_context_text(&desc);

    assert!(context.starts_with("file_type=image\n"));
    assert!(context.contains("mime=image/png"));
    assert!(context.contains("size_bytes=12345"));
    assert!(context.contains("image_wh=800x600"));
    assert!(context.contains("seed_keywords=golf, erd"));
    assert!(context.contains("filename=golf_erd.png"));
    assert!(context.ends_with("Respond with JSON only."));
}

#[test]
fn test_context_text_marks_missing_facts() {
    let desc = MediaDescription {
        name: "clip.mp4".into(),
        file_type: "video".into(),
        video_width: Some(1920),
        video_height: Some(1080),
        video_duration_sec: Some(12.5),
        video_fps: Some(29.97),
        ..Default::default()
    };

    let context = build_context_text(&desc);

    assert!(context.contains("video_wh=1920x1080 dur=12.5s fps=29.97"));
    assert!(context.contains("mime=unknown"));
    assert!(context.contains("pdf_page_count=unknown"));
}
