use std::sync::LazyLock;

use base64::{Engine as _, engine::general_purpose};
use regex::Regex;

use crate::domain::{
    common::entities::app_errors::CoreError,
    verdict::{entities::VerdictResult, value_objects::ImagePayload},
};

static DATA_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:(?<mime>[^;,]+)?(?<b64>;base64)?,(?<payload>.*)$")
        .expect("data URL pattern is valid")
});

/// Decodes a `data:` URL into inline image bytes. Only base64 payloads are
/// accepted; the mime type defaults to JPEG when the header omits it.
pub fn parse_data_url(url: &str) -> Result<ImagePayload, CoreError> {
    let captures = DATA_URL
        .captures(url)
        .ok_or_else(|| CoreError::Invalid("Malformed data URL".to_string()))?;

    if captures.name("b64").is_none() {
        return Err(CoreError::Invalid(
            "Only base64 data URLs are supported".to_string(),
        ));
    }

    let mime_type = captures
        .name("mime")
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "image/jpeg".to_string());

    let payload = captures.name("payload").map(|m| m.as_str()).unwrap_or("");
    let data = general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| CoreError::Invalid(format!("Invalid base64 image data: {}", e)))?;

    Ok(ImagePayload { mime_type, data })
}

/// Extracts the JSON object from a model reply that may wrap it in markdown
/// code fences or surrounding prose. One normalization step, applied before
/// parsing, keeps provider quirks out of the rest of the pipeline.
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        let rest = rest.strip_prefix("json").unwrap_or(rest);
        text = rest.strip_suffix("```").unwrap_or(rest).trim();
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }

    Some(&text[start..=end])
}

/// Maps the raw model reply onto the canonical result shape. Any parse
/// failure, missing field, or out-of-enum value yields the fallback object;
/// this path never errors.
pub fn parse_verdict_reply(raw: &str) -> VerdictResult {
    extract_json_object(raw)
        .and_then(|json| serde_json::from_str::<VerdictResult>(json).ok())
        .unwrap_or_else(|| {
            tracing::warn!("Model reply was not a structured verdict, using fallback");
            VerdictResult::fallback(raw)
        })
}
