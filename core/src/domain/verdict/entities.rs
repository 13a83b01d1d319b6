use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Notice used when the model reply could not be parsed into the result shape.
pub const FALLBACK_SHORT_REASON: &str =
    "The analysis completed but the reply was not in the expected format";
/// Notice recorded in `uncertainty_note` on the fallback path.
pub const FALLBACK_UNCERTAINTY_NOTE: &str =
    "Automatic fallback: the model reply could not be parsed as a structured verdict";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Safe,
    Caution,
    Avoid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UiTheme {
    Green,
    Yellow,
    Red,
}

/// The canonical analysis response. Every code path that answers a judge
/// request emits exactly this shape, including the parse fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VerdictResult {
    pub verdict: Verdict,
    pub short_reason: String,
    pub detailed_reason: String,
    pub ui_theme: UiTheme,
    pub highlighted_ingredients: Vec<String>,
    pub uncertainty_note: String,
}

impl VerdictResult {
    /// Deterministic substitute for an unparseable model reply. The raw text
    /// is preserved in `detailed_reason` so nothing is silently discarded.
    pub fn fallback(raw_reply: &str) -> Self {
        Self {
            verdict: Verdict::Caution,
            short_reason: FALLBACK_SHORT_REASON.to_string(),
            detailed_reason: raw_reply.to_string(),
            ui_theme: UiTheme::Yellow,
            highlighted_ingredients: Vec::new(),
            uncertainty_note: FALLBACK_UNCERTAINTY_NOTE.to_string(),
        }
    }
}
