/// Caller input for one analysis. At least one of `ingredients` and
/// `image_url` must be present; when both are, both reach the model.
#[derive(Debug, Clone, Default)]
pub struct JudgeInput {
    pub ingredients: Option<String>,
    /// Either a base64 `data:` URL or a fetchable remote URL.
    pub image_url: Option<String>,
    /// Optional replacement persona, persisted before synthesis.
    pub persona: Option<String>,
}

/// Inline image bytes ready for the model API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// One piece of the model request content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagePart {
    Text(String),
    Image(ImagePayload),
}
