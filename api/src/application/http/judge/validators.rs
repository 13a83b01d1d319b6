use nutripilot_core::domain::chat::entities::ChatTurn;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Analysis request. At least one of `ingredients` and `image_url` must be
/// present; that cross-field rule lives in the core so it holds for every
/// caller, not just this surface.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct JudgeProductRequest {
    #[validate(length(max = 20000, message = "ingredients must be at most 20000 characters"))]
    pub ingredients: Option<String>,
    /// Base64 `data:` URL or a fetchable remote URL.
    pub image_url: Option<String>,
    #[serde(rename = "userProfile")]
    pub user_profile: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct JudgeChatRequest {
    #[validate(length(min = 1, max = 4000, message = "message must be between 1 and 4000 characters"))]
    pub message: String,
    /// The verdict text this conversation is about.
    pub context: Option<String>,
    #[serde(rename = "userProfile")]
    pub user_profile: Option<String>,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}
