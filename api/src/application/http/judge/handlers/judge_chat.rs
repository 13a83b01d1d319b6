use axum::extract::State;
use nutripilot_core::domain::chat::{ports::ChatService, value_objects::ChatInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        judge::validators::JudgeChatRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub reply: String,
}

#[utoipa::path(
    post,
    path = "/chat",
    tag = "judge",
    summary = "Follow-up chat about a verdict",
    description = "Continues a caller-supplied conversation about a previous analysis",
    security(("bearer" = [])),
    responses(
        (status = 200, body = ChatResponse),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    request_body = JudgeChatRequest
)]
pub async fn judge_chat(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<JudgeChatRequest>,
) -> Result<Response<ChatResponse>, ApiError> {
    let reply = state
        .service
        .follow_up(
            identity,
            ChatInput {
                message: payload.message,
                context: payload.context,
                persona: payload.user_profile,
                history: payload.history,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ChatResponse { reply }))
}
