use axum::extract::State;
use nutripilot_core::domain::user::ports::UserService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct JudgeContextResponse {
    pub persona: String,
}

#[utoipa::path(
    get,
    path = "/context",
    tag = "judge",
    summary = "Fetch the stored health profile",
    security(("bearer" = [])),
    responses(
        (status = 200, body = JudgeContextResponse),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
pub async fn get_judge_context(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<JudgeContextResponse>, ApiError> {
    let persona = state
        .service
        .get_profile(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(JudgeContextResponse { persona }))
}
