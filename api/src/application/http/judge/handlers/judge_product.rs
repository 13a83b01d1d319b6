use axum::extract::State;
use nutripilot_core::domain::verdict::{
    entities::VerdictResult, ports::VerdictService, value_objects::JudgeInput,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        judge::validators::JudgeProductRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "judge",
    summary = "Analyze a product",
    description = "Judges ingredient text and/or a label photo against the caller's health profile",
    security(("bearer" = [])),
    responses(
        (status = 200, body = VerdictResult),
        (status = 400, description = "Neither ingredients nor an image supplied"),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    request_body = JudgeProductRequest
)]
pub async fn judge_product(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<JudgeProductRequest>,
) -> Result<Response<VerdictResult>, ApiError> {
    let result = state
        .service
        .judge(
            identity,
            JudgeInput {
                ingredients: payload.ingredients,
                image_url: payload.image_url,
                persona: payload.user_profile,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
