use axum::extract::State;
use nutripilot_core::domain::authentication::{ports::AuthService, value_objects::LoginInput};

use crate::application::http::{
    authentication::{handlers::signup::AuthResponse, validators::LoginRequest},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/login",
    tag = "authentication",
    summary = "Log in",
    description = "Validates credentials and issues a session token",
    responses(
        (status = 200, body = AuthResponse),
        (status = 400, description = "Unknown user or invalid password")
    ),
    request_body = LoginRequest
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginRequest>,
) -> Result<Response<AuthResponse>, ApiError> {
    let output = state
        .service
        .login(LoginInput {
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AuthResponse::from(output)))
}
