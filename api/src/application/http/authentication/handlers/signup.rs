use axum::extract::State;
use nutripilot_core::domain::authentication::{
    ports::AuthService,
    value_objects::{AuthOutput, RegisterInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    authentication::validators::SignupRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserSummary {
    pub email: String,
    pub persona: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserSummary,
}

impl From<AuthOutput> for AuthResponse {
    fn from(output: AuthOutput) -> Self {
        Self {
            token: output.token,
            user: UserSummary {
                email: output.user.email,
                persona: output.user.persona,
            },
        }
    }
}

#[utoipa::path(
    post,
    path = "/signup",
    tag = "authentication",
    summary = "Create an account",
    description = "Creates a user with a salted credential hash and issues a session token",
    responses(
        (status = 201, body = AuthResponse),
        (status = 400, description = "Missing fields or user already exists")
    ),
    request_body = SignupRequest
)]
pub async fn signup(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SignupRequest>,
) -> Result<Response<AuthResponse>, ApiError> {
    let output = state
        .service
        .register(RegisterInput {
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AuthResponse::from(output)))
}
