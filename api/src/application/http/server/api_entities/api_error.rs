use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use nutripilot_core::domain::common::entities::app_errors::CoreError;
use serde::Serialize;
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::BadRequest("User not found".to_string()),
            CoreError::AlreadyExists => ApiError::BadRequest("User already exists".to_string()),
            CoreError::InvalidCredential => ApiError::BadRequest("Invalid password".to_string()),
            CoreError::Invalid(message) => ApiError::BadRequest(message),
            CoreError::Unauthenticated(message) => ApiError::Unauthorized(message),
            CoreError::ExternalServiceError(message) => {
                // Provider detail is for the logs, not the caller
                tracing::error!("Upstream reasoning service failed: {}", message);
                ApiError::InternalServerError("AI reasoning failed".to_string())
            }
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Unauthorized(message) => {
                tracing::warn!("Unauthenticated request: {}", message);
                (StatusCode::UNAUTHORIZED, message)
            }
            ApiError::InternalServerError(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// JSON extractor that rejects malformed bodies and failed field validation
/// with a structured 400 instead of axum's plain-text rejection.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::BadRequest(rejection.body_text()))?;

        payload
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(Self(payload))
    }
}
