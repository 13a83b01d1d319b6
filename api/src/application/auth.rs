use axum::{
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use nutripilot_core::domain::authentication::{ports::AuthService, value_objects::Identity};

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Verifies the bearer token, if any, and attaches the resulting [`Identity`]
/// to the request. Requests without a valid token pass through unauthenticated;
/// protected handlers reject them via [`RequiredIdentity`].
pub async fn auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if let Some(header) = req.headers().get(AUTHORIZATION)
        && let Ok(value) = header.to_str()
        && let Some(token) = value.strip_prefix("Bearer ")
        && !token.is_empty()
    {
        match state.service.verify_token(token.to_string()).await {
            Ok(identity) => {
                req.extensions_mut().insert(identity);
            }
            Err(e) => {
                tracing::debug!("Rejected bearer token: {}", e);
            }
        }
    }

    Ok(next.run(req).await)
}

/// Extractor handing the verified identity to handlers as an explicit
/// parameter. This is the sole authorization boundary: either a verified
/// identifier is attached, or the request is rejected.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| {
                ApiError::Unauthorized(
                    "Authentication required: provide a bearer token".to_string(),
                )
            })
    }
}
