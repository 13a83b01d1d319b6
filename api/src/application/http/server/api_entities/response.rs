use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// Typed success response. The body is serialized as-is, with no envelope,
/// so handler signatures state the exact wire shape.
pub enum Response<T> {
    OK(T),
    Created(T),
}

impl<T> IntoResponse for Response<T>
where
    T: Serialize,
{
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::OK(body) => (StatusCode::OK, Json(body)).into_response(),
            Response::Created(body) => (StatusCode::CREATED, Json(body)).into_response(),
        }
    }
}
