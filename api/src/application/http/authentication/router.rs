use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    login::{__path_login, login},
    signup::{__path_signup, signup},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(signup, login))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/auth/signup", state.args.server.root_path),
            post(signup),
        )
        .route(
            &format!("{}/auth/login", state.args.server.root_path),
            post(login),
        )
}
