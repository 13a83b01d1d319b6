use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    get_judge_context::{__path_get_judge_context, get_judge_context},
    judge_chat::{__path_judge_chat, judge_chat},
    judge_product::{__path_judge_product, judge_product},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(judge_product, judge_chat, get_judge_context))]
pub struct JudgeApiDoc;

pub fn judge_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/judge", state.args.server.root_path),
            post(judge_product),
        )
        .route(
            &format!("{}/judge/chat", state.args.server.root_path),
            post(judge_chat),
        )
        .route(
            &format!("{}/judge/context", state.args.server.root_path),
            get(get_judge_context),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
