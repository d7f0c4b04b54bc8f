pub mod cors;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::search::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    let router = Router::new()
        .route(
            "/health",
            get(health::health_handler).options(cors::preflight),
        )
        .route(
            "/upload",
            post(handlers::handle_upload).options(cors::preflight),
        )
        .route(
            "/search",
            post(handlers::handle_search).options(cors::preflight),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state);

    cors::with_cors_headers(router)
}
