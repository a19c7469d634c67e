pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/styles", get(handlers::handle_list_styles))
        .route(
            "/api/v1/profiles/status",
            get(handlers::handle_profiles_status),
        )
        .route(
            "/api/v1/ideas/generate",
            post(handlers::handle_generate_ideas),
        )
        .route(
            "/api/v1/articles/generate",
            post(handlers::handle_generate_articles),
        )
        .with_state(state)
}
