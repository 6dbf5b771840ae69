pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::insights;
use crate::resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Insights API
        .route(
            "/api/v1/insights",
            get(insights::handlers::handle_get_insights),
        )
        // Resume API
        .route(
            "/api/v1/resume/pdf",
            post(resume::handlers::handle_render_pdf),
        )
        .route(
            "/api/v1/resume/preview",
            post(resume::handlers::handle_preview),
        )
        .with_state(state)
}
