use std::sync::Arc;

use sqlx::PgPool;

use crate::gemini::InsightGenerator;
use crate::insights::store::InsightStore;

/// Shared application state injected into all route handlers via Axum
/// extractors. Both seams are trait objects so tests can swap them for
/// in-memory fakes.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub insights: Arc<dyn InsightGenerator>,
    pub store: Arc<dyn InsightStore>,
}
