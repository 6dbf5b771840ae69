use axum::{extract::State, http::HeaderMap, Json};

use crate::auth;
use crate::errors::AppError;
use crate::insights::service;
use crate::models::insight::IndustryInsightRow;
use crate::state::AppState;

/// GET /api/v1/insights
/// Returns the caller's industry insight, generating one on first access.
pub async fn handle_get_insights(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<IndustryInsightRow>, AppError> {
    let user_id = auth::resolve_identity(&state.db, &headers).await?;
    let row =
        service::get_or_create_insights(state.store.as_ref(), state.insights.as_ref(), user_id)
            .await?;
    Ok(Json(row))
}
