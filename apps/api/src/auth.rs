use axum::http::{header, HeaderMap};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;

/// Pulls the bearer token out of the Authorization header, if any.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Resolves an opaque session token to a user id.
///
/// The auth provider itself is external; it writes the sessions table and
/// this is a single lookup against it. A missing header or unknown token
/// is `Unauthorized`.
pub async fn resolve_identity(pool: &PgPool, headers: &HeaderMap) -> Result<Uuid, AppError> {
    let token = bearer_token(headers).ok_or(AppError::Unauthorized)?;

    let user_id: Option<Uuid> = sqlx::query_scalar("SELECT user_id FROM sessions WHERE token = $1")
        .bind(token)
        .fetch_optional(pool)
        .await?;

    user_id.ok_or(AppError::Unauthorized)
}
