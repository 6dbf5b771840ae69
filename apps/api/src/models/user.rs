use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A platform user. `industry` is optional until onboarding sets it;
/// insight generation requires it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub external_id: String,
    pub email: Option<String>,
    pub industry: Option<String>,
    pub created_at: DateTime<Utc>,
}
