use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::insight::{IndustryInsightRow, InsightPayload};
use crate::models::user::UserRow;

/// A user row together with the cached insight for their industry, if one
/// exists.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user: UserRow,
    pub insight: Option<IndustryInsightRow>,
}

/// Persistence seam for insight records. Carried in `AppState` as
/// `Arc<dyn InsightStore>` so orchestration can be tested in memory.
#[async_trait]
pub trait InsightStore: Send + Sync {
    /// Loads the user plus any cached insight for the user's industry.
    /// `None` means the user does not exist.
    async fn load_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, AppError>;

    /// Persists a freshly generated insight and returns the stored row.
    /// The unique (user_id, industry) constraint resolves the
    /// unsynchronized double-miss race.
    async fn insert_insight(
        &self,
        user_id: Uuid,
        industry: &str,
        payload: &InsightPayload,
        next_update: DateTime<Utc>,
    ) -> Result<IndustryInsightRow, AppError>;
}

pub struct PgInsightStore {
    pool: PgPool,
}

impl PgInsightStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InsightStore for PgInsightStore {
    async fn load_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, AppError> {
        let user: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(user) = user else {
            return Ok(None);
        };

        let insight: Option<IndustryInsightRow> = match &user.industry {
            Some(industry) => {
                sqlx::query_as(
                    "SELECT * FROM industry_insights WHERE user_id = $1 AND industry = $2",
                )
                .bind(user_id)
                .bind(industry)
                .fetch_optional(&self.pool)
                .await?
            }
            None => None,
        };

        Ok(Some(UserProfile { user, insight }))
    }

    async fn insert_insight(
        &self,
        user_id: Uuid,
        industry: &str,
        payload: &InsightPayload,
        next_update: DateTime<Utc>,
    ) -> Result<IndustryInsightRow, AppError> {
        let salary_ranges = serde_json::to_value(&payload.salary_ranges)
            .map_err(|e| AppError::Internal(e.into()))?;

        let row: IndustryInsightRow = sqlx::query_as(
            r#"
            INSERT INTO industry_insights
                (id, user_id, industry, salary_ranges, growth_rate, demand_level,
                 top_skills, market_outlook, key_trends, recommended_skills,
                 next_update, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, now())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(industry)
        .bind(salary_ranges)
        .bind(payload.growth_rate)
        .bind(payload.demand_level.as_str())
        .bind(&payload.top_skills)
        .bind(payload.market_outlook.as_str())
        .bind(&payload.key_trends)
        .bind(&payload.recommended_skills)
        .bind(next_update)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
