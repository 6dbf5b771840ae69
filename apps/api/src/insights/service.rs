use chrono::{Duration, Utc};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::gemini::InsightGenerator;
use crate::insights::store::InsightStore;
use crate::models::insight::IndustryInsightRow;

/// How long a freshly generated insight stays current.
const REFRESH_HORIZON_DAYS: i64 = 7;

/// Returns the cached insight for the user's industry, generating and
/// persisting one on first access.
///
/// Cache hits come back unchanged — there is no staleness check against
/// `next_update`; refresh happens out-of-band. A miss performs exactly
/// one generator call and one insert; generation failure propagates
/// before anything is written. Concurrent misses for the same user are
/// an accepted race settled by the store's uniqueness constraint.
pub async fn get_or_create_insights(
    store: &dyn InsightStore,
    generator: &dyn InsightGenerator,
    user_id: Uuid,
) -> Result<IndustryInsightRow, AppError> {
    let profile = store
        .load_profile(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;

    if let Some(insight) = profile.insight {
        return Ok(insight);
    }

    let industry = profile
        .user
        .industry
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} has no industry set")))?;

    info!("No cached insight for user {user_id} ({industry}); generating");

    let payload = generator.generate_insights(&industry).await?;
    let next_update = Utc::now() + Duration::days(REFRESH_HORIZON_DAYS);

    store
        .insert_insight(user_id, &industry, &payload, next_update)
        .await
}
