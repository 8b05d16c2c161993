//! Dashboard statistics endpoint

use axum::{extract::State, Json};

use crate::{error::AppResult, services::stats::StatsOverview};

use super::CurrentSession;

/// Live counters for the admin dashboard tiles
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard counters", body = StatsOverview),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<StatsOverview>> {
    session.require_admin()?;
    Ok(Json(state.services.stats.overview().await))
}
