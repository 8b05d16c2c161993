//! Troubleshooting guide endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{error::AppResult, models::TroubleshootGuide};

use super::CurrentSession;

/// Guide search parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct GuideQuery {
    /// Case-insensitive term matched against title, category and steps
    pub search: Option<String>,
}

/// List troubleshooting guides, optionally filtered
#[utoipa::path(
    get,
    path = "/guides",
    tag = "guides",
    security(("bearer_auth" = [])),
    params(GuideQuery),
    responses(
        (status = 200, description = "Troubleshooting guides", body = Vec<TroubleshootGuide>)
    )
)]
pub async fn list_guides(
    State(state): State<crate::AppState>,
    CurrentSession(_session): CurrentSession,
    Query(query): Query<GuideQuery>,
) -> AppResult<Json<Vec<TroubleshootGuide>>> {
    let guides = match query.search.as_deref() {
        Some(term) => state.services.guides.search(term),
        None => state.services.guides.list(),
    };
    Ok(Json(guides))
}
