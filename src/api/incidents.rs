//! Incident report endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{IncidentDraft, IncidentReport, Notification},
};

use super::CurrentSession;

/// Response wrapping a filed report plus the notification to render
#[derive(Serialize, ToSchema)]
pub struct IncidentResponse {
    pub report: IncidentReport,
    pub notification: Notification,
}

/// File an incident report
#[utoipa::path(
    post,
    path = "/incidents",
    tag = "incidents",
    security(("bearer_auth" = [])),
    request_body = IncidentDraft,
    responses(
        (status = 201, description = "Report filed", body = IncidentResponse),
        (status = 400, description = "Missing required fields"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn create_incident(
    State(state): State<crate::AppState>,
    CurrentSession(session): CurrentSession,
    Json(draft): Json<IncidentDraft>,
) -> AppResult<(StatusCode, Json<IncidentResponse>)> {
    session.require_admin()?;
    let (report, notification) = state.services.incidents.create(&draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(IncidentResponse {
            report,
            notification,
        }),
    ))
}

/// List filed incident reports
#[utoipa::path(
    get,
    path = "/incidents",
    tag = "incidents",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Incident reports", body = Vec<IncidentReport>),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn list_incidents(
    State(state): State<crate::AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<Vec<IncidentReport>>> {
    session.require_admin()?;
    let reports = state.services.incidents.list().await;
    Ok(Json(reports))
}
