//! Support request endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{request::CreateRequest, Notification, SupportRequest},
};

use super::CurrentSession;

/// Response wrapping a request plus the notification to render
#[derive(Serialize, ToSchema)]
pub struct RequestResponse {
    pub request: SupportRequest,
    pub notification: Notification,
}

/// List all support requests in creation order
#[utoipa::path(
    get,
    path = "/requests",
    tag = "requests",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Support requests", body = Vec<SupportRequest>)
    )
)]
pub async fn list_requests(
    State(state): State<crate::AppState>,
    CurrentSession(_session): CurrentSession,
) -> AppResult<Json<Vec<SupportRequest>>> {
    let requests = state.services.requests.list().await;
    Ok(Json(requests))
}

/// Get a single support request
#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request details", body = SupportRequest),
        (status = 404, description = "Request not found")
    )
)]
pub async fn get_request(
    State(state): State<crate::AppState>,
    CurrentSession(_session): CurrentSession,
    Path(id): Path<i32>,
) -> AppResult<Json<SupportRequest>> {
    let request = state.services.requests.get(id).await?;
    Ok(Json(request))
}

/// Create a support request
#[utoipa::path(
    post,
    path = "/requests",
    tag = "requests",
    security(("bearer_auth" = [])),
    request_body = CreateRequest,
    responses(
        (status = 201, description = "Request created", body = RequestResponse),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn create_request(
    State(state): State<crate::AppState>,
    CurrentSession(session): CurrentSession,
    Json(data): Json<CreateRequest>,
) -> AppResult<(StatusCode, Json<RequestResponse>)> {
    let (request, notification) = state
        .services
        .requests
        .create(&data, Some(&session.username))
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(RequestResponse {
            request,
            notification,
        }),
    ))
}

/// Approve a pending request
#[utoipa::path(
    post,
    path = "/requests/{id}/approve",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request approved", body = RequestResponse),
        (status = 404, description = "Request not found"),
        (status = 409, description = "Request is not pending")
    )
)]
pub async fn approve_request(
    State(state): State<crate::AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<i32>,
) -> AppResult<Json<RequestResponse>> {
    session.require_admin()?;
    let (request, notification) = state.services.requests.approve(id).await?;
    Ok(Json(RequestResponse {
        request,
        notification,
    }))
}

/// Reject a pending request
#[utoipa::path(
    post,
    path = "/requests/{id}/reject",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request rejected", body = RequestResponse),
        (status = 404, description = "Request not found"),
        (status = 409, description = "Request is not pending")
    )
)]
pub async fn reject_request(
    State(state): State<crate::AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<i32>,
) -> AppResult<Json<RequestResponse>> {
    session.require_admin()?;
    let (request, notification) = state.services.requests.reject(id).await?;
    Ok(Json(RequestResponse {
        request,
        notification,
    }))
}
