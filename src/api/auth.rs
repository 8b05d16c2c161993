//! Session endpoints
//!
//! Any non-blank credentials are accepted; there is nothing to verify them
//! against. The returned token identifies the session until logout.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{enums::Role, session::LoginRequest},
};

use super::CurrentSession;

/// Login response
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Session bearer token
    pub token: Uuid,
    pub username: String,
    pub role: Role,
}

/// Open a session
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session opened", body = LoginResponse),
        (status = 400, description = "Blank username or password")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(data): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let session = state.services.sessions.login(&data).await?;
    Ok(Json(LoginResponse {
        token: session.token,
        username: session.username,
        role: session.role,
    }))
}

/// Close the caller's session
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Session closed"),
        (status = 401, description = "Unknown session")
    )
)]
pub async fn logout(
    State(state): State<crate::AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<StatusCode> {
    state.services.sessions.logout(session.token).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Echo the caller's session
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current session", body = crate::models::Session),
        (status = 401, description = "Unknown session")
    )
)]
pub async fn me(CurrentSession(session): CurrentSession) -> Json<crate::models::Session> {
    Json(session)
}
