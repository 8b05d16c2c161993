//! API handlers for the helpdesk REST endpoints

pub mod auth;
pub mod guides;
pub mod health;
pub mod incidents;
pub mod inventory;
pub mod messages;
pub mod openapi;
pub mod requests;
pub mod stats;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

use crate::{error::AppError, models::Session, AppState};

/// Extractor for the caller's session from the bearer token
pub struct CurrentSession(pub Session);

#[async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Authentication("Invalid authorization header format".to_string()))?;

        let token = Uuid::parse_str(token)
            .map_err(|_| AppError::Authentication("Malformed session token".to_string()))?;

        let session = state.services.sessions.get(token).await?;
        Ok(CurrentSession(session))
    }
}
