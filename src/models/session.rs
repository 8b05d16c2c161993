//! Session model
//!
//! Login accepts any non-blank credentials (the portal performs no credential
//! verification); a session only carries who the caller claims to be and
//! which dashboard they picked.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::Role;
use super::request::validate_not_blank;

/// An active portal session
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Session {
    /// Opaque bearer token identifying the session
    pub token: Uuid,
    pub username: String,
    pub role: Role,
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    /// Gate admin-only operations on the selected role
    pub fn require_admin(&self) -> crate::error::AppResult<()> {
        if self.role != Role::Admin {
            return Err(crate::error::AppError::Authorization(
                "Admin role required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Login payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub username: String,
    /// Never checked against anything; must merely be present
    #[validate(custom(function = "validate_not_blank"))]
    pub password: String,
    pub role: Role,
}
