//! Support request model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::enums::{RequestCategory, RequestPriority, RequestStatus};

/// A support request submitted by a portal user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SupportRequest {
    pub id: i32,
    /// Human-readable ticket number (`TK-YYYY-MMNNN`), not guaranteed unique
    pub ticket_number: String,
    pub title: String,
    pub description: String,
    /// Display name of the requester, when known
    pub requester: Option<String>,
    pub office: String,
    pub category: RequestCategory,
    pub priority: RequestPriority,
    pub status: RequestStatus,
    pub date_created: NaiveDate,
    pub additional_info: Option<String>,
}

/// Create support request payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,
    pub category: RequestCategory,
    #[serde(default)]
    pub priority: RequestPriority,
    #[validate(custom(function = "validate_not_blank"))]
    pub office: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,
    pub additional_info: Option<String>,
}

/// Reject empty or whitespace-only field values
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("field must not be blank".into());
        return Err(err);
    }
    Ok(())
}
