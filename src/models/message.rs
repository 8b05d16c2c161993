//! Direct message model (user <-> IT support thread)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::request::validate_not_blank;

/// One message in the support thread
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub id: i32,
    pub sender: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    /// Whether the message came from the IT support side
    pub from_support: bool,
}

/// Send message payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SendMessageRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub body: String,
}
