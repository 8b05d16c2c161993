//! Shared domain enums
//!
//! The portal's status/priority/category values are closed sets; unknown JSON
//! values are rejected at deserialization rather than mapped to a fallback.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// RequestStatus
// ---------------------------------------------------------------------------

/// Lifecycle state of a support request.
///
/// Only `pending -> approved` and `pending -> rejected` are legal transitions.
/// `completed` exists for seeded historical data; no operation produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Completed => "completed",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// RequestPriority
// ---------------------------------------------------------------------------

/// Priority of a support request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RequestPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for RequestPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RequestPriority::Low => "low",
            RequestPriority::Medium => "medium",
            RequestPriority::High => "high",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// RequestCategory
// ---------------------------------------------------------------------------

/// Issue category of a support request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RequestCategory {
    Hardware,
    Software,
    Network,
    Printer,
    Email,
    Account,
    Other,
}

impl std::fmt::Display for RequestCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RequestCategory::Hardware => "Hardware Issue",
            RequestCategory::Software => "Software Issue",
            RequestCategory::Network => "Network/Internet",
            RequestCategory::Printer => "Printer/Scanner",
            RequestCategory::Email => "Email/Communication",
            RequestCategory::Account => "Account/Access",
            RequestCategory::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// ItemCondition
// ---------------------------------------------------------------------------

/// Physical condition of an inventory item.
///
/// `broken` is accepted as a legacy spelling of `needs_repair` on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ItemCondition {
    #[default]
    New,
    Excellent,
    Good,
    Fair,
    Poor,
    #[serde(alias = "broken")]
    NeedsRepair,
}

impl std::fmt::Display for ItemCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ItemCondition::New => "New",
            ItemCondition::Excellent => "Excellent",
            ItemCondition::Good => "Good",
            ItemCondition::Fair => "Fair",
            ItemCondition::Poor => "Poor",
            ItemCondition::NeedsRepair => "Needs Repair",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// ItemStatus
// ---------------------------------------------------------------------------

/// Inventory lifecycle bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Active,
    Inactive,
    Disposed,
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ItemStatus::Active => "active",
            ItemStatus::Inactive => "inactive",
            ItemStatus::Disposed => "disposed",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// ReplacementSource
// ---------------------------------------------------------------------------

/// Where replacement items for an incident come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReplacementSource {
    #[default]
    Inventory,
    Purchase,
    Transfer,
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Portal role selected at login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::Admin => "admin",
            Role::User => "user",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// NotificationKind
// ---------------------------------------------------------------------------

/// Flavor of a notification event (rendered as a toast by the client)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}
