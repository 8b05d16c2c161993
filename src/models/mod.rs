//! Data models for the helpdesk portal

pub mod enums;
pub mod guide;
pub mod incident;
pub mod inventory;
pub mod message;
pub mod notification;
pub mod request;
pub mod session;

// Re-export commonly used types
pub use enums::{
    ItemCondition, ItemStatus, NotificationKind, ReplacementSource, RequestCategory,
    RequestPriority, RequestStatus, Role,
};
pub use guide::TroubleshootGuide;
pub use incident::{IncidentDraft, IncidentReport};
pub use inventory::{InventoryCounts, InventoryItem};
pub use message::Message;
pub use notification::Notification;
pub use request::SupportRequest;
pub use session::Session;
