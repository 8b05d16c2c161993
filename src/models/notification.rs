//! Notification event model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::NotificationKind;

/// A one-shot notification emitted after a state-changing operation.
///
/// Returned inline with the operation's response; never stored or queued.
/// The client renders it as a toast.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Error,
        }
    }
}
