//! Message thread store

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::models::Message;

#[derive(Default)]
struct MessagesState {
    next_id: i32,
    messages: Vec<Message>,
}

/// In-memory direct message thread with the IT support team
#[derive(Clone, Default)]
pub struct MessagesRepository {
    inner: Arc<RwLock<MessagesState>>,
}

impl MessagesRepository {
    /// Append a message to the thread
    pub async fn push(
        &self,
        sender: &str,
        body: &str,
        from_support: bool,
        timestamp: DateTime<Utc>,
    ) -> Message {
        let mut state = self.inner.write().await;
        state.next_id += 1;
        let message = Message {
            id: state.next_id,
            sender: sender.to_string(),
            body: body.to_string(),
            timestamp,
            from_support,
        };
        state.messages.push(message.clone());
        message
    }

    /// The whole thread in order
    pub async fn list(&self) -> Vec<Message> {
        self.inner.read().await.messages.clone()
    }
}
