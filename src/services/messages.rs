//! Direct message service

use chrono::Utc;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{message::SendMessageRequest, Message, Notification},
    repository::Repository,
};

const SUPPORT_SENDER: &str = "IT Support Team";
const SUPPORT_ACK: &str =
    "Thank you for your message. We'll get back to you shortly with assistance.";

#[derive(Clone)]
pub struct MessagesService {
    repository: Repository,
}

impl MessagesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Append a user message to the thread, followed by the support team's
    /// canned acknowledgement.
    pub async fn send(
        &self,
        sender: &str,
        data: &SendMessageRequest,
    ) -> AppResult<(Message, Notification)> {
        data.validate()?;

        let now = Utc::now();
        let message = self
            .repository
            .messages
            .push(sender, data.body.trim(), false, now)
            .await;
        self.repository
            .messages
            .push(SUPPORT_SENDER, SUPPORT_ACK, true, now)
            .await;

        let notification = Notification::success(
            "Message Sent",
            "Your message has been sent to the IT support team.",
        );
        Ok((message, notification))
    }

    /// The whole thread in order
    pub async fn list(&self) -> Vec<Message> {
        self.repository.messages.list().await
    }
}
