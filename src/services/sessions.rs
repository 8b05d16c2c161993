//! Session service
//!
//! The portal performs no credential verification: any non-blank username and
//! password pair opens a session for the chosen role.

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{session::LoginRequest, Session},
    repository::Repository,
};

#[derive(Clone)]
pub struct SessionsService {
    repository: Repository,
}

impl SessionsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Open a session; created at login, destroyed at logout
    pub async fn login(&self, data: &LoginRequest) -> AppResult<Session> {
        data.validate()?;

        let session = Session {
            token: Uuid::new_v4(),
            username: data.username.trim().to_string(),
            role: data.role,
            logged_in_at: Utc::now(),
        };
        self.repository.sessions.insert(session.clone()).await;
        tracing::info!(username = %session.username, role = %session.role, "session opened");
        Ok(session)
    }

    pub async fn logout(&self, token: Uuid) -> AppResult<()> {
        let session = self.repository.sessions.remove(token).await?;
        tracing::info!(username = %session.username, "session closed");
        Ok(())
    }

    pub async fn get(&self, token: Uuid) -> AppResult<Session> {
        self.repository.sessions.get(token).await
    }
}
