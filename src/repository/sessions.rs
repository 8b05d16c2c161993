//! Session store

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::Session,
};

/// Active sessions keyed by bearer token
#[derive(Clone, Default)]
pub struct SessionsRepository {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionsRepository {
    pub async fn insert(&self, session: Session) {
        self.inner.write().await.insert(session.token, session);
    }

    pub async fn get(&self, token: Uuid) -> AppResult<Session> {
        self.inner
            .read()
            .await
            .get(&token)
            .cloned()
            .ok_or_else(|| AppError::Authentication("Unknown or expired session".to_string()))
    }

    /// Destroy a session; unknown tokens are reported
    pub async fn remove(&self, token: Uuid) -> AppResult<Session> {
        self.inner
            .write()
            .await
            .remove(&token)
            .ok_or_else(|| AppError::Authentication("Unknown or expired session".to_string()))
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::Role;
    use chrono::Utc;

    fn session() -> Session {
        Session {
            token: Uuid::new_v4(),
            username: "msantos".to_string(),
            role: Role::User,
            logged_in_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let repo = SessionsRepository::default();
        let s = session();
        repo.insert(s.clone()).await;
        assert_eq!(repo.count().await, 1);
        assert_eq!(repo.get(s.token).await.unwrap().username, "msantos");

        repo.remove(s.token).await.unwrap();
        assert_eq!(repo.count().await, 0);
        assert!(matches!(
            repo.get(s.token).await.unwrap_err(),
            AppError::Authentication(_)
        ));
    }

    #[tokio::test]
    async fn test_remove_unknown_token() {
        let repo = SessionsRepository::default();
        assert!(repo.remove(Uuid::new_v4()).await.is_err());
    }
}
