//! Support request store

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{enums::RequestStatus, SupportRequest},
};

#[derive(Default)]
struct RequestsState {
    next_id: i32,
    requests: Vec<SupportRequest>,
}

/// In-memory support request collection, append-ordered
#[derive(Clone, Default)]
pub struct RequestsRepository {
    inner: Arc<RwLock<RequestsState>>,
}

impl RequestsRepository {
    /// Append a new request, assigning its local id
    pub async fn insert(&self, mut request: SupportRequest) -> SupportRequest {
        let mut state = self.inner.write().await;
        state.next_id += 1;
        request.id = state.next_id;
        state.requests.push(request.clone());
        request
    }

    /// All requests in creation order
    pub async fn list(&self) -> Vec<SupportRequest> {
        self.inner.read().await.requests.clone()
    }

    /// Look up a single request
    pub async fn get(&self, id: i32) -> AppResult<SupportRequest> {
        self.inner
            .read()
            .await
            .requests
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// Transition a pending request to approved
    pub async fn approve(&self, id: i32) -> AppResult<SupportRequest> {
        self.transition(id, RequestStatus::Approved).await
    }

    /// Transition a pending request to rejected
    pub async fn reject(&self, id: i32) -> AppResult<SupportRequest> {
        self.transition(id, RequestStatus::Rejected).await
    }

    /// Number of requests still pending review
    pub async fn count_pending(&self) -> usize {
        self.inner
            .read()
            .await
            .requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .count()
    }

    // Only `pending` may move, and only to `approved` or `rejected`. Every
    // other (state, action) pair is rejected without touching the entity.
    async fn transition(&self, id: i32, target: RequestStatus) -> AppResult<SupportRequest> {
        let mut state = self.inner.write().await;
        let request = state
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))?;

        if request.status != RequestStatus::Pending {
            return Err(AppError::InvalidTransition(format!(
                "request {} is {}, only pending requests can be {}",
                request.ticket_number, request.status, target
            )));
        }

        request.status = target;
        Ok(request.clone())
    }
}
