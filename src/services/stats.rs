//! Dashboard statistics service

use serde::Serialize;
use utoipa::ToSchema;

use crate::repository::Repository;

/// Live counters behind the admin dashboard tiles
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct StatsOverview {
    pub pending_requests: usize,
    pub active_items: usize,
    pub open_incidents: usize,
    pub active_sessions: usize,
}

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn overview(&self) -> StatsOverview {
        StatsOverview {
            pending_requests: self.repository.requests.count_pending().await,
            active_items: self.repository.inventory.counts().await.active,
            open_incidents: self.repository.incidents.count().await,
            active_sessions: self.repository.sessions.count().await,
        }
    }
}
