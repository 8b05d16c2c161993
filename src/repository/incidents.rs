//! Incident report store

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    models::{IncidentDraft, IncidentReport},
};

#[derive(Default)]
struct IncidentsState {
    next_id: i32,
    reports: Vec<IncidentReport>,
}

/// In-memory collection of finalized incident reports
#[derive(Clone, Default)]
pub struct IncidentsRepository {
    inner: Arc<RwLock<IncidentsState>>,
}

impl IncidentsRepository {
    /// Finalize a draft and file the resulting report.
    ///
    /// Validation failures leave the store untouched.
    pub async fn create(&self, draft: &IncidentDraft, now: DateTime<Utc>) -> AppResult<IncidentReport> {
        let mut state = self.inner.write().await;
        let mut rng = rand::thread_rng();
        let report = draft.submit(state.next_id + 1, now, &mut rng)?;
        state.next_id += 1;
        state.reports.push(report.clone());
        Ok(report)
    }

    /// All reports in creation order
    pub async fn list(&self) -> Vec<IncidentReport> {
        self.inner.read().await.reports.clone()
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.reports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draft() -> IncidentDraft {
        IncidentDraft {
            technician_name: "Jane Cruz".to_string(),
            office: "Room 101".to_string(),
            date_visited: NaiveDate::from_ymd_opt(2024, 1, 20),
            issue_description: "Projector shows no signal".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_files_report() {
        let repo = IncidentsRepository::default();
        let report = repo.create(&draft(), Utc::now()).await.unwrap();
        assert_eq!(report.id, 1);
        assert_eq!(repo.count().await, 1);
        assert_eq!(repo.list().await[0].incident_id, report.incident_id);
    }

    #[tokio::test]
    async fn test_invalid_draft_leaves_store_untouched() {
        let repo = IncidentsRepository::default();
        let mut bad = draft();
        bad.issue_description = String::new();
        assert!(repo.create(&bad, Utc::now()).await.is_err());
        assert_eq!(repo.count().await, 0);
    }
}
