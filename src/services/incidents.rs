//! Incident report service

use chrono::Utc;

use crate::{
    error::AppResult,
    models::{IncidentDraft, IncidentReport, Notification},
    repository::Repository,
};

#[derive(Clone)]
pub struct IncidentsService {
    repository: Repository,
}

impl IncidentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Finalize and file an incident draft.
    ///
    /// Item lists in the submitted draft are re-run through the builder so
    /// they get the same trim/blank handling as interactive entry.
    pub async fn create(&self, draft: &IncidentDraft) -> AppResult<(IncidentReport, Notification)> {
        let mut normalized = IncidentDraft {
            broken_items: Vec::new(),
            replacement_needed: Vec::new(),
            ..draft.clone()
        };
        for item in &draft.broken_items {
            normalized.add_broken_item(item);
        }
        for item in &draft.replacement_needed {
            normalized.add_replacement_item(item);
        }

        let report = self.repository.incidents.create(&normalized, Utc::now()).await?;
        tracing::info!(incident = %report.incident_id, "incident report filed");

        let notification = Notification::success(
            "Incident Report Created",
            format!("Report {} has been saved successfully.", report.incident_id),
        );
        Ok((report, notification))
    }

    /// All filed reports in creation order
    pub async fn list(&self) -> Vec<IncidentReport> {
        self.repository.incidents.list().await
    }
}
