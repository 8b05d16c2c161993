//! Incident report model and draft builder
//!
//! An incident report is assembled incrementally (items added and removed as
//! the technician works through a visit) and only becomes an immutable
//! `IncidentReport` on submit. Resetting the draft afterwards is the caller's
//! job.

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::ids;

use super::enums::ReplacementSource;

/// Mutable incident report under construction
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct IncidentDraft {
    /// Assigned by `generate_id`, or on submit when still empty
    pub incident_id: Option<String>,
    pub technician_name: String,
    pub office: String,
    pub date_visited: Option<NaiveDate>,
    pub contact_person: Option<String>,
    pub issue_description: String,
    pub diagnosis: Option<String>,
    pub action_taken: Option<String>,
    #[serde(default)]
    pub broken_items: Vec<String>,
    #[serde(default)]
    pub replacement_needed: Vec<String>,
    #[serde(default)]
    pub replacement_source: ReplacementSource,
    #[serde(default)]
    pub follow_up_required: bool,
    pub follow_up_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Finalized incident report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IncidentReport {
    pub id: i32,
    /// Human-readable incident id (`INC-YYYY-MM-NNN`), not guaranteed unique
    pub incident_id: String,
    pub technician_name: String,
    pub office: String,
    pub date_visited: NaiveDate,
    pub contact_person: Option<String>,
    pub issue_description: String,
    pub diagnosis: Option<String>,
    pub action_taken: Option<String>,
    pub broken_items: Vec<String>,
    pub replacement_needed: Vec<String>,
    pub replacement_source: ReplacementSource,
    pub follow_up_required: bool,
    /// Only meaningful when `follow_up_required` is set
    pub follow_up_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub date_created: DateTime<Utc>,
}

impl IncidentDraft {
    /// Append a trimmed item description to the broken items list.
    ///
    /// Blank input is a no-op; returns whether anything was appended.
    pub fn add_broken_item(&mut self, text: &str) -> bool {
        Self::push_item(&mut self.broken_items, text)
    }

    /// Append a trimmed item description to the replacement list.
    pub fn add_replacement_item(&mut self, text: &str) -> bool {
        Self::push_item(&mut self.replacement_needed, text)
    }

    /// Remove the broken item at `index`, preserving the order of the rest
    pub fn remove_broken_item(&mut self, index: usize) -> AppResult<String> {
        Self::remove_item(&mut self.broken_items, index, "broken item")
    }

    /// Remove the replacement item at `index`, preserving the order of the rest
    pub fn remove_replacement_item(&mut self, index: usize) -> AppResult<String> {
        Self::remove_item(&mut self.replacement_needed, index, "replacement item")
    }

    /// Assign a fresh incident id, overwriting any previous value
    pub fn generate_id<R: Rng>(&mut self, now: DateTime<Utc>, rng: &mut R) -> &str {
        self.incident_id = Some(ids::incident_id(now, rng));
        self.incident_id.as_deref().unwrap_or_default()
    }

    /// Validate the draft and produce a finalized report.
    ///
    /// `entity_id` is the store-local id the report will be filed under. An
    /// incident id is generated when the draft never had one.
    pub fn submit<R: Rng>(
        &self,
        entity_id: i32,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> AppResult<IncidentReport> {
        if self.technician_name.trim().is_empty() {
            return Err(AppError::Validation("technician name is required".to_string()));
        }
        if self.office.trim().is_empty() {
            return Err(AppError::Validation("office is required".to_string()));
        }
        let date_visited = self
            .date_visited
            .ok_or_else(|| AppError::Validation("date visited is required".to_string()))?;
        if self.issue_description.trim().is_empty() {
            return Err(AppError::Validation("issue description is required".to_string()));
        }

        let incident_id = match self.incident_id.as_deref() {
            Some(id) if !id.trim().is_empty() => id.to_string(),
            _ => ids::incident_id(now, rng),
        };

        Ok(IncidentReport {
            id: entity_id,
            incident_id,
            technician_name: self.technician_name.trim().to_string(),
            office: self.office.trim().to_string(),
            date_visited,
            contact_person: self.contact_person.clone(),
            issue_description: self.issue_description.trim().to_string(),
            diagnosis: self.diagnosis.clone(),
            action_taken: self.action_taken.clone(),
            broken_items: self.broken_items.clone(),
            replacement_needed: self.replacement_needed.clone(),
            replacement_source: self.replacement_source,
            follow_up_required: self.follow_up_required,
            follow_up_date: if self.follow_up_required {
                self.follow_up_date
            } else {
                None
            },
            notes: self.notes.clone(),
            date_created: now,
        })
    }

    fn push_item(items: &mut Vec<String>, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        items.push(trimmed.to_string());
        true
    }

    fn remove_item(items: &mut Vec<String>, index: usize, what: &str) -> AppResult<String> {
        if index >= items.len() {
            return Err(AppError::IndexOutOfRange(format!(
                "no {} at position {} (len {})",
                what,
                index,
                items.len()
            )));
        }
        Ok(items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid_draft() -> IncidentDraft {
        IncidentDraft {
            technician_name: "Jane Cruz".to_string(),
            office: "Room 101".to_string(),
            date_visited: NaiveDate::from_ymd_opt(2024, 1, 20),
            issue_description: "Projector shows no signal".to_string(),
            ..Default::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 20, 14, 0, 0).unwrap()
    }

    #[test]
    fn test_add_broken_item_trims() {
        let mut draft = valid_draft();
        assert!(draft.add_broken_item(" Monitor "));
        assert_eq!(draft.broken_items, vec!["Monitor"]);
    }

    #[test]
    fn test_blank_items_are_rejected() {
        let mut draft = valid_draft();
        assert!(!draft.add_broken_item(""));
        assert!(!draft.add_broken_item("   "));
        assert!(draft.broken_items.is_empty());
        assert!(!draft.add_replacement_item(" \t"));
        assert!(draft.replacement_needed.is_empty());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut draft = valid_draft();
        draft.add_broken_item("Monitor");
        draft.add_broken_item("Keyboard");
        draft.add_broken_item("Mouse");

        let removed = draft.remove_broken_item(1).unwrap();
        assert_eq!(removed, "Keyboard");
        assert_eq!(draft.broken_items, vec!["Monitor", "Mouse"]);
    }

    #[test]
    fn test_remove_out_of_range_does_not_mutate() {
        let mut draft = valid_draft();
        draft.add_broken_item("Monitor");

        let err = draft.remove_broken_item(5).unwrap_err();
        assert!(matches!(err, AppError::IndexOutOfRange(_)));
        assert_eq!(draft.broken_items, vec!["Monitor"]);

        let err = draft.remove_replacement_item(0).unwrap_err();
        assert!(matches!(err, AppError::IndexOutOfRange(_)));
    }

    #[test]
    fn test_generate_id_overwrites() {
        let mut draft = valid_draft();
        let mut rng = rand::thread_rng();
        let first = draft.generate_id(now(), &mut rng).to_string();
        assert!(first.starts_with("INC-2024-01-"));
        draft.generate_id(now(), &mut rng);
        assert!(draft.incident_id.as_deref().unwrap().starts_with("INC-2024-01-"));
    }

    #[test]
    fn test_submit_requires_fields() {
        let mut rng = rand::thread_rng();

        let mut draft = valid_draft();
        draft.technician_name = "  ".to_string();
        assert!(matches!(
            draft.submit(1, now(), &mut rng),
            Err(AppError::Validation(_))
        ));

        let mut draft = valid_draft();
        draft.date_visited = None;
        assert!(matches!(
            draft.submit(1, now(), &mut rng),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_submit_generates_id_when_missing() {
        let mut rng = rand::thread_rng();
        let draft = valid_draft();
        let report = draft.submit(7, now(), &mut rng).unwrap();
        assert_eq!(report.id, 7);
        assert!(report.incident_id.starts_with("INC-2024-01-"));
    }

    #[test]
    fn test_submit_keeps_generated_id() {
        let mut rng = rand::thread_rng();
        let mut draft = valid_draft();
        let id = draft.generate_id(now(), &mut rng).to_string();
        let report = draft.submit(1, now(), &mut rng).unwrap();
        assert_eq!(report.incident_id, id);
    }

    #[test]
    fn test_follow_up_date_dropped_without_flag() {
        let mut rng = rand::thread_rng();
        let mut draft = valid_draft();
        draft.follow_up_date = NaiveDate::from_ymd_opt(2024, 2, 1);
        let report = draft.submit(1, now(), &mut rng).unwrap();
        assert_eq!(report.follow_up_date, None);

        draft.follow_up_required = true;
        let report = draft.submit(1, now(), &mut rng).unwrap();
        assert_eq!(report.follow_up_date, NaiveDate::from_ymd_opt(2024, 2, 1));
    }
}
