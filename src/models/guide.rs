//! Troubleshooting guide model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A self-service troubleshooting guide
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TroubleshootGuide {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub difficulty: String,
    pub steps: Vec<String>,
}

impl TroubleshootGuide {
    /// Case-insensitive substring match over title, category and steps
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&term)
            || self.category.to_lowercase().contains(&term)
            || self.steps.iter().any(|s| s.to_lowercase().contains(&term))
    }
}
