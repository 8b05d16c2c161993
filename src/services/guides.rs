//! Troubleshooting guide service

use crate::{models::TroubleshootGuide, repository::Repository};

#[derive(Clone)]
pub struct GuidesService {
    repository: Repository,
}

impl GuidesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> Vec<TroubleshootGuide> {
        self.repository.guides.list()
    }

    pub fn search(&self, term: &str) -> Vec<TroubleshootGuide> {
        self.repository.guides.search(term)
    }
}
