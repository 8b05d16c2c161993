//! Business logic services

pub mod guides;
pub mod incidents;
pub mod inventory;
pub mod messages;
pub mod requests;
pub mod sessions;
pub mod stats;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub requests: requests::RequestsService,
    pub incidents: incidents::IncidentsService,
    pub inventory: inventory::InventoryService,
    pub messages: messages::MessagesService,
    pub guides: guides::GuidesService,
    pub sessions: sessions::SessionsService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            requests: requests::RequestsService::new(repository.clone()),
            incidents: incidents::IncidentsService::new(repository.clone()),
            inventory: inventory::InventoryService::new(repository.clone()),
            messages: messages::MessagesService::new(repository.clone()),
            guides: guides::GuidesService::new(repository.clone()),
            sessions: sessions::SessionsService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
        }
    }
}
