//! Repository layer: in-memory entity stores
//!
//! All portal state is transient and lives for the duration of the process.
//! Each store serializes access behind its own `tokio::sync::RwLock`, so every
//! operation runs to completion before another can observe state.

pub mod guides;
pub mod incidents;
pub mod inventory;
pub mod messages;
pub mod requests;
pub mod sessions;

/// Main repository struct holding all entity stores
#[derive(Clone, Default)]
pub struct Repository {
    pub requests: requests::RequestsRepository,
    pub incidents: incidents::IncidentsRepository,
    pub inventory: inventory::InventoryRepository,
    pub messages: messages::MessagesRepository,
    pub guides: guides::GuidesRepository,
    pub sessions: sessions::SessionsRepository,
}

impl Repository {
    /// Create a fresh, empty repository (guides are always present)
    pub fn new() -> Self {
        Self::default()
    }
}
