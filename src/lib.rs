//! Helpdesk Server - School IT Support Portal
//!
//! A Rust implementation of the school IT support portal backend,
//! providing a REST JSON API for support requests, incident reports,
//! equipment inventory, messaging and troubleshooting guides.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod ids;
pub mod models;
pub mod repository;
pub mod seed;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
