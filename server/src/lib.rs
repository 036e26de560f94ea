//! Packing-list Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - handlers: REST handlers and router

use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod handlers;
pub mod repository;

pub use config::ServerConfig;
pub use handlers::build_router;

use domain::DomainResult;
use repository::{init_db, PackListRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub lists: Arc<PackListRepository>,
}

impl AppState {
    pub fn new(lists: PackListRepository) -> Self {
        Self { lists: Arc::new(lists) }
    }

    /// Open the database at `db_path` (or `:memory:`)
    pub fn open(db_path: &str) -> DomainResult<Self> {
        Ok(Self::new(PackListRepository::new(init_db(db_path)?)))
    }
}
