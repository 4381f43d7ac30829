//! Application state for the API server.

use crate::db::Database;
use crate::service::ResourceService;

/// Shared application state.
///
/// Generic over `D: Database`; the service (and through it the database)
/// is constructed once at start-up and injected here, never created
/// by the handlers.
pub struct AppState<D: Database> {
    service: ResourceService<D>,
}

// Manual Clone impl - ResourceService only clones its Arc, D need not be Clone
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<D: Database> AppState<D> {
    pub fn new(service: ResourceService<D>) -> Self {
        Self { service }
    }

    /// Get a reference to the resource service.
    pub fn service(&self) -> &ResourceService<D> {
        &self.service
    }
}
