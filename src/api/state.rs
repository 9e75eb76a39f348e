//! Application state for the payroll registry API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::registry::PayrollRegistry;

/// Shared application state.
///
/// Holds the single registry for the session. Handlers that add or remove
/// employees take the write lock; listings take the read lock so they
/// always observe a consistent snapshot.
#[derive(Clone, Default)]
pub struct AppState {
    /// The session's payroll registry.
    registry: Arc<RwLock<PayrollRegistry>>,
}

impl AppState {
    /// Creates a new application state around the given registry.
    pub fn new(registry: PayrollRegistry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
        }
    }

    /// Returns the lock guarding the registry.
    pub fn registry(&self) -> &RwLock<PayrollRegistry> {
        &self.registry
    }
}
