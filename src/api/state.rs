//! Application state - Dependency injection container.
//!
//! Hands every request its own repository scope.

use std::sync::Arc;

use crate::infra::{Database, RepositoryScope, RepositoryWrapper};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection (health checks)
    pub database: Arc<Database>,
    /// Factory for per-request repository wrappers
    scope: Arc<dyn RepositoryScope>,
}

impl AppState {
    /// Create application state whose repository scopes use `database`.
    pub fn new(database: Arc<Database>) -> Self {
        Self {
            scope: database.clone(),
            database,
        }
    }

    /// Create application state with a manually injected scope factory.
    pub fn with_scope(database: Arc<Database>, scope: Arc<dyn RepositoryScope>) -> Self {
        Self { database, scope }
    }

    /// Open a fresh repository scope for one request.
    pub fn repositories(&self) -> Arc<dyn RepositoryWrapper> {
        self.scope.begin_scope()
    }
}
