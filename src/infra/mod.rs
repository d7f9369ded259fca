//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories over the SeaORM entities
//! - The per-request repository wrapper and its unit of work

pub mod db;
pub mod repositories;
pub mod repository_wrapper;

pub use db::{Database, Migrator};
pub use repositories::{
    AccountRepository, AccountStore, OwnerRepository, OwnerStore, RepositoryContext,
};
pub use repository_wrapper::{Repositories, RepositoryScope, RepositoryWrapper};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockAccountRepository, MockOwnerRepository};
