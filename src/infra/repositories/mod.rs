//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod account_repository;
mod base;
mod context;
pub(crate) mod entities;
mod owner_repository;

pub use account_repository::{AccountRepository, AccountStore};
pub use base::{ReadRepository, WriteRepository};
pub use context::{PendingChange, RepositoryContext};
pub use owner_repository::{OwnerRepository, OwnerStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use account_repository::MockAccountRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use owner_repository::MockOwnerRepository;
