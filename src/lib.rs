//! Account Owner Server - owners and their accounts over a REST read API
//!
//! Request flow: handler -> repository wrapper -> entity repository ->
//! generic base repository -> SeaORM connection. Results come back as
//! domain entities and are mapped to DTOs before serialization.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Owner/Account entities, DTOs and their mapping
//! - **infra**: Database, migrations, repositories and the repository wrapper
//! - **api**: HTTP handlers, extractors and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Account, AccountDto, Owner, OwnerDto};
pub use errors::{AppError, AppResult};
pub use infra::{Database, Repositories, RepositoryWrapper};
