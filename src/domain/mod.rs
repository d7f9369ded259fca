//! Domain layer - Core business entities and their transport shapes
//!
//! This module contains the records the repositories hand out and the
//! DTOs the HTTP layer serializes. It does not know about SeaORM.

pub mod account;
pub mod mapping;
pub mod owner;

pub use account::{Account, AccountDto};
pub use owner::{Owner, OwnerDto};
