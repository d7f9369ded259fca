//! Custom extractors.

mod repo;

pub use repo::Repo;
