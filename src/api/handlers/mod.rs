//! HTTP request handlers.

pub mod owner_handler;

pub use owner_handler::owner_routes;
