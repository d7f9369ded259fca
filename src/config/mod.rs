//! Server configuration: database URL, bind address and route constants.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
