pub mod adapters;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::{build_router, AppState, BookingServer};
pub use config::toml_config::TomlConfig;
pub use domain::{BookingRegistry, Movie, Showing};
pub use utils::error::{BookingError, Result};
