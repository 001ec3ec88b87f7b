//! HTTP boundary for the booking service.
//!
//! Translates the JSON endpoints into calls on [`BookingRegistry`] and
//! serializes the results. Payload shape checks live here; seat ranges and
//! availability are decided by the registry.
//!
//! [`BookingRegistry`]: crate::domain::BookingRegistry

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::build_router;
pub use server::BookingServer;
pub use state::AppState;
