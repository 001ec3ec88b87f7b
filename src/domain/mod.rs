// Domain layer: catalog entities and the booking state. No HTTP or config concerns here.

pub mod catalog;
pub mod model;
pub mod registry;
pub mod showing;

pub use catalog::{default_catalog, Catalog, ShowingSeed};
pub use model::{Movie, MovieId, ShowingId, DEFAULT_TOTAL_SEATS};
pub use registry::BookingRegistry;
pub use showing::Showing;
