// Adapters layer: concrete boundaries around the booking domain.

pub mod http;
