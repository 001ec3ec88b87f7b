use crate::domain::BookingRegistry;
use std::sync::Arc;

/// Shared context handed to every handler. Built once by the binary (or a
/// test) and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<BookingRegistry>,
}

impl AppState {
    pub fn new(registry: BookingRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn from_shared(registry: Arc<BookingRegistry>) -> Self {
        Self { registry }
    }
}
