use serde::{Deserialize, Serialize};

pub type MovieId = u32;
pub type ShowingId = u32;

/// Seats per showing when the catalog does not say otherwise.
pub const DEFAULT_TOTAL_SEATS: u32 = 20;

/// Catalog entry. Created once when the registry is seeded and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub name: String,
    pub genre: String,
    /// Running time in minutes.
    pub duration: u32,
}

impl Movie {
    pub fn new(id: MovieId, name: impl Into<String>, genre: impl Into<String>, duration: u32) -> Self {
        Self {
            id,
            name: name.into(),
            genre: genre.into(),
            duration,
        }
    }
}
