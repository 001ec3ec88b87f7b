use crate::domain::catalog::{default_catalog, Catalog};
use crate::domain::model::{Movie, ShowingId, DEFAULT_TOTAL_SEATS};
use crate::domain::showing::Showing;
use crate::utils::error::{BookingError, Result};
use crate::utils::validation::Validate;
use parking_lot::Mutex;

/// Holds the movie catalog and the showing schedule for the lifetime of the
/// process. Nothing is added or removed after construction.
///
/// Every showing sits behind its own lock; [`BookingRegistry::book_seats`]
/// holds it across validation and commit so overlapping requests cannot
/// both succeed.
#[derive(Debug)]
pub struct BookingRegistry {
    movies: Vec<Movie>,
    showings: Vec<ShowingSlot>,
}

#[derive(Debug)]
struct ShowingSlot {
    id: ShowingId,
    showing: Mutex<Showing>,
}

impl BookingRegistry {
    pub fn new(movies: Vec<Movie>, showings: Vec<Showing>) -> Self {
        Self {
            movies,
            showings: showings
                .into_iter()
                .map(|showing| ShowingSlot {
                    id: showing.id(),
                    showing: Mutex::new(showing),
                })
                .collect(),
        }
    }

    /// Registry built from the built-in catalog with 20 seats per showing.
    pub fn seeded() -> Self {
        let catalog = default_catalog();
        let movies = catalog.movies.clone();
        let showings = catalog
            .showings
            .iter()
            .filter_map(|seed| {
                let movie = catalog.movie(seed.movie_id)?.clone();
                Some(Showing::with_seats(
                    seed.id,
                    movie,
                    seed.time.clone(),
                    seed.total_seats.unwrap_or(DEFAULT_TOTAL_SEATS),
                ))
            })
            .collect();
        Self::new(movies, showings)
    }

    pub fn from_catalog(catalog: &Catalog, default_seats: u32) -> Result<Self> {
        catalog.validate()?;

        let mut showings = Vec::with_capacity(catalog.showings.len());
        for seed in &catalog.showings {
            let movie = catalog.movie(seed.movie_id).ok_or_else(|| BookingError::CatalogError {
                message: format!("showing {} references unknown movie {}", seed.id, seed.movie_id),
            })?;
            showings.push(Showing::with_seats(
                seed.id,
                movie.clone(),
                seed.time.clone(),
                seed.total_seats.unwrap_or(default_seats),
            ));
        }

        tracing::debug!(
            "Catalog loaded: {} movies, {} showings",
            catalog.movies.len(),
            showings.len()
        );
        Ok(Self::new(catalog.movies.clone(), showings))
    }

    pub fn list_movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Snapshot of every showing in schedule order.
    pub fn list_showings(&self) -> Vec<Showing> {
        self.showings
            .iter()
            .map(|slot| slot.showing.lock().clone())
            .collect()
    }

    pub fn find_showing(&self, id: ShowingId) -> Option<Showing> {
        self.slot(id).map(|slot| slot.showing.lock().clone())
    }

    fn slot(&self, id: ShowingId) -> Option<&ShowingSlot> {
        // Ids are only unique, not dense, so a scan is the lookup.
        self.showings.iter().find(|slot| slot.id == id)
    }

    /// All-or-nothing booking. Returns `false` without touching any seat when
    /// the showing is unknown or any requested seat is taken or out of range.
    ///
    /// Duplicate seat numbers are accepted: each copy passes validation and
    /// the repeated commit is a no-op.
    pub fn book_seats(&self, showing_id: ShowingId, seats: &[i64]) -> bool {
        let Some(slot) = self.slot(showing_id) else {
            tracing::debug!("Booking rejected: showing {} not found", showing_id);
            return false;
        };

        let mut showing = slot.showing.lock();

        if let Some(seat) = seats.iter().find(|seat| !showing.is_seat_available(**seat)) {
            tracing::debug!(
                "Booking rejected: seat {} unavailable for showing {}",
                seat,
                showing_id
            );
            return false;
        }

        for seat in seats {
            showing.book_seat(*seat);
        }

        tracing::info!("Booked seats {:?} for showing {}", seats, showing_id);
        true
    }
}

impl Default for BookingRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}
