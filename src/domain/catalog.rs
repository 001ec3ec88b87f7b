use crate::domain::model::{Movie, MovieId, ShowingId};
use crate::utils::error::{BookingError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Showing entry as written in a catalog; the movie is referenced by id and
/// copied into the showing when the registry is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowingSeed {
    pub id: ShowingId,
    pub movie_id: MovieId,
    pub time: String,
    pub total_seats: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub showings: Vec<ShowingSeed>,
}

impl Catalog {
    pub fn movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }
}

/// The catalog the service starts with when none is configured.
pub fn default_catalog() -> Catalog {
    let showing = |id, movie_id, time: &str| ShowingSeed {
        id,
        movie_id,
        time: time.to_string(),
        total_seats: None,
    };

    Catalog {
        movies: vec![
            Movie::new(1, "The Matrix", "Sci-Fi", 136),
            Movie::new(2, "Inception", "Thriller", 148),
            Movie::new(3, "The Lion King", "Animation", 88),
        ],
        showings: vec![
            showing(1, 1, "12:00 PM"),
            showing(2, 1, "6:00 PM"),
            showing(3, 2, "3:00 PM"),
            showing(4, 3, "5:00 PM"),
        ],
    }
}

fn catalog_error(message: String) -> BookingError {
    BookingError::CatalogError { message }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        let mut movie_ids = HashSet::new();
        for movie in &self.movies {
            if !movie_ids.insert(movie.id) {
                return Err(catalog_error(format!("duplicate movie id {}", movie.id)));
            }
            if movie.name.trim().is_empty() {
                return Err(catalog_error(format!("movie {} has an empty name", movie.id)));
            }
            if movie.duration == 0 {
                return Err(catalog_error(format!("movie {} has zero duration", movie.id)));
            }
        }

        let mut showing_ids = HashSet::new();
        for showing in &self.showings {
            if !showing_ids.insert(showing.id) {
                return Err(catalog_error(format!("duplicate showing id {}", showing.id)));
            }
            if !movie_ids.contains(&showing.movie_id) {
                return Err(catalog_error(format!(
                    "showing {} references unknown movie {}",
                    showing.id, showing.movie_id
                )));
            }
            if showing.total_seats == Some(0) {
                return Err(catalog_error(format!("showing {} has no seats", showing.id)));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = default_catalog();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.movies.len(), 3);
        assert_eq!(catalog.showings.len(), 4);
        assert_eq!(catalog.movie(2).map(|m| m.name.as_str()), Some("Inception"));
    }

    #[test]
    fn test_duplicate_movie_id_rejected() {
        let mut catalog = default_catalog();
        catalog.movies.push(Movie::new(1, "Duplicate", "Drama", 90));
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate movie id 1"));
    }

    #[test]
    fn test_unknown_movie_reference_rejected() {
        let mut catalog = default_catalog();
        catalog.showings[0].movie_id = 42;
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("unknown movie 42"));
    }

    #[test]
    fn test_zero_seat_showing_rejected() {
        let mut catalog = default_catalog();
        catalog.showings[3].total_seats = Some(0);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_duplicate_showing_id_rejected() {
        let mut catalog = default_catalog();
        catalog.showings[1].id = 1;
        assert!(catalog.validate().is_err());
    }
}
