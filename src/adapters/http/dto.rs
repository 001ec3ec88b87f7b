//! Wire shapes for the JSON endpoints.

use super::error::ApiError;
use crate::domain::{Movie, Showing};
use serde::Serialize;
use serde_json::Value;

pub const BOOKING_SUCCESS_MESSAGE: &str = "Booking successful";
pub const BOOKING_FAILURE_MESSAGE: &str = "Booking failed: seats unavailable or invalid show";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieView {
    pub id: u32,
    pub name: String,
    pub genre: String,
    pub duration: u32,
}

impl From<&Movie> for MovieView {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            name: movie.name.clone(),
            genre: movie.genre.clone(),
            duration: movie.duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowingView {
    pub id: u32,
    pub movie_id: u32,
    pub movie_name: String,
    pub time: String,
    pub available_seats: Vec<u32>,
}

impl From<&Showing> for ShowingView {
    fn from(showing: &Showing) -> Self {
        Self {
            id: showing.id(),
            movie_id: showing.movie().id,
            movie_name: showing.movie().name.clone(),
            time: showing.time().to_string(),
            available_seats: showing.available_seats(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MoviesResponse {
    pub movies: Vec<MovieView>,
}

#[derive(Debug, Serialize)]
pub struct ShowingsResponse {
    pub shows: Vec<ShowingView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingResponse {
    pub success: bool,
    pub message: String,
}

impl BookingResponse {
    pub fn from_outcome(success: bool) -> Self {
        let message = if success {
            BOOKING_SUCCESS_MESSAGE
        } else {
            BOOKING_FAILURE_MESSAGE
        };
        Self {
            success,
            message: message.to_string(),
        }
    }
}

/// A booking request that passed the boundary checks. Values are kept signed
/// so out-of-range numbers still reach the registry and fail there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub showing_id: i64,
    pub seats: Vec<i64>,
}

impl BookingRequest {
    /// Parses `{"showId": int, "seats": [int, ...]}`. `showingId` is accepted
    /// in place of `showId`.
    pub fn parse(body: &[u8]) -> Result<Self, ApiError> {
        let payload: Value =
            serde_json::from_slice(body).map_err(|_| ApiError::bad_request("Invalid JSON"))?;
        let object = payload
            .as_object()
            .ok_or_else(|| ApiError::bad_request("Invalid JSON"))?;

        let showing_id = object.get("showId").or_else(|| object.get("showingId"));
        let (Some(showing_id), Some(seats)) = (showing_id, object.get("seats")) else {
            return Err(ApiError::bad_request("Missing parameters"));
        };

        let showing_id = showing_id
            .as_i64()
            .ok_or_else(|| ApiError::bad_request("Show id must be numeric"))?;

        let seats = seats
            .as_array()
            .ok_or_else(|| ApiError::bad_request("Seats must be an array"))?
            .iter()
            .map(|seat| {
                seat.as_i64()
                    .ok_or_else(|| ApiError::bad_request("Seat numbers must be numeric"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { showing_id, seats })
    }
}
