use crate::domain::model::{Movie, ShowingId, DEFAULT_TOTAL_SEATS};

/// One scheduled screening of a movie with its own seat map.
///
/// Seats are numbered `1..=total_seats`. The occupancy vector always has
/// exactly `total_seats` entries and a seat, once booked, stays booked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showing {
    id: ShowingId,
    movie: Movie,
    time: String,
    total_seats: u32,
    booked: Vec<bool>,
}

impl Showing {
    pub fn new(id: ShowingId, movie: Movie, time: impl Into<String>) -> Self {
        Self::with_seats(id, movie, time, DEFAULT_TOTAL_SEATS)
    }

    pub fn with_seats(id: ShowingId, movie: Movie, time: impl Into<String>, total_seats: u32) -> Self {
        Self {
            id,
            movie,
            time: time.into(),
            total_seats,
            booked: vec![false; total_seats as usize],
        }
    }

    pub fn id(&self) -> ShowingId {
        self.id
    }

    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn total_seats(&self) -> u32 {
        self.total_seats
    }

    fn index_of(&self, seat_number: i64) -> Option<usize> {
        if seat_number < 1 || seat_number > i64::from(self.total_seats) {
            return None;
        }
        usize::try_from(seat_number - 1).ok()
    }

    /// Out-of-range seat numbers are reported as unavailable, not as errors.
    pub fn is_seat_available(&self, seat_number: i64) -> bool {
        match self.index_of(seat_number) {
            Some(index) => !self.booked[index],
            None => false,
        }
    }

    pub fn book_seat(&mut self, seat_number: i64) -> bool {
        if !self.is_seat_available(seat_number) {
            return false;
        }
        match self.index_of(seat_number) {
            Some(index) => {
                self.booked[index] = true;
                true
            }
            None => false,
        }
    }

    /// Unoccupied seat numbers in ascending order, recomputed on every call.
    pub fn available_seats(&self) -> Vec<u32> {
        self.booked
            .iter()
            .zip(1..=self.total_seats)
            .filter(|(booked, _)| !**booked)
            .map(|(_, seat)| seat)
            .collect()
    }

    pub fn booked_count(&self) -> usize {
        self.booked.iter().filter(|booked| **booked).count()
    }
}
