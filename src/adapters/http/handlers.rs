use super::dto::{
    BookingRequest, BookingResponse, MovieView, MoviesResponse, ShowingView, ShowingsResponse,
};
use super::error::ApiError;
use super::state::AppState;
use crate::domain::ShowingId;
use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};

/// `GET /api/movies`
pub async fn list_movies(State(state): State<AppState>) -> Json<MoviesResponse> {
    let movies = state
        .registry
        .list_movies()
        .iter()
        .map(MovieView::from)
        .collect();

    Json(MoviesResponse { movies })
}

/// `GET /api/shows`
pub async fn list_showings(State(state): State<AppState>) -> Json<ShowingsResponse> {
    let shows = state
        .registry
        .list_showings()
        .iter()
        .map(ShowingView::from)
        .collect();

    Json(ShowingsResponse { shows })
}

/// `GET /api/shows/:id`
pub async fn get_showing(
    Path(id): Path<ShowingId>,
    State(state): State<AppState>,
) -> Result<Json<ShowingView>, ApiError> {
    state
        .registry
        .find_showing(id)
        .map(|showing| Json(ShowingView::from(&showing)))
        .ok_or_else(|| ApiError::not_found("Show not found"))
}

/// `POST /api/book`
///
/// The body is parsed by hand so malformed payloads get the same messages
/// regardless of content type.
pub async fn book_seats(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BookingResponse>, ApiError> {
    let request = BookingRequest::parse(&body)?;

    // Ids that cannot name a showing fail like any unknown showing.
    let success = match ShowingId::try_from(request.showing_id) {
        Ok(showing_id) => state.registry.book_seats(showing_id, &request.seats),
        Err(_) => false,
    };

    if !success {
        tracing::info!(
            "Booking failed for show {} seats {:?}",
            request.showing_id,
            request.seats
        );
    }

    Ok(Json(BookingResponse::from_outcome(success)))
}
