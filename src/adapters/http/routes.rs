use super::handlers::{book_seats, get_showing, list_movies, list_showings};
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/movies", get(list_movies))
        .route("/shows", get(list_showings))
        .route("/showings", get(list_showings))
        .route("/shows/:id", get(get_showing))
        .route("/book", post(book_seats));

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
