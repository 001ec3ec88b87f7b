use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use movie_booking::{build_router, AppState, BookingRegistry};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app_with(registry: Arc<BookingRegistry>) -> Router {
    build_router(AppState::from_shared(registry))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_book(body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/book")
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

#[tokio::test]
async fn test_list_movies() {
    let registry = Arc::new(BookingRegistry::seeded());
    let (status, body) = send(app_with(registry), get("/api/movies")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "movies": [
                {"id": 1, "name": "The Matrix", "genre": "Sci-Fi", "duration": 136},
                {"id": 2, "name": "Inception", "genre": "Thriller", "duration": 148},
                {"id": 3, "name": "The Lion King", "genre": "Animation", "duration": 88}
            ]
        })
    );
}

#[tokio::test]
async fn test_list_showings() {
    let registry = Arc::new(BookingRegistry::seeded());
    let (status, body) = send(app_with(registry), get("/api/shows")).await;

    assert_eq!(status, StatusCode::OK);
    let shows = body["shows"].as_array().unwrap();
    assert_eq!(shows.len(), 4);

    let first = &shows[0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["movieId"], 1);
    assert_eq!(first["movieName"], "The Matrix");
    assert_eq!(first["time"], "12:00 PM");
    assert_eq!(first["availableSeats"], json!((1..=20).collect::<Vec<u32>>()));

    assert_eq!(shows[3]["movieName"], "The Lion King");
    assert_eq!(shows[3]["time"], "5:00 PM");
}

#[tokio::test]
async fn test_showings_alias_matches_shows() {
    let registry = Arc::new(BookingRegistry::seeded());
    let (_, shows) = send(app_with(registry.clone()), get("/api/shows")).await;
    let (status, showings) = send(app_with(registry), get("/api/showings")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(shows, showings);
}

#[tokio::test]
async fn test_get_single_showing() {
    let registry = Arc::new(BookingRegistry::seeded());
    let (status, body) = send(app_with(registry.clone()), get("/api/shows/3")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["movieName"], "Inception");

    let (status, body) = send(app_with(registry), get("/api/shows/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Show not found");
}

#[tokio::test]
async fn test_booking_updates_availability() {
    let registry = Arc::new(BookingRegistry::seeded());

    let (status, body) = send(
        app_with(registry.clone()),
        post_book(r#"{"showId": 1, "seats": [1, 2, 3]}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "message": "Booking successful"}));

    let (_, body) = send(app_with(registry), get("/api/shows/1")).await;
    assert_eq!(body["availableSeats"], json!((4..=20).collect::<Vec<u32>>()));
}

#[tokio::test]
async fn test_booking_taken_seat_fails_without_partial_commit() {
    let registry = Arc::new(BookingRegistry::seeded());
    assert!(registry.book_seats(2, &[5]));

    let (status, body) = send(
        app_with(registry.clone()),
        post_book(r#"{"showId": 2, "seats": [4, 5, 6]}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": false, "message": "Booking failed: seats unavailable or invalid show"})
    );

    let showing = registry.find_showing(2).unwrap();
    assert!(showing.is_seat_available(4));
    assert!(showing.is_seat_available(6));
}

#[tokio::test]
async fn test_booking_unknown_or_negative_show_fails() {
    let registry = Arc::new(BookingRegistry::seeded());
    let before = registry.list_showings();

    for payload in [
        r#"{"showId": 999, "seats": [1]}"#,
        r#"{"showId": -4, "seats": [1]}"#,
        r#"{"showingId": 99999999999, "seats": [1]}"#,
    ] {
        let (status, body) = send(app_with(registry.clone()), post_book(payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
    }

    assert_eq!(registry.list_showings(), before);
}

#[tokio::test]
async fn test_booking_empty_seat_list_succeeds() {
    let registry = Arc::new(BookingRegistry::seeded());
    let (_, body) = send(
        app_with(registry.clone()),
        post_book(r#"{"showingId": 1, "seats": []}"#),
    )
    .await;

    assert_eq!(body["success"], true);
    assert_eq!(registry.find_showing(1).unwrap().booked_count(), 0);
}

#[tokio::test]
async fn test_malformed_payloads_rejected() {
    let registry = Arc::new(BookingRegistry::seeded());
    let cases = [
        ("{not json", "Invalid JSON"),
        (r#"{"seats": [1]}"#, "Missing parameters"),
        (r#"{"showId": 1}"#, "Missing parameters"),
        (r#"{"showId": 1, "seats": ["a"]}"#, "Seat numbers must be numeric"),
        (r#"{"showId": 1, "seats": {"1": true}}"#, "Seats must be an array"),
        (r#"{"showId": "1", "seats": [1]}"#, "Show id must be numeric"),
    ];

    for (payload, message) in cases {
        let (status, body) = send(app_with(registry.clone()), post_book(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
        assert_eq!(body["error"], message, "payload: {}", payload);
    }

    assert_eq!(registry.find_showing(1).unwrap().booked_count(), 0);
}

#[tokio::test]
async fn test_booking_without_content_type() {
    let registry = Arc::new(BookingRegistry::seeded());
    let request = Request::builder()
        .method("POST")
        .uri("/api/book")
        .body(Body::from(r#"{"showId": 4, "seats": [20]}"#))
        .unwrap();

    let (status, body) = send(app_with(registry.clone()), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(!registry.find_showing(4).unwrap().is_seat_available(20));
}

#[tokio::test]
async fn test_concurrent_requests_never_double_book() {
    let registry = Arc::new(BookingRegistry::seeded());

    let mut handles = Vec::new();
    for _ in 0..16 {
        let app = app_with(registry.clone());
        handles.push(tokio::spawn(async move {
            send(app, post_book(r#"{"showId": 3, "seats": [7, 8]}"#)).await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        if body["success"] == true {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(registry.find_showing(3).unwrap().booked_count(), 2);
}
