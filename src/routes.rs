//! Route table and application assembly.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::handlers::{amenities, cities, places, reviews, states, status, users};
use crate::state::AppState;

/// API routes, unprefixed. [`app`] nests these under `/api/v1`.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status::status))
        .route("/stats", get(status::stats))
        .route("/states", get(states::list).post(states::create))
        .route(
            "/states/:state_id",
            get(states::read).put(states::update).delete(states::delete),
        )
        .route(
            "/states/:state_id/cities",
            get(cities::list_by_state).post(cities::create_in_state),
        )
        .route(
            "/cities/:city_id",
            get(cities::read).put(cities::update).delete(cities::delete),
        )
        .route(
            "/cities/:city_id/places",
            get(places::list_by_city).post(places::create_in_city),
        )
        .route(
            "/places/:place_id",
            get(places::read).put(places::update).delete(places::delete),
        )
        .route(
            "/places/:place_id/reviews",
            get(reviews::list_by_place).post(reviews::create_in_place),
        )
        .route(
            "/reviews/:review_id",
            get(reviews::read).put(reviews::update).delete(reviews::delete),
        )
        .route("/users", get(users::list).post(users::create))
        .route(
            "/users/:user_id",
            get(users::read).put(users::update).delete(users::delete),
        )
        .route("/amenities", get(amenities::list).post(amenities::create))
        .route(
            "/amenities/:amenity_id",
            get(amenities::read)
                .put(amenities::update)
                .delete(amenities::delete),
        )
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Full application: API under `/api/v1`, JSON 404 fallback for unknown
/// paths, request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes(state))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}
