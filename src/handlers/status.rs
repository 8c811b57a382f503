//! Service status and per-kind object counts.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::model::EntityKind;
use crate::state::AppState;

pub async fn status() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}

/// GET /stats: one `count` call per record kind.
pub async fn stats(State(app): State<AppState>) -> Result<Json<Value>, ApiError> {
    let body = json!({
        "amenities": app.store.count(EntityKind::Amenity).await?,
        "cities": app.store.count(EntityKind::City).await?,
        "places": app.store.count(EntityKind::Place).await?,
        "reviews": app.store.count(EntityKind::Review).await?,
        "states": app.store.count(EntityKind::State).await?,
        "users": app.store.count(EntityKind::User).await?,
    });
    Ok(Json(body))
}
