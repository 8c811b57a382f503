//! Place resources, listed and created under their owning city.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::extractors::JsonPayload;
use crate::model::{Entity, EntityKind, Place};
use crate::state::AppState;

pub async fn list_by_city(
    State(app): State<AppState>,
    Path(city_id): Path<String>,
) -> Result<Json<Vec<Entity>>, ApiError> {
    app.store
        .get(EntityKind::City, &city_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let places: Vec<Entity> = app
        .store
        .all(EntityKind::Place)
        .await?
        .into_iter()
        .filter(|entity| matches!(entity, Entity::Place(place) if place.city_id == city_id))
        .collect();
    Ok(Json(places))
}

/// POST /cities/:city_id/places: requires `user_id` and `name`, and the
/// referenced user must exist (404 when it does not).
pub async fn create_in_city(
    State(app): State<AppState>,
    Path(city_id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<Entity>), ApiError> {
    app.store
        .get(EntityKind::City, &city_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let user_id = match payload.get("user_id") {
        None => return Err(ApiError::MissingField("user_id")),
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err(ApiError::BadRequest("user_id must be a string".into())),
    };
    if !payload.contains_key("name") {
        return Err(ApiError::MissingField("name"));
    }
    app.store
        .get(EntityKind::User, &user_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let place = Place::from_payload(city_id, user_id, payload)?;
    let entity = Entity::Place(place);
    app.store.save(entity.clone()).await?;
    Ok((StatusCode::CREATED, Json(entity)))
}

pub async fn read(
    State(app): State<AppState>,
    Path(place_id): Path<String>,
) -> Result<Json<Entity>, ApiError> {
    let place = app
        .store
        .get(EntityKind::Place, &place_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(place))
}

pub async fn update(
    State(app): State<AppState>,
    Path(place_id): Path<String>,
    payload: Result<JsonPayload, ApiError>,
) -> Result<Json<Entity>, ApiError> {
    let mut entity = app
        .store
        .get(EntityKind::Place, &place_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let JsonPayload(payload) = payload?;
    match &mut entity {
        Entity::Place(record) => record.apply_update(payload)?,
        _ => return Err(ApiError::NotFound),
    }
    app.store.save(entity.clone()).await?;
    Ok(Json(entity))
}

pub async fn delete(
    State(app): State<AppState>,
    Path(place_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if !app.store.delete(EntityKind::Place, &place_id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(Json(json!({})))
}
