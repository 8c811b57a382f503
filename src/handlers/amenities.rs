//! Amenity resources: `/amenities` and `/amenities/:amenity_id`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::extractors::JsonPayload;
use crate::model::{Amenity, Entity, EntityKind};
use crate::state::AppState;

pub async fn list(State(app): State<AppState>) -> Result<Json<Vec<Entity>>, ApiError> {
    let amenities = app.store.all(EntityKind::Amenity).await?;
    Ok(Json(amenities))
}

pub async fn read(
    State(app): State<AppState>,
    Path(amenity_id): Path<String>,
) -> Result<Json<Entity>, ApiError> {
    let amenity = app
        .store
        .get(EntityKind::Amenity, &amenity_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(amenity))
}

pub async fn create(
    State(app): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<Entity>), ApiError> {
    let amenity = Amenity::from_payload(payload)?;
    let entity = Entity::Amenity(amenity);
    app.store.save(entity.clone()).await?;
    Ok((StatusCode::CREATED, Json(entity)))
}

pub async fn update(
    State(app): State<AppState>,
    Path(amenity_id): Path<String>,
    payload: Result<JsonPayload, ApiError>,
) -> Result<Json<Entity>, ApiError> {
    let mut entity = app
        .store
        .get(EntityKind::Amenity, &amenity_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let JsonPayload(payload) = payload?;
    match &mut entity {
        Entity::Amenity(record) => record.apply_update(payload)?,
        _ => return Err(ApiError::NotFound),
    }
    app.store.save(entity.clone()).await?;
    Ok(Json(entity))
}

pub async fn delete(
    State(app): State<AppState>,
    Path(amenity_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if !app.store.delete(EntityKind::Amenity, &amenity_id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(Json(json!({})))
}
