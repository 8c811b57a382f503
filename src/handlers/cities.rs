//! City resources, listed and created under their owning state.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::extractors::JsonPayload;
use crate::model::{City, Entity, EntityKind};
use crate::state::AppState;

/// GET /states/:state_id/cities: every city of one state, empty array when
/// it has none.
pub async fn list_by_state(
    State(app): State<AppState>,
    Path(state_id): Path<String>,
) -> Result<Json<Vec<Entity>>, ApiError> {
    app.store
        .get(EntityKind::State, &state_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let cities: Vec<Entity> = app
        .store
        .all(EntityKind::City)
        .await?
        .into_iter()
        .filter(|entity| matches!(entity, Entity::City(city) if city.state_id == state_id))
        .collect();
    Ok(Json(cities))
}

/// POST /states/:state_id/cities: the foreign key comes from the route, not
/// the body.
pub async fn create_in_state(
    State(app): State<AppState>,
    Path(state_id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<Entity>), ApiError> {
    app.store
        .get(EntityKind::State, &state_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let city = City::from_payload(state_id, payload)?;
    let entity = Entity::City(city);
    app.store.save(entity.clone()).await?;
    Ok((StatusCode::CREATED, Json(entity)))
}

pub async fn read(
    State(app): State<AppState>,
    Path(city_id): Path<String>,
) -> Result<Json<Entity>, ApiError> {
    let city = app
        .store
        .get(EntityKind::City, &city_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(city))
}

pub async fn update(
    State(app): State<AppState>,
    Path(city_id): Path<String>,
    payload: Result<JsonPayload, ApiError>,
) -> Result<Json<Entity>, ApiError> {
    let mut entity = app
        .store
        .get(EntityKind::City, &city_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let JsonPayload(payload) = payload?;
    match &mut entity {
        Entity::City(record) => record.apply_update(payload)?,
        _ => return Err(ApiError::NotFound),
    }
    app.store.save(entity.clone()).await?;
    Ok(Json(entity))
}

pub async fn delete(
    State(app): State<AppState>,
    Path(city_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if !app.store.delete(EntityKind::City, &city_id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(Json(json!({})))
}
