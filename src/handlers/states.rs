//! State resources: `/states` and `/states/:state_id`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::extractors::JsonPayload;
use crate::model::{self, Entity, EntityKind};
use crate::state::AppState;

pub async fn list(State(app): State<AppState>) -> Result<Json<Vec<Entity>>, ApiError> {
    let states = app.store.all(EntityKind::State).await?;
    Ok(Json(states))
}

pub async fn read(
    State(app): State<AppState>,
    Path(state_id): Path<String>,
) -> Result<Json<Entity>, ApiError> {
    let state = app
        .store
        .get(EntityKind::State, &state_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(state))
}

pub async fn create(
    State(app): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<Entity>), ApiError> {
    let state = model::State::from_payload(payload)?;
    let entity = Entity::State(state);
    app.store.save(entity.clone()).await?;
    Ok((StatusCode::CREATED, Json(entity)))
}

/// The record must exist before the body is looked at, so a bad payload
/// against an unknown id still answers 404.
pub async fn update(
    State(app): State<AppState>,
    Path(state_id): Path<String>,
    payload: Result<JsonPayload, ApiError>,
) -> Result<Json<Entity>, ApiError> {
    let mut entity = app
        .store
        .get(EntityKind::State, &state_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let JsonPayload(payload) = payload?;
    match &mut entity {
        Entity::State(record) => record.apply_update(payload)?,
        _ => return Err(ApiError::NotFound),
    }
    app.store.save(entity.clone()).await?;
    Ok(Json(entity))
}

pub async fn delete(
    State(app): State<AppState>,
    Path(state_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if !app.store.delete(EntityKind::State, &state_id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(Json(json!({})))
}
