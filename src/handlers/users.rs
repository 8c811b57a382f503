//! User resources: `/users` and `/users/:user_id`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::extractors::JsonPayload;
use crate::model::{Entity, EntityKind, User};
use crate::state::AppState;

pub async fn list(State(app): State<AppState>) -> Result<Json<Vec<Entity>>, ApiError> {
    let users = app.store.all(EntityKind::User).await?;
    Ok(Json(users))
}

pub async fn read(
    State(app): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Entity>, ApiError> {
    let user = app
        .store
        .get(EntityKind::User, &user_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(user))
}

pub async fn create(
    State(app): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<Entity>), ApiError> {
    let user = User::from_payload(payload)?;
    let entity = Entity::User(user);
    app.store.save(entity.clone()).await?;
    Ok((StatusCode::CREATED, Json(entity)))
}

pub async fn update(
    State(app): State<AppState>,
    Path(user_id): Path<String>,
    payload: Result<JsonPayload, ApiError>,
) -> Result<Json<Entity>, ApiError> {
    let mut entity = app
        .store
        .get(EntityKind::User, &user_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let JsonPayload(payload) = payload?;
    match &mut entity {
        Entity::User(record) => record.apply_update(payload)?,
        _ => return Err(ApiError::NotFound),
    }
    app.store.save(entity.clone()).await?;
    Ok(Json(entity))
}

pub async fn delete(
    State(app): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if !app.store.delete(EntityKind::User, &user_id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(Json(json!({})))
}
