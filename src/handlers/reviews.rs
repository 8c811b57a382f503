//! Review resources, listed and created under their owning place.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::extractors::JsonPayload;
use crate::model::{Entity, EntityKind, Review};
use crate::state::AppState;

pub async fn list_by_place(
    State(app): State<AppState>,
    Path(place_id): Path<String>,
) -> Result<Json<Vec<Entity>>, ApiError> {
    app.store
        .get(EntityKind::Place, &place_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let reviews: Vec<Entity> = app
        .store
        .all(EntityKind::Review)
        .await?
        .into_iter()
        .filter(|entity| matches!(entity, Entity::Review(review) if review.place_id == place_id))
        .collect();
    Ok(Json(reviews))
}

/// POST /places/:place_id/reviews: requires `user_id` and `text`, and the
/// referenced user must exist (404 when it does not).
pub async fn create_in_place(
    State(app): State<AppState>,
    Path(place_id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> Result<(StatusCode, Json<Entity>), ApiError> {
    app.store
        .get(EntityKind::Place, &place_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let user_id = match payload.get("user_id") {
        None => return Err(ApiError::MissingField("user_id")),
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err(ApiError::BadRequest("user_id must be a string".into())),
    };
    if !payload.contains_key("text") {
        return Err(ApiError::MissingField("text"));
    }
    app.store
        .get(EntityKind::User, &user_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let review = Review::from_payload(place_id, user_id, payload)?;
    let entity = Entity::Review(review);
    app.store.save(entity.clone()).await?;
    Ok((StatusCode::CREATED, Json(entity)))
}

pub async fn read(
    State(app): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<Json<Entity>, ApiError> {
    let review = app
        .store
        .get(EntityKind::Review, &review_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(review))
}

pub async fn update(
    State(app): State<AppState>,
    Path(review_id): Path<String>,
    payload: Result<JsonPayload, ApiError>,
) -> Result<Json<Entity>, ApiError> {
    let mut entity = app
        .store
        .get(EntityKind::Review, &review_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let JsonPayload(payload) = payload?;
    match &mut entity {
        Entity::Review(record) => record.apply_update(payload)?,
        _ => return Err(ApiError::NotFound),
    }
    app.store.save(entity.clone()).await?;
    Ok(Json(entity))
}

pub async fn delete(
    State(app): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if !app.store.delete(EntityKind::Review, &review_id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(Json(json!({})))
}
