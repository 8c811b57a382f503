//! Request body extraction with the API's error contract.

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// JSON object request body. Anything else (wrong or missing content type,
/// an unparsable body, an empty object, a non-object value) rejects with
/// 400 `Not a JSON`.
pub struct JsonPayload(pub Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(&req) {
            return Err(ApiError::NotJson);
        }
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::NotJson)?;
        let value: Value = serde_json::from_slice(&bytes).map_err(|_| ApiError::NotJson)?;
        match value {
            Value::Object(map) if !map.is_empty() => Ok(JsonPayload(map)),
            _ => Err(ApiError::NotJson),
        }
    }
}

fn has_json_content_type(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| {
            v.split(';')
                .next()
                .unwrap_or("")
                .trim()
                .eq_ignore_ascii_case("application/json")
        })
        .unwrap_or(false)
}
