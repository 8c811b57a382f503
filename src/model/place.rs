use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{expect_string, new_id, strip_reserved, take_string};
use crate::error::ApiError;

/// A lodging inside a city, created by a user. Everything beyond the typed
/// fields (description, room counts, price, coordinates, ...) lives in the
/// flattened attribute map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub city_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Place {
    /// Build from a create payload. `city_id` comes from the route and
    /// `user_id` was already resolved by the handler.
    pub fn from_payload(
        city_id: String,
        user_id: String,
        mut payload: Map<String, Value>,
    ) -> Result<Self, ApiError> {
        let name = take_string(&mut payload, "name")?;
        payload.remove("city_id");
        payload.remove("user_id");
        strip_reserved(&mut payload);
        let now = Utc::now();
        Ok(Self {
            id: new_id(),
            name,
            city_id,
            user_id,
            created_at: now,
            updated_at: now,
            extra: payload,
        })
    }

    pub fn apply_update(&mut self, payload: Map<String, Value>) -> Result<(), ApiError> {
        for (key, value) in payload {
            match key.as_str() {
                "id" | "city_id" | "user_id" | "created_at" | "updated_at" | "__class__" => {}
                "name" => self.name = expect_string("name", value)?,
                _ => {
                    self.extra.insert(key, value);
                }
            }
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}
