use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{expect_string, new_id, strip_reserved, take_string};
use crate::error::ApiError;

/// A city inside a state. Owns places through `city_id` on [`super::Place`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    pub state_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl City {
    /// Build from a create payload. The owning state comes from the route,
    /// never from the body.
    pub fn from_payload(state_id: String, mut payload: Map<String, Value>) -> Result<Self, ApiError> {
        let name = take_string(&mut payload, "name")?;
        payload.remove("state_id");
        strip_reserved(&mut payload);
        let now = Utc::now();
        Ok(Self {
            id: new_id(),
            name,
            state_id,
            created_at: now,
            updated_at: now,
            extra: payload,
        })
    }

    pub fn apply_update(&mut self, payload: Map<String, Value>) -> Result<(), ApiError> {
        for (key, value) in payload {
            match key.as_str() {
                "id" | "state_id" | "created_at" | "updated_at" | "__class__" => {}
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
