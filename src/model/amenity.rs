use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{expect_string, new_id, strip_reserved, take_string};
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Amenity {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Amenity {
    pub fn from_payload(mut payload: Map<String, Value>) -> Result<Self, ApiError> {
        let name = take_string(&mut payload, "name")?;
        strip_reserved(&mut payload);
        let now = Utc::now();
        Ok(Self {
            id: new_id(),
            name,
            created_at: now,
            updated_at: now,
            extra: payload,
        })
    }

    pub fn apply_update(&mut self, payload: Map<String, Value>) -> Result<(), ApiError> {
        for (key, value) in payload {
            match key.as_str() {
                "id" | "created_at" | "updated_at" | "__class__" => {}
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
