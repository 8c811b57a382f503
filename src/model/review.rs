use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{expect_string, new_id, strip_reserved, take_string};
use crate::error::ApiError;

/// A user's review of a place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub text: String,
    pub place_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Review {
    pub fn from_payload(
        place_id: String,
        user_id: String,
        mut payload: Map<String, Value>,
    ) -> Result<Self, ApiError> {
        let text = take_string(&mut payload, "text")?;
        payload.remove("place_id");
        payload.remove("user_id");
        strip_reserved(&mut payload);
        let now = Utc::now();
        Ok(Self {
            id: new_id(),
            text,
            place_id,
            user_id,
            created_at: now,
            updated_at: now,
            extra: payload,
        })
    }

    pub fn apply_update(&mut self, payload: Map<String, Value>) -> Result<(), ApiError> {
        for (key, value) in payload {
            match key.as_str() {
                "id" | "place_id" | "user_id" | "created_at" | "updated_at" | "__class__" => {}
                "text" => self.text = expect_string("text", value)?,
                _ => {
                    self.extra.insert(key, value);
                }
            }
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}
