use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{expect_string, new_id, strip_reserved, take_string};
use crate::error::ApiError;

/// An account that creates places and writes reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn from_payload(mut payload: Map<String, Value>) -> Result<Self, ApiError> {
        let email = take_string(&mut payload, "email")?;
        let password = take_string(&mut payload, "password")?;
        strip_reserved(&mut payload);
        let now = Utc::now();
        Ok(Self {
            id: new_id(),
            email,
            password,
            created_at: now,
            updated_at: now,
            extra: payload,
        })
    }

    pub fn apply_update(&mut self, payload: Map<String, Value>) -> Result<(), ApiError> {
        for (key, value) in payload {
            match key.as_str() {
                "id" | "created_at" | "updated_at" | "__class__" => {}
                "email" => self.email = expect_string("email", value)?,
                "password" => self.password = expect_string("password", value)?,
                _ => {
                    self.extra.insert(key, value);
                }
            }
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}
