//! Domain records. Every record carries a server-assigned id and timestamps.

mod amenity;
mod city;
mod place;
mod review;
mod state;
mod user;

pub use amenity::Amenity;
pub use city::City;
pub use place::Place;
pub use review::Review;
pub use state::State;
pub use user::User;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::ApiError;

/// Record kinds known to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    State,
    City,
    Place,
    Review,
    User,
    Amenity,
}

impl EntityKind {
    /// Class name used in snapshot keys and the serialized `__class__` tag.
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::State => "State",
            EntityKind::City => "City",
            EntityKind::Place => "Place",
            EntityKind::Review => "Review",
            EntityKind::User => "User",
            EntityKind::Amenity => "Amenity",
        }
    }
}

/// Tagged union over every stored record kind. The serialized form carries
/// the class name, which is also the on-disk snapshot format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "__class__")]
pub enum Entity {
    State(State),
    City(City),
    Place(Place),
    Review(Review),
    User(User),
    Amenity(Amenity),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::State(_) => EntityKind::State,
            Entity::City(_) => EntityKind::City,
            Entity::Place(_) => EntityKind::Place,
            Entity::Review(_) => EntityKind::Review,
            Entity::User(_) => EntityKind::User,
            Entity::Amenity(_) => EntityKind::Amenity,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Entity::State(r) => &r.id,
            Entity::City(r) => &r.id,
            Entity::Place(r) => &r.id,
            Entity::Review(r) => &r.id,
            Entity::User(r) => &r.id,
            Entity::Amenity(r) => &r.id,
        }
    }
}

pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Pull a mandatory string field out of a create payload.
pub(crate) fn take_string(
    payload: &mut Map<String, Value>,
    field: &'static str,
) -> Result<String, ApiError> {
    match payload.remove(field) {
        None => Err(ApiError::MissingField(field)),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ApiError::BadRequest(format!("{field} must be a string"))),
    }
}

pub(crate) fn expect_string(field: &'static str, value: Value) -> Result<String, ApiError> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(ApiError::BadRequest(format!("{field} must be a string"))),
    }
}

/// Drop server-assigned fields a client may have sent with a create payload.
pub(crate) fn strip_reserved(payload: &mut Map<String, Value>) {
    payload.remove("id");
    payload.remove("created_at");
    payload.remove("updated_at");
    payload.remove("__class__");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test payload must be an object"),
        }
    }

    #[test]
    fn create_assigns_id_and_timestamps() {
        let state = State::from_payload(payload(json!({
            "name": "California",
            "id": "client-pick",
            "created_at": "1999-01-01T00:00:00Z"
        })))
        .expect("valid payload");

        assert_eq!(state.name, "California");
        assert_ne!(state.id, "client-pick");
        assert!(Uuid::parse_str(&state.id).is_ok());
        assert_eq!(state.created_at, state.updated_at);
        assert!(state.extra.is_empty());
    }

    #[test]
    fn update_skips_immutable_fields() {
        let mut city = City::from_payload(
            "state-1".to_string(),
            payload(json!({ "name": "Fresno" })),
        )
        .expect("valid payload");
        let original_id = city.id.clone();
        let created_at = city.created_at;

        city.apply_update(payload(json!({
            "id": "other",
            "state_id": "state-2",
            "created_at": "1999-01-01T00:00:00Z",
            "name": "Clovis",
            "population": 120000
        })))
        .expect("valid update");

        assert_eq!(city.id, original_id);
        assert_eq!(city.state_id, "state-1");
        assert_eq!(city.created_at, created_at);
        assert_eq!(city.name, "Clovis");
        assert_eq!(city.extra["population"], json!(120000));
        assert!(city.updated_at >= created_at);
    }

    #[test]
    fn serialized_form_is_tagged_with_class() {
        let user = User::from_payload(payload(json!({
            "email": "a@b.c",
            "password": "secret"
        })))
        .expect("valid payload");
        let entity = Entity::User(user);

        let value = serde_json::to_value(&entity).expect("serializable");
        assert_eq!(value["__class__"], "User");
        assert_eq!(value["email"], "a@b.c");

        let back: Entity = serde_json::from_value(value).expect("round trip");
        assert_eq!(back.kind(), EntityKind::User);
        assert_eq!(back.id(), entity.id());
    }

    #[test]
    fn non_string_mandatory_field_is_rejected() {
        let err = State::from_payload(payload(json!({ "name": 7 }))).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));

        let err = State::from_payload(payload(json!({ "title": "no name" }))).unwrap_err();
        assert!(matches!(err, ApiError::MissingField("name")));
    }
}
