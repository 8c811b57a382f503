//! Staybook: REST API over a lodging catalog backed by a pluggable object store.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod state;
pub mod storage;

pub use config::{AppConfig, StorageBackend};
pub use error::{ApiError, ConfigError, StoreError};
pub use model::{Amenity, City, Entity, EntityKind, Place, Review, State, User};
pub use routes::{api_routes, app};
pub use state::AppState;
pub use storage::{FileStore, MemoryStore, ObjectStore};
