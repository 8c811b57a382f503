//! Object store abstraction and backends.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::{Entity, EntityKind};

/// Keyed object store over every record kind.
///
/// `save` persists on every call and must surface I/O failures rather than
/// dropping writes. `delete` does not cascade: removing a record leaves its
/// dependents in the store, reachable by direct id.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn get(&self, kind: EntityKind, id: &str) -> Result<Option<Entity>, StoreError>;

    /// Every record of one kind. Empty when none exist.
    async fn all(&self, kind: EntityKind) -> Result<Vec<Entity>, StoreError>;

    async fn count(&self, kind: EntityKind) -> Result<u64, StoreError>;

    /// Insert or replace the record under its kind and id.
    async fn save(&self, entity: Entity) -> Result<(), StoreError>;

    /// Remove a record. Returns false when no record matched.
    async fn delete(&self, kind: EntityKind, id: &str) -> Result<bool, StoreError>;
}
