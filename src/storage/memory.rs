use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ObjectStore;
use crate::error::StoreError;
use crate::model::{Entity, EntityKind};

/// Ephemeral backend. Used by the test suite and memory-only deployments.
#[derive(Default)]
pub struct MemoryStore {
    objects: RwLock<HashMap<EntityKind, HashMap<String, Entity>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get(&self, kind: EntityKind, id: &str) -> Result<Option<Entity>, StoreError> {
        let objects = self.objects.read().await;
        Ok(objects.get(&kind).and_then(|bucket| bucket.get(id)).cloned())
    }

    async fn all(&self, kind: EntityKind) -> Result<Vec<Entity>, StoreError> {
        let objects = self.objects.read().await;
        Ok(objects
            .get(&kind)
            .map(|bucket| bucket.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn count(&self, kind: EntityKind) -> Result<u64, StoreError> {
        let objects = self.objects.read().await;
        Ok(objects.get(&kind).map(|bucket| bucket.len() as u64).unwrap_or(0))
    }

    async fn save(&self, entity: Entity) -> Result<(), StoreError> {
        let mut objects = self.objects.write().await;
        let id = entity.id().to_string();
        objects.entry(entity.kind()).or_default().insert(id, entity);
        Ok(())
    }

    async fn delete(&self, kind: EntityKind, id: &str) -> Result<bool, StoreError> {
        let mut objects = self.objects.write().await;
        Ok(objects
            .get_mut(&kind)
            .and_then(|bucket| bucket.remove(id))
            .is_some())
    }
}
