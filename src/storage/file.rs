//! JSON snapshot store. The whole object map lives in memory and the snapshot
//! file is rewritten on every mutation, through a temp file in the snapshot's
//! directory followed by an atomic rename.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tokio::sync::RwLock;

use super::ObjectStore;
use crate::error::StoreError;
use crate::model::{Entity, EntityKind};

type ObjectMap = HashMap<EntityKind, HashMap<String, Entity>>;

pub struct FileStore {
    path: PathBuf,
    objects: RwLock<ObjectMap>,
}

impl FileStore {
    /// Load an existing snapshot, or start empty when the file is absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let objects = match std::fs::read(&path) {
            Ok(bytes) => decode_snapshot(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => ObjectMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            objects: RwLock::new(objects),
        })
    }

    /// Serialize the full map keyed `"<Kind>.<id>"` and swap it into place.
    fn write_snapshot(&self, objects: &ObjectMap) -> Result<(), StoreError> {
        let mut snapshot = Map::new();
        for bucket in objects.values() {
            for entity in bucket.values() {
                let key = format!("{}.{}", entity.kind().name(), entity.id());
                snapshot.insert(key, serde_json::to_value(entity)?);
            }
        }

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer(&mut tmp, &Value::Object(snapshot))?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

fn decode_snapshot(bytes: &[u8]) -> Result<ObjectMap, StoreError> {
    let snapshot: Map<String, Value> = serde_json::from_slice(bytes)?;
    let mut objects = ObjectMap::new();
    for (_, value) in snapshot {
        let entity: Entity = serde_json::from_value(value)?;
        objects
            .entry(entity.kind())
            .or_default()
            .insert(entity.id().to_string(), entity);
    }
    Ok(objects)
}

#[async_trait]
impl ObjectStore for FileStore {
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
        let kind = entity.kind();
        let id = entity.id().to_string();
        let previous = objects.entry(kind).or_default().insert(id.clone(), entity);

        if let Err(err) = self.write_snapshot(&objects) {
            // Failed persists must not leave a half-applied map behind.
            if let Some(bucket) = objects.get_mut(&kind) {
                match previous {
                    Some(prev) => {
                        bucket.insert(id, prev);
                    }
                    None => {
                        bucket.remove(&id);
                    }
                }
            }
            return Err(err);
        }
        Ok(())
    }

    async fn delete(&self, kind: EntityKind, id: &str) -> Result<bool, StoreError> {
        let mut objects = self.objects.write().await;
        let removed = objects.get_mut(&kind).and_then(|bucket| bucket.remove(id));
        let Some(entity) = removed else {
            return Ok(false);
        };

        if let Err(err) = self.write_snapshot(&objects) {
            if let Some(bucket) = objects.get_mut(&kind) {
                bucket.insert(id.to_string(), entity);
            }
            return Err(err);
        }
        Ok(true)
    }
}
