//! In-memory storage implementation.

use super::{Storage, StorageError, StorageResult};
use crate::scene::Scene;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
///
/// Holds the serialized JSON so loads go through the same parsing as files.
#[derive(Default)]
pub struct MemoryStorage {
    contents: RwLock<Option<String>>,
    backup: RwLock<Option<String>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that already holds `json`.
    pub fn with_contents(json: impl Into<String>) -> Self {
        Self {
            contents: RwLock::new(Some(json.into())),
            backup: RwLock::new(None),
        }
    }

    /// Raw stored JSON, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.read().ok().and_then(|c| c.clone())
    }

    /// JSON copied aside by the last backup, if any.
    pub fn backup_contents(&self) -> Option<String> {
        self.backup.read().ok().and_then(|c| c.clone())
    }
}

impl Storage for MemoryStorage {
    fn save(&self, scene: &Scene) -> StorageResult<()> {
        let json = scene
            .to_json()
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let mut contents = self
            .contents
            .write()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        *contents = Some(json);
        Ok(())
    }

    fn load(&self) -> StorageResult<Scene> {
        let contents = self
            .contents
            .read()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        let json = contents
            .as_deref()
            .ok_or_else(|| StorageError::NotFound("memory".to_string()))?;
        Scene::from_json(json).map_err(|e| StorageError::Corrupt(e.to_string()))
    }

    fn delete(&self) -> StorageResult<()> {
        let mut contents = self
            .contents
            .write()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        *contents = None;
        Ok(())
    }

    fn exists(&self) -> StorageResult<bool> {
        let contents = self
            .contents
            .read()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        Ok(contents.is_some())
    }

    fn backup(&self) -> StorageResult<Option<String>> {
        let Some(json) = self.contents() else {
            return Ok(None);
        };
        let mut backup = self
            .backup
            .write()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        *backup = Some(json);
        Ok(Some("memory backup".to_string()))
    }
}
