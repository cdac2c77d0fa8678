//! Storage abstraction for persistence.

mod file;
mod memory;

pub use file::{FileStorage, SCENE_FILE_NAME};
pub use memory::MemoryStorage;

use crate::scene::Scene;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Scene not found: {0}")]
    NotFound(String),
    #[error("Corrupt scene data: {0}")]
    Corrupt(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for scene storage backends.
///
/// Calls are synchronous and expected to be short.
pub trait Storage {
    /// Save the scene, replacing what was stored before.
    fn save(&self, scene: &Scene) -> StorageResult<()>;

    /// Load the stored scene.
    fn load(&self) -> StorageResult<Scene>;

    /// Delete the stored scene. Deleting nothing is not an error.
    fn delete(&self) -> StorageResult<()>;

    /// Check if a scene is stored.
    fn exists(&self) -> StorageResult<bool>;

    /// Copy the stored data aside so a later save cannot destroy it.
    ///
    /// Returns where the copy went, or `None` when there was nothing to copy
    /// or the backend keeps no backups.
    fn backup(&self) -> StorageResult<Option<String>> {
        Ok(None)
    }
}

/// Load the stored scene, falling back to an empty one.
///
/// A missing scene is the normal first-run case and is silent. Corrupt data
/// is backed up before falling back, since the next save replaces it.
/// Unreadable storage is logged and also yields an empty scene.
pub fn load_or_default(storage: &dyn Storage) -> Scene {
    match storage.load() {
        Ok(scene) => scene,
        Err(StorageError::NotFound(what)) => {
            log::debug!("No saved scene at {}, starting empty", what);
            Scene::new()
        }
        Err(e @ StorageError::Corrupt(_)) => {
            match storage.backup() {
                Ok(Some(location)) => log::warn!("{}, kept a copy at {}, starting empty", e, location),
                Ok(None) => log::warn!("{}, starting empty", e),
                Err(backup_err) => log::warn!("{}, starting empty without a backup: {}", e, backup_err),
            }
            Scene::new()
        }
        Err(e) => {
            log::warn!("Failed to load scene, starting empty: {}", e);
            Scene::new()
        }
    }
}
