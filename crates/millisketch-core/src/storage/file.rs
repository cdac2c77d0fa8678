//! File-based storage implementation.

use super::{Storage, StorageError, StorageResult};
use crate::scene::Scene;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name used by [`FileStorage::default_location`].
pub const SCENE_FILE_NAME: &str = "scene.json";

/// Stores the scene as a single JSON file.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a file storage for the given file path.
    ///
    /// Nothing is touched on disk until the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create file storage in the default location.
    ///
    /// On Unix: `~/.local/share/millisketch/scene.json`
    /// On Windows: `%LOCALAPPDATA%\millisketch\scene.json`
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;

        Ok(Self::new(base.join("millisketch").join(SCENE_FILE_NAME)))
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where [`Storage::backup`] copies the file: the path with `.bak` appended.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".bak");
        PathBuf::from(name)
    }
}

impl Storage for FileStorage {
    fn save(&self, scene: &Scene) -> StorageResult<()> {
        let json = scene
            .to_json()
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                StorageError::Io(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        fs::write(&self.path, json).map_err(|e| {
            StorageError::Io(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        log::info!("Saved {} shape(s) to {}", scene.len(), self.path.display());
        Ok(())
    }

    fn load(&self) -> StorageResult<Scene> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(self.path.display().to_string()));
            }
            Err(e) => {
                return Err(StorageError::Io(format!("Failed to read {}: {}", self.path.display(), e)));
            }
        };

        let scene = Scene::from_json(&json).map_err(|e| {
            StorageError::Corrupt(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;
        log::info!("Loaded {} shape(s) from {}", scene.len(), self.path.display());
        Ok(scene)
    }

    fn delete(&self) -> StorageResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(format!("Failed to delete {}: {}", self.path.display(), e))),
        }
    }

    fn exists(&self) -> StorageResult<bool> {
        Ok(self.path.is_file())
    }

    fn backup(&self) -> StorageResult<Option<String>> {
        let target = self.backup_path();
        match fs::copy(&self.path, &target) {
            Ok(_) => Ok(Some(target.display().to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(format!(
                "Failed to copy {} to {}: {}",
                self.path.display(),
                target.display(),
                e
            ))),
        }
    }
}
