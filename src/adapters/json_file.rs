use crate::domain::ports::Repository;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Stores one entity as a pretty-printed JSON document.
///
/// A missing file, an empty file and a `null` document all mean "absent".
/// Saves write a uniquely named sibling temp file and rename it over the
/// target, so a reader never sees a half-written document.
#[derive(Debug, Clone)]
pub struct JsonFileRepository<T> {
    path: PathBuf,
    _entity: PhantomData<fn() -> T>,
}

impl<T> JsonFileRepository<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _entity: PhantomData,
        }
    }

    pub fn in_dir(base_path: impl AsRef<Path>, file_name: &str) -> Self {
        Self::new(base_path.as_ref().join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl<T: Serialize + DeserializeOwned> Repository<T> for JsonFileRepository<T> {
    fn save(&self, entity: &T) -> Result<()> {
        let parent = self.parent_dir();
        fs::create_dir_all(parent)?;

        let data = serde_json::to_vec_pretty(entity)?;
        let mut temp_file = NamedTempFile::new_in(parent)?;
        temp_file.write_all(&data)?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(&self.path).map_err(|e| e.error)?;

        tracing::debug!("Saved state to {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Option<T>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let entity: Option<T> = serde_json::from_str(&content)?;
        Ok(entity)
    }

    fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!("Removed {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self) -> Result<bool> {
        Ok(self.load()?.is_some())
    }
}
