use crate::domain::ports::Repository;
use crate::utils::error::{GameError, Result};
use std::sync::{Mutex, MutexGuard};

/// Keeps the record in process memory. Clones on every load and save.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    slot: Mutex<Option<T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    pub fn with_entity(entity: T) -> Self {
        Self {
            slot: Mutex::new(Some(entity)),
        }
    }

    fn slot(&self) -> Result<MutexGuard<'_, Option<T>>> {
        self.slot.lock().map_err(|_| GameError::LockPoisoned {
            resource: "in-memory repository".to_string(),
        })
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send> Repository<T> for InMemoryRepository<T> {
    fn save(&self, entity: &T) -> Result<()> {
        *self.slot()? = Some(entity.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<T>> {
        Ok(self.slot()?.clone())
    }

    fn delete(&self) -> Result<()> {
        *self.slot()? = None;
        Ok(())
    }

    fn exists(&self) -> Result<bool> {
        Ok(self.slot()?.is_some())
    }
}
