use crate::utils::error::Result;
use std::sync::Arc;

/// Single-record store for one entity type.
///
/// A `save` must be visible to the next `load` once it returns.
pub trait Repository<T>: Send + Sync {
    fn save(&self, entity: &T) -> Result<()>;
    fn load(&self) -> Result<Option<T>>;
    fn delete(&self) -> Result<()>;
    fn exists(&self) -> Result<bool>;
}

impl<T, R: Repository<T> + ?Sized> Repository<T> for Arc<R> {
    fn save(&self, entity: &T) -> Result<()> {
        (**self).save(entity)
    }

    fn load(&self) -> Result<Option<T>> {
        (**self).load()
    }

    fn delete(&self) -> Result<()> {
        (**self).delete()
    }

    fn exists(&self) -> Result<bool> {
        (**self).exists()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &str;
    fn board_file(&self) -> &str;
    fn robot_file(&self) -> &str;
    fn default_width(&self) -> i32;
    fn default_height(&self) -> i32;
}
