use crate::core::Repository;
use crate::domain::grid::Grid;
use crate::utils::error::{GameError, Result};
use std::sync::{Mutex, MutexGuard};

/// Lifecycle of the persisted board.
pub struct GridService<R: Repository<Grid>> {
    repository: R,
    write_lock: Mutex<()>,
}

impl<R: Repository<Grid>> GridService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>> {
        self.write_lock.lock().map_err(|_| GameError::LockPoisoned {
            resource: "board".to_string(),
        })
    }

    /// Returns the persisted board, creating it with the given size if none
    /// exists yet. An existing board is never resized.
    pub fn create_or_get(&self, width: i32, height: i32) -> Result<Grid> {
        let _guard = self.lock()?;

        if let Some(grid) = self.repository.load()? {
            tracing::debug!(
                "Board already exists ({}x{}), ignoring requested {}x{}",
                grid.width(),
                grid.height(),
                width,
                height
            );
            return Ok(grid);
        }

        let grid = Grid::new(width, height)?;
        self.repository.save(&grid)?;
        tracing::info!("Created {}x{} board", width, height);
        Ok(grid)
    }

    pub fn get(&self) -> Result<Option<Grid>> {
        self.repository.load()
    }

    pub fn exists(&self) -> Result<bool> {
        self.repository.exists()
    }

    pub fn add_wall(&self, x: i32, y: i32) -> Result<()> {
        let _guard = self.lock()?;

        let mut grid = self.repository.load()?.ok_or(GameError::NoGrid)?;
        if let Err(e) = grid.add_wall(x, y) {
            tracing::warn!("Rejected wall at ({}, {}): {}", x, y, e);
            return Err(e);
        }

        self.repository.save(&grid)?;
        tracing::info!("Added wall at ({}, {})", x, y);
        Ok(())
    }

    pub fn clear_walls(&self) -> Result<()> {
        let _guard = self.lock()?;

        let mut grid = self.repository.load()?.ok_or(GameError::NoGrid)?;
        let removed = grid.wall_count();
        grid.clear_walls();

        self.repository.save(&grid)?;
        tracing::info!("Cleared {} walls", removed);
        Ok(())
    }

    pub fn delete(&self) -> Result<()> {
        let _guard = self.lock()?;

        self.repository.delete()?;
        tracing::info!("Deleted board");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryRepository;

    fn service() -> GridService<InMemoryRepository<Grid>> {
        GridService::new(InMemoryRepository::new())
    }

    #[test]
    fn test_create_persists_new_board() {
        let service = service();

        let grid = service.create_or_get(10, 8).unwrap();

        assert_eq!((grid.width(), grid.height()), (10, 8));
        assert!(service.exists().unwrap());
        assert_eq!(service.get().unwrap(), Some(grid));
    }

    #[test]
    fn test_create_returns_existing_board_unchanged() {
        let service = service();
        service.create_or_get(10, 8).unwrap();
        service.add_wall(2, 2).unwrap();

        let grid = service.create_or_get(3, 3).unwrap();

        assert_eq!((grid.width(), grid.height()), (10, 8));
        assert!(grid.has_wall_at(2, 2));
    }

    #[test]
    fn test_create_rejects_invalid_dimensions() {
        let service = service();
        assert!(matches!(
            service.create_or_get(0, 4),
            Err(GameError::ValidationError { .. })
        ));
        assert!(!service.exists().unwrap());
    }

    #[test]
    fn test_get_without_board() {
        assert_eq!(service().get().unwrap(), None);
    }

    #[test]
    fn test_add_wall_without_board() {
        assert!(matches!(service().add_wall(1, 1), Err(GameError::NoGrid)));
    }

    #[test]
    fn test_add_wall_persists() {
        let service = service();
        service.create_or_get(5, 5).unwrap();

        service.add_wall(3, 4).unwrap();

        assert!(service.get().unwrap().unwrap().has_wall_at(3, 4));
    }

    #[test]
    fn test_failed_add_wall_does_not_persist() {
        let service = service();
        service.create_or_get(5, 5).unwrap();
        service.add_wall(1, 1).unwrap();

        assert!(matches!(
            service.add_wall(1, 1),
            Err(GameError::AlreadyExists { .. })
        ));
        assert!(matches!(
            service.add_wall(6, 1),
            Err(GameError::OutOfBounds { .. })
        ));
        assert_eq!(service.get().unwrap().unwrap().wall_count(), 1);
    }

    #[test]
    fn test_clear_walls() {
        let service = service();
        assert!(matches!(service.clear_walls(), Err(GameError::NoGrid)));

        service.create_or_get(5, 5).unwrap();
        service.add_wall(1, 1).unwrap();
        service.add_wall(2, 2).unwrap();
        service.clear_walls().unwrap();

        let grid = service.get().unwrap().unwrap();
        assert_eq!(grid.wall_count(), 0);
        assert_eq!(grid.width(), 5);
    }

    #[test]
    fn test_concurrent_add_wall_keeps_every_wall() {
        let service = service();
        service.create_or_get(8, 8).unwrap();

        std::thread::scope(|scope| {
            for x in 1..=8 {
                let service = &service;
                scope.spawn(move || {
                    for y in 1..=8 {
                        service.add_wall(x, y).unwrap();
                    }
                });
            }
        });

        let grid = service.get().unwrap().unwrap();
        assert_eq!(grid.wall_count(), 64);
        assert!((1..=8).all(|x| (1..=8).all(|y| grid.has_wall_at(x, y))));
    }

    #[test]
    fn test_delete_always_succeeds() {
        let service = service();
        service.delete().unwrap();

        service.create_or_get(5, 5).unwrap();
        service.delete().unwrap();

        assert_eq!(service.get().unwrap(), None);
        let grid = service.create_or_get(2, 3).unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 3));
    }
}
