use crate::core::grid_service::GridService;
use crate::core::Repository;
use crate::domain::actor::Actor;
use crate::domain::grid::Grid;
use crate::domain::model::Report;
use crate::utils::error::{GameError, Result};
use std::sync::{Mutex, MutexGuard};

/// Robot rules on top of the board: placement, wrap-around movement, turns.
pub struct ActorService<A: Repository<Actor>, G: Repository<Grid>> {
    repository: A,
    grids: GridService<G>,
    write_lock: Mutex<()>,
}

impl<A: Repository<Actor>, G: Repository<Grid>> ActorService<A, G> {
    pub fn new(repository: A, grids: GridService<G>) -> Self {
        Self {
            repository,
            grids,
            write_lock: Mutex::new(()),
        }
    }

    pub fn grids(&self) -> &GridService<G> {
        &self.grids
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>> {
        self.write_lock.lock().map_err(|_| GameError::LockPoisoned {
            resource: "robot".to_string(),
        })
    }

    fn require_grid(&self) -> Result<Grid> {
        self.grids.get()?.ok_or(GameError::NoGrid)
    }

    fn load_placed(&self) -> Result<Actor> {
        match self.repository.load()? {
            Some(actor) if actor.is_placed() => Ok(actor),
            _ => Err(GameError::NotPlaced),
        }
    }

    pub fn place(&self, x: i32, y: i32, facing: &str) -> Result<()> {
        let _guard = self.lock()?;

        let grid = self.require_grid()?;
        if grid.has_wall_at(x, y) {
            tracing::warn!("Cannot place robot at ({}, {}): wall", x, y);
            return Err(GameError::WallCollision { x, y });
        }
        if !grid.is_inside(x, y) {
            tracing::warn!("Cannot place robot at ({}, {}): outside board", x, y);
            return Err(GameError::OutOfBounds { x, y });
        }

        let mut actor = self.repository.load()?.unwrap_or_default();
        actor.place(x, y, facing)?;

        self.repository.save(&actor)?;
        tracing::info!("Placed robot at ({}, {}) facing {}", x, y, facing);
        Ok(())
    }

    /// One step forward. Leaving the board re-enters on the opposite edge.
    pub fn move_forward(&self) -> Result<()> {
        let _guard = self.lock()?;

        let grid = self.require_grid()?;
        let mut actor = self.load_placed()?;

        let (next_x, next_y) = actor.next_position()?;
        let x = wrap_coordinate(next_x, grid.width());
        let y = wrap_coordinate(next_y, grid.height());

        if grid.has_wall_at(x, y) {
            tracing::warn!("Cannot move robot to ({}, {}): wall", x, y);
            return Err(GameError::WallCollision { x, y });
        }

        actor.move_to(x, y)?;
        self.repository.save(&actor)?;
        tracing::info!("Moved robot to ({}, {})", x, y);
        Ok(())
    }

    pub fn turn_left(&self) -> Result<()> {
        self.turn(Actor::turn_left, "left")
    }

    pub fn turn_right(&self) -> Result<()> {
        self.turn(Actor::turn_right, "right")
    }

    fn turn(&self, rotate: fn(&mut Actor) -> Result<()>, side: &str) -> Result<()> {
        let _guard = self.lock()?;

        let mut actor = self.load_placed()?;
        rotate(&mut actor)?;

        self.repository.save(&actor)?;
        tracing::info!("Turned robot {}", side);
        Ok(())
    }

    pub fn report(&self) -> Result<Option<Report>> {
        Ok(self.repository.load()?.and_then(|actor| actor.report()))
    }

    pub fn exists(&self) -> Result<bool> {
        self.repository.exists()
    }

    pub fn delete(&self) -> Result<()> {
        let _guard = self.lock()?;

        self.repository.delete()?;
        tracing::info!("Deleted robot");
        Ok(())
    }
}

/// Maps a coordinate that stepped off `1..=max` onto the opposite edge.
pub fn wrap_coordinate(value: i64, max: i32) -> i32 {
    if value < 1 {
        max
    } else if value > i64::from(max) {
        1
    } else {
        // 1 <= value <= max here, so it fits.
        i32::try_from(value).unwrap_or(max)
    }
}
