use crate::domain::model::{Facing, Report};
use crate::utils::error::{GameError, Result};
use serde::{Deserialize, Serialize};

/// The robot. Either nowhere, or at a cell with a facing; never half placed.
///
/// Persisted as `{"x": .., "y": .., "facing": ..}` with `null` fields while
/// unplaced. A record with only some of the fields set loads as unplaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "ActorRecord", into = "ActorRecord")]
pub enum Actor {
    #[default]
    Unplaced,
    Placed { x: i32, y: i32, facing: Facing },
}

impl Actor {
    pub fn new() -> Self {
        Self::Unplaced
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, Actor::Placed { .. })
    }

    /// Places (or re-places) the actor. Bounds and walls are not checked here.
    pub fn place(&mut self, x: i32, y: i32, facing: &str) -> Result<()> {
        let facing: Facing = facing.parse()?;
        *self = Actor::Placed { x, y, facing };
        Ok(())
    }

    pub fn turn_left(&mut self) -> Result<()> {
        self.rotate(Facing::left)
    }

    pub fn turn_right(&mut self) -> Result<()> {
        self.rotate(Facing::right)
    }

    fn rotate(&mut self, turn: fn(Facing) -> Facing) -> Result<()> {
        match self {
            Actor::Placed { facing, .. } => {
                *facing = turn(*facing);
                Ok(())
            }
            Actor::Unplaced => Err(GameError::NotPlaced),
        }
    }

    /// Cell one step ahead, without bounds handling or mutation.
    ///
    /// Widened to `i64` so a step off the `i32` range stays representable.
    pub fn next_position(&self) -> Result<(i64, i64)> {
        match *self {
            Actor::Placed { x, y, facing } => {
                let (dx, dy) = facing.offset();
                Ok((i64::from(x) + i64::from(dx), i64::from(y) + i64::from(dy)))
            }
            Actor::Unplaced => Err(GameError::NotPlaced),
        }
    }

    /// Moves to `(x, y)` keeping the current facing.
    pub fn move_to(&mut self, x: i32, y: i32) -> Result<()> {
        match self {
            Actor::Placed {
                x: current_x,
                y: current_y,
                ..
            } => {
                *current_x = x;
                *current_y = y;
                Ok(())
            }
            Actor::Unplaced => Err(GameError::NotPlaced),
        }
    }

    pub fn report(&self) -> Option<Report> {
        match *self {
            Actor::Placed { x, y, facing } => Some(Report { x, y, facing }),
            Actor::Unplaced => None,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ActorRecord {
    x: Option<i32>,
    y: Option<i32>,
    facing: Option<Facing>,
}

impl From<ActorRecord> for Actor {
    fn from(record: ActorRecord) -> Self {
        match (record.x, record.y, record.facing) {
            (Some(x), Some(y), Some(facing)) => Actor::Placed { x, y, facing },
            _ => Actor::Unplaced,
        }
    }
}

impl From<Actor> for ActorRecord {
    fn from(actor: Actor) -> Self {
        match actor {
            Actor::Placed { x, y, facing } => Self {
                x: Some(x),
                y: Some(y),
                facing: Some(facing),
            },
            Actor::Unplaced => Self {
                x: None,
                y: None,
                facing: None,
            },
        }
    }
}
