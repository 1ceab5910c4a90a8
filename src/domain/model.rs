use crate::utils::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Facing {
    North,
    South,
    East,
    West,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    pub fn as_str(&self) -> &'static str {
        match self {
            Facing::North => "NORTH",
            Facing::South => "SOUTH",
            Facing::East => "EAST",
            Facing::West => "WEST",
        }
    }

    /// Clockwise: NORTH -> EAST -> SOUTH -> WEST -> NORTH.
    pub fn right(self) -> Self {
        match self {
            Facing::North => Facing::East,
            Facing::East => Facing::South,
            Facing::South => Facing::West,
            Facing::West => Facing::North,
        }
    }

    pub fn left(self) -> Self {
        match self {
            Facing::North => Facing::West,
            Facing::West => Facing::South,
            Facing::South => Facing::East,
            Facing::East => Facing::North,
        }
    }

    /// Offset of one forward step. NORTH/SOUTH move along Y, EAST/WEST along X.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Facing::North => (0, 1),
            Facing::South => (0, -1),
            Facing::East => (1, 0),
            Facing::West => (-1, 0),
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match. Callers accepting user input uppercase first.
impl FromStr for Facing {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NORTH" => Ok(Facing::North),
            "SOUTH" => Ok(Facing::South),
            "EAST" => Ok(Facing::East),
            "WEST" => Ok(Facing::West),
            other => Err(GameError::InvalidDirection {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Wall {
    pub x: i32,
    pub y: i32,
}

impl Wall {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Snapshot of a placed actor, as returned by `report`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub x: i32,
    pub y: i32,
    pub facing: Facing,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.facing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!("NORTH".parse::<Facing>().unwrap(), Facing::North);
        assert_eq!("WEST".parse::<Facing>().unwrap(), Facing::West);
        assert!(matches!(
            "north".parse::<Facing>(),
            Err(GameError::InvalidDirection { .. })
        ));
        assert!("invalid".parse::<Facing>().is_err());
    }

    #[test]
    fn test_rotation_round_trips() {
        for facing in Facing::ALL {
            assert_eq!(facing.left().right(), facing);
            assert_eq!(facing.right().left(), facing);
            assert_eq!(facing.right().right().right().right(), facing);
            assert_eq!(facing.left().left().left().left(), facing);
        }
    }

    #[test]
    fn test_offsets() {
        assert_eq!(Facing::North.offset(), (0, 1));
        assert_eq!(Facing::South.offset(), (0, -1));
        assert_eq!(Facing::East.offset(), (1, 0));
        assert_eq!(Facing::West.offset(), (-1, 0));
    }

    #[test]
    fn test_facing_serializes_uppercase() {
        let json = serde_json::to_string(&Facing::East).unwrap();
        assert_eq!(json, "\"EAST\"");
    }

    #[test]
    fn test_report_display() {
        let report = Report {
            x: 3,
            y: 4,
            facing: Facing::South,
        };
        assert_eq!(report.to_string(), "3,4,SOUTH");
    }
}
