use crate::domain::model::Wall;
use crate::utils::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The board: fixed dimensions plus the set of wall cells.
///
/// Coordinates are 1-based. Every wall lies inside the board and no two
/// walls share a cell; both are checked on insertion and on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRecord", into = "GridRecord")]
pub struct Grid {
    width: i32,
    height: i32,
    walls: BTreeSet<Wall>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width < 1 || height < 1 {
            return Err(GameError::ValidationError {
                message: format!(
                    "Board dimensions must be positive, got {}x{}",
                    width, height
                ),
            });
        }

        Ok(Self {
            width,
            height,
            walls: BTreeSet::new(),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Walls ordered by `(x, y)`.
    pub fn walls(&self) -> impl Iterator<Item = &Wall> {
        self.walls.iter()
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        (1..=self.width).contains(&x) && (1..=self.height).contains(&y)
    }

    pub fn has_wall_at(&self, x: i32, y: i32) -> bool {
        self.walls.contains(&Wall::new(x, y))
    }

    pub fn is_valid_position(&self, x: i32, y: i32) -> bool {
        self.is_inside(x, y) && !self.has_wall_at(x, y)
    }

    pub fn add_wall(&mut self, x: i32, y: i32) -> Result<()> {
        if !self.is_inside(x, y) {
            return Err(GameError::OutOfBounds { x, y });
        }
        if !self.walls.insert(Wall::new(x, y)) {
            return Err(GameError::AlreadyExists { x, y });
        }
        Ok(())
    }

    pub fn clear_walls(&mut self) {
        self.walls.clear();
    }
}

#[derive(Serialize, Deserialize)]
struct GridRecord {
    width: i32,
    height: i32,
    #[serde(default)]
    walls: Vec<Wall>,
}

impl TryFrom<GridRecord> for Grid {
    type Error = GameError;

    fn try_from(record: GridRecord) -> Result<Self> {
        let mut grid = Grid::new(record.width, record.height)?;
        for wall in record.walls {
            grid.add_wall(wall.x, wall.y)?;
        }
        Ok(grid)
    }
}

impl From<Grid> for GridRecord {
    fn from(grid: Grid) -> Self {
        Self {
            width: grid.width,
            height: grid.height,
            walls: grid.walls.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Grid {
        Grid::new(5, 4).unwrap()
    }

    #[test]
    fn test_new_rejects_non_positive_dimensions() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(GameError::ValidationError { .. })
        ));
        assert!(Grid::new(5, -1).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_is_inside_edges() {
        let grid = board();
        assert!(grid.is_inside(1, 1));
        assert!(grid.is_inside(5, 4));
        assert!(!grid.is_inside(0, 1));
        assert!(!grid.is_inside(1, 0));
        assert!(!grid.is_inside(6, 4));
        assert!(!grid.is_inside(5, 5));
    }

    #[test]
    fn test_add_wall_on_every_free_cell() {
        let mut grid = board();
        for x in 1..=grid.width() {
            for y in 1..=grid.height() {
                assert!(!grid.has_wall_at(x, y));
                grid.add_wall(x, y).unwrap();
                assert!(grid.has_wall_at(x, y));
                assert!(!grid.is_valid_position(x, y));
            }
        }
        assert_eq!(grid.wall_count(), 20);
    }

    #[test]
    fn test_add_wall_twice_is_rejected() {
        let mut grid = board();
        grid.add_wall(2, 3).unwrap();

        let result = grid.add_wall(2, 3);

        assert!(matches!(result, Err(GameError::AlreadyExists { x: 2, y: 3 })));
        assert_eq!(grid.wall_count(), 1);
    }

    #[test]
    fn test_add_wall_out_of_bounds_leaves_walls_unchanged() {
        let mut grid = board();
        grid.add_wall(1, 1).unwrap();

        assert!(matches!(
            grid.add_wall(6, 1),
            Err(GameError::OutOfBounds { x: 6, y: 1 })
        ));
        assert!(matches!(
            grid.add_wall(0, 0),
            Err(GameError::OutOfBounds { .. })
        ));
        assert_eq!(grid.wall_count(), 1);
    }

    #[test]
    fn test_is_valid_position() {
        let mut grid = board();
        grid.add_wall(3, 3).unwrap();
        assert!(grid.is_valid_position(3, 2));
        assert!(!grid.is_valid_position(3, 3));
        assert!(!grid.is_valid_position(9, 9));
    }

    #[test]
    fn test_clear_walls_keeps_dimensions() {
        let mut grid = board();
        grid.add_wall(1, 2).unwrap();
        grid.add_wall(2, 1).unwrap();

        grid.clear_walls();

        assert_eq!(grid.wall_count(), 0);
        assert_eq!((grid.width(), grid.height()), (5, 4));
    }

    #[test]
    fn test_json_layout() {
        let mut grid = board();
        grid.add_wall(2, 1).unwrap();
        grid.add_wall(1, 3).unwrap();

        let value = serde_json::to_value(&grid).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "width": 5,
                "height": 4,
                "walls": [{"x": 1, "y": 3}, {"x": 2, "y": 1}]
            })
        );
        let restored: Grid = serde_json::from_value(value).unwrap();
        assert_eq!(restored, grid);
    }

    #[test]
    fn test_deserialize_rejects_wall_outside_board() {
        let json = r#"{"width": 3, "height": 3, "walls": [{"x": 4, "y": 1}]}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_duplicate_walls() {
        let json = r#"{"width": 3, "height": 3, "walls": [{"x": 1, "y": 1}, {"x": 1, "y": 1}]}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }

    #[test]
    fn test_deserialize_without_walls_field() {
        let grid: Grid = serde_json::from_str(r#"{"width": 2, "height": 7}"#).unwrap();
        assert_eq!(grid.height(), 7);
        assert_eq!(grid.wall_count(), 0);
    }
}
