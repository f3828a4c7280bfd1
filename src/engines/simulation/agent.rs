use crate::maze::MazeGrid;
use crate::types::{Direction, Position};
use serde::{Deserialize, Serialize};

/// Moves one cell in `direction` when the target is inside the grid and
/// passable; otherwise the position is returned unchanged.
pub fn step(position: Position, direction: Direction, grid: &MazeGrid) -> Position {
    let (dx, dy) = direction.delta();
    let (x, y) = (position.x as i64 + dx, position.y as i64 + dy);

    if grid.is_passable(x, y) {
        Position::new(x as usize, y as usize)
    } else {
        position
    }
}

/// Per-genome simulation state for a single generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub position: Position,
    /// Last command applied; only read when drawing
    pub facing: Direction,
    pub score: i64,
    pub max_reached: usize,
    pub last_improve_cycle: usize,
}

impl Agent {
    pub fn new(start: Position) -> Self {
        Self {
            position: start,
            facing: Direction::Right,
            score: 0,
            max_reached: start.x,
            last_improve_cycle: 0,
        }
    }

    pub fn reset(&mut self, start: Position) {
        *self = Self::new(start);
    }

    pub fn apply(&mut self, direction: Direction, grid: &MazeGrid) {
        self.facing = direction;
        self.position = step(self.position, direction, grid);
    }
}
