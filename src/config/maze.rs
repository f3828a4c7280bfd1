use super::traits::ConfigSection;
use crate::error::MazeError;
use crate::maze::{self, MazeGrid};
use crate::types::Position;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub layout: usize,
    pub start_x: usize,
    pub start_y: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            layout: 1,
            start_x: 0,
            start_y: 7,
        }
    }
}

impl MazeConfig {
    pub fn start(&self) -> Position {
        Position::new(self.start_x, self.start_y)
    }

    pub fn grid(&self) -> Result<MazeGrid, MazeError> {
        maze::load_layout(self.layout)
    }
}

impl ConfigSection for MazeConfig {
    fn validate(&self) -> Result<(), MazeError> {
        let grid = self.grid()?;
        if !grid.is_passable(self.start_x as i64, self.start_y as i64) {
            return Err(MazeError::Configuration(format!(
                "Start cell ({}, {}) is blocked or outside the {}x{} maze",
                self.start_x,
                self.start_y,
                grid.width(),
                grid.height()
            )));
        }
        Ok(())
    }
}
