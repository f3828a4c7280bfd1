use crate::error::{MazeError, Result};
use crate::types::{Direction, Position};
use std::collections::VecDeque;

const PASSABLE: u8 = 0;

/// Static obstacle map.
///
/// Rows are stored top-down as they are drawn, while agents count `y` from
/// the bottom row. Every lookup goes through [`MazeGrid::stored_row`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    cells: Vec<Vec<u8>>,
    width: usize,
    height: usize,
}

impl MazeGrid {
    pub fn new(cells: Vec<Vec<u8>>) -> Result<Self> {
        let height = cells.len();
        let width = cells.first().map(|row| row.len()).unwrap_or(0);

        if height == 0 || width == 0 {
            return Err(MazeError::Configuration(
                "Maze grid must have at least one cell".to_string(),
            ));
        }
        if let Some(row) = cells.iter().position(|row| row.len() != width) {
            return Err(MazeError::Configuration(format!(
                "Maze row {} has {} cells, expected {}",
                row,
                cells[row].len(),
                width
            )));
        }
        if let Some(code) = cells.iter().flatten().find(|&&code| code > 5) {
            return Err(MazeError::Configuration(format!(
                "Unknown maze cell code {}",
                code
            )));
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Parses rows of digit characters, topmost row first.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let cells = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| {
                        c.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                            MazeError::Configuration(format!("Invalid maze cell '{}'", c))
                        })
                    })
                    .collect::<Result<Vec<u8>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(cells)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Column index agents must reach to complete the maze
    pub fn objective_column(&self) -> usize {
        self.width - 1
    }

    /// Maps an agent `y` onto the stored row index.
    pub fn stored_row(&self, y: usize) -> usize {
        self.height - 1 - y
    }

    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Cell code at agent coordinates, `None` outside the grid.
    pub fn cell_at(&self, x: i64, y: i64) -> Option<u8> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some(self.cells[self.stored_row(y)][x])
    }

    pub fn is_passable(&self, x: i64, y: i64) -> bool {
        self.cell_at(x, y) == Some(PASSABLE)
    }

    /// Stored rows, topmost first
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.cells
    }

    /// Minimum number of moves from `start` to any cell of the objective
    /// column, or `None` when no path exists.
    pub fn shortest_path_len(&self, start: Position) -> Option<usize> {
        if !self.is_passable(start.x as i64, start.y as i64) {
            return None;
        }

        let mut distances = vec![vec![None; self.width]; self.height];
        let mut queue = VecDeque::new();
        distances[start.y][start.x] = Some(0usize);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let distance = distances[current.y][current.x]?;
            if current.x == self.objective_column() {
                return Some(distance);
            }

            for direction in Direction::ALL {
                let (dx, dy) = direction.delta();
                let (nx, ny) = (current.x as i64 + dx, current.y as i64 + dy);
                if !self.is_passable(nx, ny) {
                    continue;
                }
                let next = Position::new(nx as usize, ny as usize);
                if distances[next.y][next.x].is_none() {
                    distances[next.y][next.x] = Some(distance + 1);
                    queue.push_back(next);
                }
            }
        }

        None
    }
}
