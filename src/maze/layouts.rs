use super::grid::MazeGrid;
use crate::error::{MazeError, Result};

// Each layout is 15 columns by 10 rows, topmost row first. The top two rows
// sit under the statistics band and are always blocked.

const OPEN: [&str; 10] = [
    "555555555555555",
    "555555555555555",
    "000000000000000",
    "000000000000000",
    "000000000000000",
    "000000000000000",
    "000000000000000",
    "000000000000000",
    "000000000000000",
    "000000000000000",
];

const PILLARS: [&str; 10] = [
    "555555555555555",
    "555555555555555",
    "000100000100000",
    "000100100100100",
    "000100100000100",
    "000000100100100",
    "011100100100100",
    "000000100100000",
    "020000000122000",
    "000033000000000",
];

const SERPENTINE: [&str; 10] = [
    "555555555555555",
    "555555555555555",
    "000000000000001",
    "111111111111101",
    "000000000000001",
    "011111111111111",
    "000000000000000",
    "100010001000100",
    "000000000000000",
    "333333333333333",
];

const LABYRINTH: [&str; 10] = [
    "555555555555555",
    "555555555555555",
    "001000100000100",
    "101110101110101",
    "100010001010001",
    "111010111010111",
    "000010100010000",
    "012222101110110",
    "010000001000010",
    "000333300033000",
];

const LAYOUTS: [(&str, &[&str; 10]); 4] = [
    ("open", &OPEN),
    ("pillars", &PILLARS),
    ("serpentine", &SERPENTINE),
    ("labyrinth", &LABYRINTH),
];

pub fn layout_count() -> usize {
    LAYOUTS.len()
}

pub fn layout_name(index: usize) -> Option<&'static str> {
    LAYOUTS.get(index).map(|(name, _)| *name)
}

/// Builds the grid for one of the fixed layouts.
pub fn load_layout(index: usize) -> Result<MazeGrid> {
    let (_, rows) = LAYOUTS.get(index).ok_or(MazeError::UnknownLayout(index))?;
    MazeGrid::from_rows(&rows[..])
}
