use serde::{Deserialize, Serialize};

/// Movement command, decoded from two genes.
///
/// The discriminant doubles as the 2-bit code (`00`, `01`, `10`, `11`) and
/// as an index for any per-direction lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Grid offset of one step, with y growing upwards.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Agent coordinates; `y = 0` is the bottom row of the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Logged the first time an agent reaches the objective column in a generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveRecord {
    pub generation: usize,
    pub genome: String,
    pub score: usize,
    pub steps: usize,
}

/// Per-generation report, overwritten at every generation boundary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub generation: usize,
    pub best_genome: String,
    pub best_score: i64,
    pub average_score: i64,
    pub mutated_gene_count: usize,
    pub mutated_individual_count: usize,
    /// Pairing rounds that copied both parents through without crossover
    pub passthrough_count: usize,
    pub crossover_count: usize,
    pub best_x_reached: usize,
    pub best_steps_ever_reached: usize,
    pub winners_total: usize,
}
