pub mod config;
pub mod engines;
pub mod error;
pub mod maze;
pub mod types;

pub use error::{MazeError, Result};
