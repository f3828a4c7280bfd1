pub mod grid;
pub mod layouts;

pub use grid::MazeGrid;
pub use layouts::{layout_count, layout_name, load_layout};
