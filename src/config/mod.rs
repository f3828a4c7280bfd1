pub mod traits;
pub mod evolution;
pub mod maze;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::EvolutionConfig;
pub use maze::MazeConfig;
pub use traits::ConfigSection;
