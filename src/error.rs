use thiserror::Error;

#[derive(Error, Debug)]
pub enum MazeError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Decode error: unexpected gene pair {code:?} at gene {position}")]
    Decode { position: usize, code: String },

    #[error("Maze layout {0} not found")]
    UnknownLayout(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config source error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, MazeError>;
