use super::{evolution::EvolutionConfig, maze::MazeConfig, traits::ConfigSection};
use crate::error::MazeError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Environment variables overriding file values, e.g. `MAZE__EVOLUTION__SEED=7`
pub const ENV_PREFIX: &str = "MAZE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub maze: MazeConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), MazeError> {
        self.evolution.validate()?;
        self.maze.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), MazeError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| MazeError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| MazeError::Configuration(format!("Failed to parse config: {}", e)))?;

        self.replace(config)
    }

    /// Loads an optional TOML file, then applies `MAZE__*` environment overrides.
    pub fn load_layered<P: AsRef<Path>>(&self, path: Option<P>) -> Result<(), MazeError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path.as_ref()).required(false));
        }
        let config: AppConfig = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        self.replace(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), MazeError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| MazeError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        match self.config.read() {
            Ok(config) => config.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Applies `f` to a copy and only stores it when the result validates.
    pub fn update<F>(&self, f: F) -> Result<(), MazeError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.get();
        f(&mut config);
        self.replace(config)
    }

    fn replace(&self, config: AppConfig) -> Result<(), MazeError> {
        config.validate()?;
        match self.config.write() {
            Ok(mut current) => *current = config,
            Err(poisoned) => *poisoned.into_inner() = config,
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
