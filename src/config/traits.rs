use crate::error::MazeError;
use serde::{Deserialize, Serialize};

/// A `[section]` of the run configuration that checks its own values
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn validate(&self) -> Result<(), MazeError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EvolutionConfig, MazeConfig};

    fn default_validates<S: ConfigSection>() -> bool {
        S::default().validate().is_ok()
    }

    #[test]
    fn test_every_section_default_is_valid() {
        assert!(default_validates::<EvolutionConfig>());
        assert!(default_validates::<MazeConfig>());
    }

    #[test]
    fn test_section_survives_toml_round_trip() {
        let config = EvolutionConfig {
            population_size: 12,
            seed: Some(3),
            ..Default::default()
        };
        let text = toml::to_string(&config).unwrap();
        let parsed: EvolutionConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
        assert!(parsed.validate().is_ok());
    }
}
