use super::traits::ConfigSection;
use crate::error::MazeError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub gene_count: usize,
    pub tournament_size: usize,
    pub crossover_rate: f64,
    /// Applied per gene, so keep it small
    pub mutation_rate: f64,
    pub max_generations: usize,
    pub elitism_percent: usize,
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            gene_count: 50,
            tournament_size: 25,
            crossover_rate: 0.7,
            mutation_rate: 0.05,
            max_generations: 100,
            elitism_percent: 10,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Number of genomes carried over verbatim each generation
    pub fn elite_count(&self) -> usize {
        self.elitism_percent * self.population_size / 100
    }

    /// Commands decoded from each genome
    pub fn command_count(&self) -> usize {
        self.gene_count / 2
    }
}

impl ConfigSection for EvolutionConfig {
    fn validate(&self) -> Result<(), MazeError> {
        if self.population_size == 0 {
            return Err(MazeError::Configuration(
                "Population size must be positive".to_string(),
            ));
        }
        if self.population_size % 2 == 1 {
            return Err(MazeError::Configuration(format!(
                "Population size must be even, got {}",
                self.population_size
            )));
        }
        if self.gene_count == 0 || self.gene_count % 2 == 1 {
            return Err(MazeError::Configuration(format!(
                "Gene count must be a positive even number, got {}",
                self.gene_count
            )));
        }
        if self.tournament_size < 2 {
            return Err(MazeError::Configuration(
                "Tournament size (k) must be at least 2".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(MazeError::Configuration(
                "Crossover rate must be between 0 and 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(MazeError::Configuration(
                "Mutation rate must be between 0 and 1".to_string(),
            ));
        }
        if self.max_generations == 0 {
            return Err(MazeError::Configuration(
                "Max generations must be positive".to_string(),
            ));
        }
        if self.elitism_percent > 100 {
            return Err(MazeError::Configuration(
                "Elitism percent must be between 0 and 100".to_string(),
            ));
        }
        Ok(())
    }
}
