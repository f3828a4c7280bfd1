use crate::config::{AppConfig, ConfigSection, EvolutionConfig};
use crate::engines::generation::{
    genome::{decode, genome_to_string, random_genome, Genome},
    hall_of_fame::HallOfFame,
    operators::{breed, inject_elite, mutate_population, select_elite, select_parents},
};
use crate::engines::simulation::{score_agent, Agent, CycleOutcome, FitnessTracker};
use crate::error::{MazeError, Result};
use crate::maze::MazeGrid;
use crate::types::{Direction, GenerationStats, ObjectiveRecord, Position};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;

/// Where the orchestrator is within the current generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// A tick executes command `cycle` for every agent, decoding the
    /// population first when `cycle` is 0
    Simulating { cycle: usize },
    /// A tick snapshots the agents' final scores into the generation stats
    Evaluating,
    /// A tick breeds the next population and resets the agents
    NextGeneration,
    /// Ticks are no-ops
    Finished,
}

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, stats: &GenerationStats);
    fn on_objective_reached(&mut self, record: &ObjectiveRecord);
}

/// End-of-run report
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub generations: usize,
    pub winners: Vec<ObjectiveRecord>,
    pub best_performer: Option<ObjectiveRecord>,
    pub best_steps_ever_reached: usize,
    pub best_known_solution: Option<usize>,
    pub last_stats: Option<GenerationStats>,
}

pub struct EvolutionEngine {
    config: EvolutionConfig,
    grid: MazeGrid,
    start: Position,
    population: Vec<Genome>,
    population_score: Vec<i64>,
    commands: Vec<Vec<Direction>>,
    agents: Vec<Agent>,
    tracker: FitnessTracker,
    hall_of_fame: HallOfFame,
    state: EngineState,
    generation: usize,
    pending_stats: Option<GenerationStats>,
    last_stats: Option<GenerationStats>,
    best_steps_ever_reached: usize,
    rng: StdRng,
}

impl EvolutionEngine {
    /// Validates `config` and seeds a random initial population.
    pub fn new(config: &AppConfig) -> Result<Self> {
        config.validate()?;
        let grid = config.maze.grid()?;
        let mut rng = Self::make_rng(config.evolution.seed);

        let population = (0..config.evolution.population_size)
            .map(|_| random_genome(config.evolution.gene_count, &mut rng))
            .collect();

        Self::assemble(config.evolution.clone(), grid, config.maze.start(), population, rng)
    }

    /// Starts from a caller-supplied grid and population.
    pub fn with_population(
        config: EvolutionConfig,
        grid: MazeGrid,
        start: Position,
        population: Vec<Genome>,
    ) -> Result<Self> {
        config.validate()?;
        if !grid.is_passable(start.x as i64, start.y as i64) {
            return Err(MazeError::Configuration(format!(
                "Start cell ({}, {}) is not open",
                start.x, start.y
            )));
        }
        if population.len() != config.population_size {
            return Err(MazeError::Configuration(format!(
                "Population has {} genomes, expected {}",
                population.len(),
                config.population_size
            )));
        }
        if let Some(genome) = population.iter().find(|g| g.len() != config.gene_count) {
            return Err(MazeError::Configuration(format!(
                "Genome {} has {} genes, expected {}",
                genome_to_string(genome),
                genome.len(),
                config.gene_count
            )));
        }

        let rng = Self::make_rng(config.seed);
        Self::assemble(config, grid, start, population, rng)
    }

    fn make_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn assemble(
        config: EvolutionConfig,
        grid: MazeGrid,
        start: Position,
        population: Vec<Genome>,
        rng: StdRng,
    ) -> Result<Self> {
        let agents = vec![Agent::new(start); population.len()];
        let hall_of_fame = HallOfFame::new(config.command_count());

        Ok(Self {
            config,
            grid,
            start,
            population,
            population_score: Vec::new(),
            commands: Vec::new(),
            agents,
            tracker: FitnessTracker::new(0),
            hall_of_fame,
            state: EngineState::Simulating { cycle: 0 },
            generation: 0,
            pending_stats: None,
            last_stats: None,
            best_steps_ever_reached: 0,
            rng,
        })
    }

    /// Advances by one cycle, or by one state transition between cycles.
    pub fn tick<C: ProgressCallback>(&mut self, callback: &mut C) -> Result<EngineState> {
        let state = self.state;
        self.state = match state {
            EngineState::Simulating { cycle } => {
                if cycle == 0 && self.commands.is_empty() {
                    self.commands = self
                        .population
                        .iter()
                        .map(|genome| decode(genome))
                        .collect::<Result<Vec<_>>>()?;
                    callback.on_generation_start(self.generation);
                }

                if cycle < self.config.command_count() {
                    for record in self.simulate_cycle(cycle) {
                        callback.on_objective_reached(&record);
                        self.hall_of_fame.add(record);
                    }
                    EngineState::Simulating { cycle: cycle + 1 }
                } else {
                    EngineState::Evaluating
                }
            }
            EngineState::Evaluating => {
                self.pending_stats = Some(self.evaluate());
                EngineState::NextGeneration
            }
            EngineState::NextGeneration => {
                let stats = self.next_generation();
                callback.on_generation_complete(&stats);
                self.last_stats = Some(stats);

                if self.generation >= self.config.max_generations {
                    log::info!("Simulation ended after {} generations", self.generation);
                    EngineState::Finished
                } else {
                    EngineState::Simulating { cycle: 0 }
                }
            }
            EngineState::Finished => EngineState::Finished,
        };

        Ok(self.state)
    }

    /// Fast-forwards through the rest of the current generation.
    ///
    /// Returns that generation's stats, or `None` once the run has finished.
    pub fn run_generation<C: ProgressCallback>(
        &mut self,
        callback: &mut C,
    ) -> Result<Option<GenerationStats>> {
        if self.state == EngineState::Finished {
            return Ok(None);
        }

        let generation = self.generation;
        while self.generation == generation && self.state != EngineState::Finished {
            self.tick(callback)?;
        }
        Ok(self.last_stats.clone())
    }

    /// Runs every remaining generation.
    pub fn run<C: ProgressCallback>(&mut self, callback: &mut C) -> Result<RunSummary> {
        while self.state != EngineState::Finished {
            self.run_generation(callback)?;
        }

        if self.hall_of_fame.is_empty() {
            log::warn!("No genome reached the objective in {} generations", self.generation);
        }
        Ok(self.summary())
    }

    /// Executes command `index` for every agent. Agents are moved and scored
    /// in parallel; their outcomes are folded in population order.
    fn simulate_cycle(&mut self, index: usize) -> Vec<ObjectiveRecord> {
        let cycle = index + 1;
        let grid = &self.grid;
        let objective_column = grid.objective_column();

        let outcomes: Vec<Option<CycleOutcome>> = self
            .agents
            .par_iter_mut()
            .zip(self.commands.par_iter())
            .map(|(agent, commands)| {
                commands.get(index).map(|&direction| {
                    agent.apply(direction, grid);
                    score_agent(agent, cycle, objective_column)
                })
            })
            .collect();

        log::trace!("generation {} cycle {}", self.generation, cycle);

        let tracker = &mut self.tracker;
        outcomes
            .into_iter()
            .zip(&self.population)
            .filter_map(|(outcome, genome)| {
                outcome.and_then(|outcome| tracker.observe(outcome, genome, cycle))
            })
            .collect()
    }

    fn evaluate(&mut self) -> GenerationStats {
        self.population_score = self.agents.iter().map(|agent| agent.score).collect();

        let mut best_idx = 0;
        for (idx, &score) in self.population_score.iter().enumerate() {
            if score > self.population_score[best_idx] {
                best_idx = idx;
            }
        }

        let total: i64 = self.population_score.iter().sum();
        let average_score = total / self.population_score.len().max(1) as i64;

        let best_x_reached = self.tracker.max_generation_position();
        self.best_steps_ever_reached = self.best_steps_ever_reached.max(best_x_reached + 1);

        GenerationStats {
            generation: self.generation,
            best_genome: genome_to_string(&self.population[best_idx]),
            best_score: self.population_score[best_idx],
            average_score,
            best_x_reached,
            best_steps_ever_reached: self.best_steps_ever_reached,
            winners_total: self.hall_of_fame.len(),
            ..Default::default()
        }
    }

    /// Selection, elitism, crossover, mutation and replacement, then a fresh
    /// set of agents for the next generation.
    fn next_generation(&mut self) -> GenerationStats {
        let elite_count = self.config.elite_count();

        let parents = select_parents(
            &self.population,
            self.config.tournament_size,
            &mut self.rng,
        );
        let elite = select_elite(&self.population, &self.population_score, elite_count);

        let (mut next, passthrough_count) =
            breed(&parents, self.config.crossover_rate, &mut self.rng);
        let (mutated_gene_count, mutated_individual_count) =
            mutate_population(&mut next, self.config.mutation_rate, &mut self.rng);
        inject_elite(&mut next, &elite, &mut self.rng);
        debug_assert_eq!(next.len(), self.config.population_size);

        self.population = next;
        for agent in &mut self.agents {
            agent.reset(self.start);
        }
        self.commands.clear();

        let mut stats = self.pending_stats.take().unwrap_or_default();
        stats.passthrough_count = passthrough_count;
        stats.crossover_count = self.config.population_size / 2 - passthrough_count;
        stats.mutated_gene_count = mutated_gene_count;
        stats.mutated_individual_count = mutated_individual_count;

        self.generation += 1;
        self.tracker.reset(self.generation);
        stats
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            generations: self.generation,
            winners: self.hall_of_fame.get_all().to_vec(),
            best_performer: self.hall_of_fame.best_performer().cloned(),
            best_steps_ever_reached: self.best_steps_ever_reached,
            best_known_solution: self.best_known_solution(),
            last_stats: self.last_stats.clone(),
        }
    }

    /// Fewest moves that reach the objective column from the start cell
    pub fn best_known_solution(&self) -> Option<usize> {
        self.grid.shortest_path_len(self.start)
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Cycles executed so far in the current generation
    pub fn cycle(&self) -> usize {
        match self.state {
            EngineState::Simulating { cycle } => cycle,
            EngineState::Evaluating | EngineState::NextGeneration => self.config.command_count(),
            EngineState::Finished => 0,
        }
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn population(&self) -> &[Genome] {
        &self.population
    }

    /// Final scores of the last evaluated generation, by population index
    pub fn population_scores(&self) -> &[i64] {
        &self.population_score
    }

    /// Live agent state, paired with `population()` by index
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn max_generation_position(&self) -> usize {
        self.tracker.max_generation_position()
    }

    pub fn hall_of_fame(&self) -> &HallOfFame {
        &self.hall_of_fame
    }

    pub fn last_stats(&self) -> Option<&GenerationStats> {
        self.last_stats.as_ref()
    }

    pub fn best_steps_ever_reached(&self) -> usize {
        self.best_steps_ever_reached
    }
}
