use maze_evolver::config::{AppConfig, EvolutionConfig, MazeConfig};
use maze_evolver::engines::generation::evolution_engine::{
    EngineState, EvolutionEngine, ProgressCallback,
};
use maze_evolver::engines::generation::genome::{genome_from_str, Genome};
use maze_evolver::engines::generation::operators::select_elite;
use maze_evolver::engines::generation::progress::{
    ChannelProgressCallback, NoopProgressCallback, ProgressMessage,
};
use maze_evolver::maze::load_layout;
use maze_evolver::types::{GenerationStats, ObjectiveRecord, Position};
use maze_evolver::MazeError;
use std::sync::mpsc::channel;

/// Counts callback events for assertions
#[derive(Default)]
struct CountingCallback {
    started: usize,
    completed: Vec<GenerationStats>,
    objectives: usize,
}

impl ProgressCallback for CountingCallback {
    fn on_generation_start(&mut self, _generation: usize) {
        self.started += 1;
    }

    fn on_generation_complete(&mut self, stats: &GenerationStats) {
        self.completed.push(stats.clone());
    }

    fn on_objective_reached(&mut self, _record: &ObjectiveRecord) {
        self.objectives += 1;
    }
}

fn create_test_config(seed: u64) -> AppConfig {
    AppConfig {
        evolution: EvolutionConfig {
            population_size: 20,
            gene_count: 40,
            tournament_size: 3,
            crossover_rate: 0.7,
            mutation_rate: 0.05,
            max_generations: 5,
            elitism_percent: 20,
            seed: Some(seed),
        },
        maze: MazeConfig::default(),
    }
}

/// Population whose genomes only ever move right
fn runners(count: usize, gene_count: usize) -> Vec<Genome> {
    vec![genome_from_str(&"1".repeat(gene_count)).unwrap(); count]
}

#[test]
fn test_population_size_is_invariant() {
    let mut engine = EvolutionEngine::new(&create_test_config(7)).unwrap();
    let mut callback = NoopProgressCallback;

    assert_eq!(engine.population().len(), 20);
    while engine.state() != EngineState::Finished {
        engine.run_generation(&mut callback).unwrap();
        assert_eq!(engine.population().len(), 20);
        assert!(engine.population().iter().all(|g| g.len() == 40));
        assert_eq!(engine.agents().len(), 20);
    }
    assert_eq!(engine.generation(), 5);
}

#[test]
fn test_elite_survives_unchanged() {
    let mut config = create_test_config(11);
    config.evolution.mutation_rate = 0.5;
    config.evolution.crossover_rate = 1.0;
    let elite_count = config.evolution.elite_count();
    assert_eq!(elite_count, 4);

    let mut engine = EvolutionEngine::new(&config).unwrap();
    let mut callback = NoopProgressCallback;

    for _ in 0..3 {
        let before = engine.population().to_vec();
        engine.run_generation(&mut callback).unwrap();

        let elite = select_elite(&before, engine.population_scores(), elite_count);
        let mut remaining = engine.population().to_vec();
        for genome in &elite {
            let idx = remaining
                .iter()
                .position(|g| g == genome)
                .expect("elite genome missing from next generation");
            remaining.swap_remove(idx);
        }
    }
}

#[test]
fn test_runners_reach_objective_once_per_generation() {
    let config = EvolutionConfig {
        population_size: 4,
        gene_count: 40,
        tournament_size: 2,
        crossover_rate: 0.0,
        mutation_rate: 0.0,
        max_generations: 3,
        elitism_percent: 0,
        seed: Some(3),
    };
    let grid = load_layout(0).unwrap();
    let mut engine =
        EvolutionEngine::with_population(config, grid, Position::new(0, 7), runners(4, 40))
            .unwrap();
    let mut callback = CountingCallback::default();

    let summary = engine.run(&mut callback).unwrap();

    assert_eq!(callback.started, 3);
    assert_eq!(callback.completed.len(), 3);
    assert_eq!(callback.objectives, 12);
    assert_eq!(summary.winners.len(), 12);
    assert!(summary.winners.iter().all(|r| r.steps == 14 && r.score == 14));
    for generation in 0..3 {
        assert_eq!(engine.hall_of_fame().winners_in_generation(generation), 4);
    }

    let best = summary.best_performer.unwrap();
    assert_eq!(best.generation, 0);
    assert_eq!(Some(best.steps), summary.best_known_solution);

    // One column per cycle: 100 * (1 + 2 + ... + 14)
    let stats = &callback.completed[0];
    assert_eq!(stats.best_score, 10_500);
    assert_eq!(stats.average_score, 10_500);
    assert_eq!(stats.best_x_reached, 14);
    assert_eq!(stats.best_steps_ever_reached, 15);
    assert_eq!(stats.passthrough_count, 2);
    assert_eq!(stats.crossover_count, 0);
    assert_eq!(stats.mutated_gene_count, 0);
    assert_eq!(stats.winners_total, 4);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let run = |seed| {
        let mut engine = EvolutionEngine::new(&create_test_config(seed)).unwrap();
        let mut callback = CountingCallback::default();
        engine.run(&mut callback).unwrap();
        (callback.completed, engine.population().to_vec())
    };

    assert_eq!(run(42), run(42));
}

#[test]
fn test_channel_callback_reports_each_generation() {
    let (tx, rx) = channel();
    let mut callback = ChannelProgressCallback::new(tx);
    let mut engine = EvolutionEngine::new(&create_test_config(5)).unwrap();

    let summary = engine.run(&mut callback).unwrap();
    drop(callback);

    let messages: Vec<ProgressMessage> = rx.iter().collect();
    let starts = messages
        .iter()
        .filter(|m| matches!(m, ProgressMessage::GenerationStart(_)))
        .count();
    let completions: Vec<&GenerationStats> = messages
        .iter()
        .filter_map(|m| match m {
            ProgressMessage::GenerationComplete(stats) => Some(stats),
            _ => None,
        })
        .collect();

    assert_eq!(starts, 5);
    assert_eq!(completions.len(), 5);
    assert_eq!(
        completions.iter().map(|s| s.generation).collect::<Vec<_>>(),
        vec![0, 1, 2, 3, 4]
    );
    assert_eq!(summary.last_stats.as_ref(), completions.last().copied());
    assert_eq!(summary.generations, 5);
}

#[test]
fn test_best_steps_is_running_maximum() {
    let mut engine = EvolutionEngine::new(&create_test_config(9)).unwrap();
    let mut callback = CountingCallback::default();
    engine.run(&mut callback).unwrap();

    let mut running = 0;
    for stats in &callback.completed {
        running = running.max(stats.best_x_reached + 1);
        assert_eq!(stats.best_steps_ever_reached, running);
        assert!(stats.best_x_reached < 15);
        assert!(stats.passthrough_count + stats.crossover_count == 10);
    }
    assert_eq!(engine.best_steps_ever_reached(), running);
}

#[test]
fn test_invalid_configuration_aborts_before_running() {
    let mut config = create_test_config(1);
    config.evolution.population_size = 21;
    assert!(matches!(
        EvolutionEngine::new(&config),
        Err(MazeError::Configuration(_))
    ));

    let mut config = create_test_config(1);
    config.evolution.tournament_size = 1;
    assert!(EvolutionEngine::new(&config).is_err());

    let mut config = create_test_config(1);
    config.maze.layout = 17;
    assert!(matches!(
        EvolutionEngine::new(&config),
        Err(MazeError::UnknownLayout(17))
    ));
}
