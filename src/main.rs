use anyhow::Context;
use maze_evolver::config::ConfigManager;
use maze_evolver::engines::generation::{EvolutionEngine, LogProgressCallback};
use maze_evolver::maze::layout_name;
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional TOML file; MAZE__SECTION__KEY variables override it
    let config_path = env::args().nth(1);
    let manager = ConfigManager::new();
    manager
        .load_layered(config_path.as_deref())
        .with_context(|| match &config_path {
            Some(path) => format!("failed to load configuration from {}", path),
            None => "failed to load configuration from environment".to_string(),
        })?;
    let config = manager.get();

    log::info!(
        "Maze {} ({}), population {}, {} genes, {} generations",
        config.maze.layout,
        layout_name(config.maze.layout).unwrap_or("unknown"),
        config.evolution.population_size,
        config.evolution.gene_count,
        config.evolution.max_generations
    );

    let mut engine = EvolutionEngine::new(&config)?;
    let summary = engine.run(&mut LogProgressCallback)?;

    log::info!("Winners: {}", summary.winners.len());
    for (i, record) in summary.winners.iter().enumerate() {
        log::info!(
            "{}\tGen: {}\tIndividual: {}\tScore: {}\tSteps: {}",
            i + 1,
            record.generation,
            record.genome,
            record.score,
            record.steps
        );
    }

    match &summary.best_performer {
        Some(best) => log::info!(
            "Best individual: {} (generation {}, {} steps, best solution {})",
            best.genome,
            best.generation,
            best.steps,
            summary
                .best_known_solution
                .map(|steps| steps.to_string())
                .unwrap_or_else(|| "none".to_string())
        ),
        None => log::info!(
            "No winner. Maximum position reached: {} of {}",
            summary.best_steps_ever_reached,
            engine.grid().width()
        ),
    }

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
