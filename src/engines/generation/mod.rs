pub mod genome;
pub mod operators;
pub mod hall_of_fame;
pub mod evolution_engine;
pub mod progress;

pub use genome::Genome;
pub use hall_of_fame::HallOfFame;
pub use evolution_engine::{EngineState, EvolutionEngine, ProgressCallback, RunSummary};
pub use progress::{
    ChannelProgressCallback, LogProgressCallback, NoopProgressCallback, ProgressMessage,
};
