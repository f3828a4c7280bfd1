pub mod agent;
pub mod fitness;

pub use agent::{step, Agent};
pub use fitness::{score_agent, score_delta, CycleOutcome, FitnessTracker};
