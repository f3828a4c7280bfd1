use super::agent::Agent;
use crate::engines::generation::genome::genome_to_string;
use crate::types::ObjectiveRecord;

/// Score added when an agent extends its best column.
///
/// Rewards both distance (`max_reached`) and speed (`cycles` since the last
/// improvement): `round(max_reached / cycles * 100)`.
pub fn score_delta(max_reached: usize, cycles: usize) -> i64 {
    (max_reached as f64 / cycles as f64 * 100.0).round() as i64
}

/// What one agent did during one cycle, as seen by the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleOutcome {
    pub x: usize,
    pub improved: bool,
    pub reached_objective: bool,
}

/// Updates the agent's own score after its move on `cycle` (1-based).
///
/// Touches nothing but `agent`, so agents can be scored in parallel.
pub fn score_agent(agent: &mut Agent, cycle: usize, objective_column: usize) -> CycleOutcome {
    let x = agent.position.x;
    let improved = x > agent.max_reached;

    if improved {
        agent.max_reached = x;
        agent.score += score_delta(agent.max_reached, cycle - agent.last_improve_cycle);
        agent.last_improve_cycle = cycle;
    }

    CycleOutcome {
        x,
        improved,
        reached_objective: improved && x == objective_column,
    }
}

/// Generation-wide view of agent progress
#[derive(Debug, Clone, Default)]
pub struct FitnessTracker {
    generation: usize,
    max_generation_position: usize,
}

impl FitnessTracker {
    pub fn new(generation: usize) -> Self {
        Self {
            generation,
            max_generation_position: 0,
        }
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Furthest column any agent has stood on this generation
    pub fn max_generation_position(&self) -> usize {
        self.max_generation_position
    }

    /// Folds one agent's outcome in, returning a record when it just
    /// reached the objective.
    pub fn observe(
        &mut self,
        outcome: CycleOutcome,
        genome: &[u8],
        cycle: usize,
    ) -> Option<ObjectiveRecord> {
        self.max_generation_position = self.max_generation_position.max(outcome.x);

        outcome.reached_objective.then(|| ObjectiveRecord {
            generation: self.generation,
            genome: genome_to_string(genome),
            score: outcome.x,
            steps: cycle,
        })
    }

    /// Starts tracking `generation` from scratch.
    pub fn reset(&mut self, generation: usize) {
        *self = Self::new(generation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    #[test]
    fn test_score_delta_rounds() {
        assert_eq!(score_delta(1, 1), 100);
        assert_eq!(score_delta(2, 3), 67);
        assert_eq!(score_delta(1, 8), 13);
        assert_eq!(score_delta(14, 1), 1400);
    }

    #[test]
    fn test_score_accumulates_only_on_improvement() {
        let mut agent = Agent::new(Position::new(0, 7));

        agent.position.x = 1;
        let outcome = score_agent(&mut agent, 1, 14);
        assert!(outcome.improved);
        assert_eq!(agent.score, 100);
        assert_eq!(agent.last_improve_cycle, 1);

        // Standing still or going back earns nothing
        agent.position.x = 0;
        assert!(!score_agent(&mut agent, 2, 14).improved);
        agent.position.x = 1;
        assert!(!score_agent(&mut agent, 3, 14).improved);
        assert_eq!(agent.score, 100);

        // Three cycles since the last gain: round(2 / 3 * 100)
        agent.position.x = 2;
        score_agent(&mut agent, 4, 14);
        assert_eq!(agent.score, 167);
        assert_eq!(agent.max_reached, 2);
    }

    #[test]
    fn test_objective_recorded_once() {
        let mut tracker = FitnessTracker::new(3);
        let mut agent = Agent::new(Position::new(3, 0));

        agent.position.x = 4;
        let outcome = score_agent(&mut agent, 1, 4);
        let record = tracker.observe(outcome, &[1, 1, 1, 1], 1);
        assert_eq!(
            record,
            Some(ObjectiveRecord {
                generation: 3,
                genome: "1111".to_string(),
                score: 4,
                steps: 1,
            })
        );

        // Still on the objective column: no duplicate
        let outcome = score_agent(&mut agent, 2, 4);
        assert!(tracker.observe(outcome, &[1, 1, 1, 1], 2).is_none());
        assert_eq!(tracker.max_generation_position(), 4);
    }

    #[test]
    fn test_reset_clears_generation_max() {
        let mut tracker = FitnessTracker::new(0);
        tracker.observe(
            CycleOutcome {
                x: 6,
                improved: false,
                reached_objective: false,
            },
            &[0, 0],
            1,
        );
        assert_eq!(tracker.max_generation_position(), 6);

        tracker.reset(1);
        assert_eq!(tracker.max_generation_position(), 0);
        assert_eq!(tracker.generation(), 1);
    }
}
