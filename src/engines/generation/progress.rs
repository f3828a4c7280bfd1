use super::evolution_engine::ProgressCallback;
use crate::types::{GenerationStats, ObjectiveRecord};
use std::sync::mpsc::Sender;

/// Reports progress through the `log` facade
pub struct LogProgressCallback;

impl ProgressCallback for LogProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::debug!("Generation {} starting...", generation + 1);
    }

    fn on_generation_complete(&mut self, stats: &GenerationStats) {
        log::info!(
            "Generation {}: mutated individuals {}, mutated genes {}, crossovers {} ({} passed)",
            stats.generation + 1,
            stats.mutated_individual_count,
            stats.mutated_gene_count,
            stats.crossover_count,
            stats.passthrough_count
        );
        log::info!(
            "  best {} fitness {} average {} max position {} winners {}",
            stats.best_genome,
            stats.best_score,
            stats.average_score,
            stats.best_x_reached + 1,
            stats.winners_total
        );
    }

    fn on_objective_reached(&mut self, record: &ObjectiveRecord) {
        log::debug!(
            "Objective reached by {} in {} steps",
            record.genome,
            record.steps
        );
    }
}

pub struct NoopProgressCallback;

impl ProgressCallback for NoopProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}
    fn on_generation_complete(&mut self, _stats: &GenerationStats) {}
    fn on_objective_reached(&mut self, _record: &ObjectiveRecord) {}
}

// For a front end running the engine on another thread
pub struct ChannelProgressCallback {
    sender: Sender<ProgressMessage>,
}

#[derive(Debug, Clone)]
pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete(GenerationStats),
    ObjectiveReached(ObjectiveRecord),
}

impl ChannelProgressCallback {
    pub fn new(sender: Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, stats: &GenerationStats) {
        let _ = self
            .sender
            .send(ProgressMessage::GenerationComplete(stats.clone()));
    }

    fn on_objective_reached(&mut self, record: &ObjectiveRecord) {
        let _ = self
            .sender
            .send(ProgressMessage::ObjectiveReached(record.clone()));
    }
}
