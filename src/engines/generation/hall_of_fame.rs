use crate::types::ObjectiveRecord;

/// Every objective completion of the run, in the order they happened.
///
/// Records are only ever appended; the quickest-run queries scan the whole
/// log.
#[derive(Debug, Clone, Default)]
pub struct HallOfFame {
    records: Vec<ObjectiveRecord>,
    max_steps: usize,
}

impl HallOfFame {
    /// `max_steps` is the longest possible run, i.e. commands per genome.
    pub fn new(max_steps: usize) -> Self {
        Self {
            records: Vec::new(),
            max_steps,
        }
    }

    pub fn add(&mut self, record: ObjectiveRecord) {
        log::debug!(
            "objective reached in generation {} by {} after {} steps",
            record.generation,
            record.genome,
            record.steps
        );
        self.records.push(record);
    }

    pub fn get_all(&self) -> &[ObjectiveRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fewest steps any winner needed, capped at the genome's command count.
    pub fn quickest_steps(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.steps)
            .fold(self.max_steps, usize::min)
    }

    /// All records that tie for the quickest run
    pub fn best_performances(&self) -> Vec<&ObjectiveRecord> {
        let quickest = self.quickest_steps();
        self.records.iter().filter(|r| r.steps == quickest).collect()
    }

    /// First record to reach the objective in the quickest number of steps
    pub fn best_performer(&self) -> Option<&ObjectiveRecord> {
        let quickest = self.quickest_steps();
        self.records.iter().find(|r| r.steps == quickest)
    }

    pub fn winners_in_generation(&self, generation: usize) -> usize {
        self.records
            .iter()
            .filter(|r| r.generation == generation)
            .count()
    }
}
