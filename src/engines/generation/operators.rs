use crate::engines::generation::genome::{genome_to_string, popcount, Genome};
use rand::Rng;
use std::cmp::Ordering;

/// Index of the competitor with the highest popcount; ties keep the first seen.
pub fn tournament_winner(population: &[Genome], competitors: &[usize]) -> Option<usize> {
    let (&first, rest) = competitors.split_first()?;
    let mut best_idx = first;
    let mut best_fitness = popcount(&population[first]);

    for &idx in rest {
        let fitness = popcount(&population[idx]);
        if fitness > best_fitness {
            best_idx = idx;
            best_fitness = fitness;
        }
    }

    Some(best_idx)
}

/// Tournament selection: pick best of K random candidates, drawn with replacement
pub fn tournament_selection<R: Rng>(
    population: &[Genome],
    tournament_size: usize,
    rng: &mut R,
) -> Genome {
    let competitors: Vec<usize> = (0..tournament_size.max(1))
        .map(|_| rng.gen_range(0..population.len()))
        .collect();

    let winner = tournament_winner(population, &competitors).unwrap_or_default();
    log::trace!(
        "tournament {:?} won by {} ({} set genes)",
        competitors,
        winner,
        popcount(&population[winner])
    );
    population[winner].clone()
}

/// Runs one tournament per population slot.
pub fn select_parents<R: Rng>(
    population: &[Genome],
    tournament_size: usize,
    rng: &mut R,
) -> Vec<Genome> {
    (0..population.len())
        .map(|_| tournament_selection(population, tournament_size, rng))
        .collect()
}

/// Top `elite_count` genomes by simulated score, best first.
///
/// Equal scores are ordered by the genome's bit string, descending, so the
/// choice never depends on population order.
pub fn select_elite(population: &[Genome], scores: &[i64], elite_count: usize) -> Vec<Genome> {
    let mut ranked: Vec<(i64, String, &Genome)> = population
        .iter()
        .zip(scores)
        .map(|(genome, &score)| (score, genome_to_string(genome), genome))
        .collect();

    ranked.sort_by(|a, b| match b.0.cmp(&a.0) {
        Ordering::Equal => b.1.cmp(&a.1),
        other => other,
    });

    ranked
        .into_iter()
        .take(elite_count)
        .map(|(score, bits, genome)| {
            log::debug!("elite {} kept with score {}", bits, score);
            genome.clone()
        })
        .collect()
}

/// Single-point crossover at `point`: swap genome suffixes
pub fn crossover_at(parent1: &Genome, parent2: &Genome, point: usize) -> (Genome, Genome) {
    let mut child1 = parent1[..point].to_vec();
    child1.extend_from_slice(&parent2[point..]);

    let mut child2 = parent2[..point].to_vec();
    child2.extend_from_slice(&parent1[point..]);

    (child1, child2)
}

/// Single-point crossover with a cut drawn from `1..len`
pub fn crossover<R: Rng>(parent1: &Genome, parent2: &Genome, rng: &mut R) -> (Genome, Genome) {
    let len = parent1.len().min(parent2.len());
    if len <= 1 {
        return (parent1.clone(), parent2.clone());
    }

    let point = rng.gen_range(1..len);
    log::trace!("crossover cut point {}", point);
    crossover_at(parent1, parent2, point)
}

/// Builds the next generation from `parents`.
///
/// Each of `parents.len() / 2` rounds draws two parents at random (with
/// replacement). With probability `crossover_rate` they are recombined,
/// otherwise both are copied through. Returns the children and the number
/// of copied-through rounds.
pub fn breed<R: Rng>(
    parents: &[Genome],
    crossover_rate: f64,
    rng: &mut R,
) -> (Vec<Genome>, usize) {
    let mut next_generation = Vec::with_capacity(parents.len());
    let mut passthrough_count = 0;

    for _ in 0..parents.len() / 2 {
        let parent1 = &parents[rng.gen_range(0..parents.len())];
        let parent2 = &parents[rng.gen_range(0..parents.len())];

        if rng.gen::<f64>() < crossover_rate {
            let (child1, child2) = crossover(parent1, parent2, rng);
            next_generation.push(child1);
            next_generation.push(child2);
        } else {
            next_generation.push(parent1.clone());
            next_generation.push(parent2.clone());
            passthrough_count += 1;
        }
    }

    (next_generation, passthrough_count)
}

/// Mutation: flip each gene with probability `mutation_rate`. Returns the
/// number of flipped genes.
pub fn mutate<R: Rng>(genome: &mut Genome, mutation_rate: f64, rng: &mut R) -> usize {
    let mut flipped = 0;
    for gene in genome.iter_mut() {
        if rng.gen::<f64>() < mutation_rate {
            *gene ^= 1;
            flipped += 1;
        }
    }
    flipped
}

/// Mutates every genome in place, returning (genes flipped, individuals touched).
pub fn mutate_population<R: Rng>(
    population: &mut [Genome],
    mutation_rate: f64,
    rng: &mut R,
) -> (usize, usize) {
    population
        .iter_mut()
        .map(|genome| mutate(genome, mutation_rate, rng))
        .fold((0, 0), |(genes, individuals), flipped| {
            (genes + flipped, individuals + usize::from(flipped > 0))
        })
}

/// Swaps `elite.len()` randomly chosen members of `population` for the elite.
pub fn inject_elite<R: Rng>(population: &mut Vec<Genome>, elite: &[Genome], rng: &mut R) {
    for _ in 0..elite.len().min(population.len()) {
        let idx = rng.gen_range(0..population.len());
        let removed = population.swap_remove(idx);
        log::trace!("removed {} to make room for elite", genome_to_string(&removed));
    }
    population.extend(elite.iter().cloned());
}
