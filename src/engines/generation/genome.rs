use crate::error::{MazeError, Result};
use crate::types::Direction;
use rand::Rng;

/// Genome representation for the maze runners
///
/// A genome is a fixed-length sequence of genes, each `0` or `1`. Genes are
/// read pairwise from the left and every pair decodes to one movement
/// command:
///
/// | genes | command |
/// |-------|---------|
/// | `00`  | Up      |
/// | `01`  | Down    |
/// | `10`  | Left    |
/// | `11`  | Right   |
///
/// Crossover and mutation work on the flat gene sequence; only simulation
/// needs the decoded [`Direction`] list.
///
/// # Example
///
/// ```
/// use maze_evolver::engines::generation::genome::{decode, genome_from_str};
/// use maze_evolver::types::Direction;
///
/// let genome = genome_from_str("0011").unwrap();
/// assert_eq!(decode(&genome).unwrap(), vec![Direction::Up, Direction::Right]);
/// ```
pub type Genome = Vec<u8>;

/// Decodes a genome into its command sequence.
///
/// Fails with [`MazeError::Decode`] when a gene pair is not binary, which
/// only happens if a genome was built outside this module's helpers.
pub fn decode(genome: &[u8]) -> Result<Vec<Direction>> {
    genome
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| match pair {
            [0, 0] => Ok(Direction::Up),
            [0, 1] => Ok(Direction::Down),
            [1, 0] => Ok(Direction::Left),
            [1, 1] => Ok(Direction::Right),
            other => Err(MazeError::Decode {
                position: i * 2,
                code: other.iter().map(|g| g.to_string()).collect(),
            }),
        })
        .collect()
}

/// Raw tournament fitness: number of set genes.
pub fn popcount(genome: &[u8]) -> usize {
    genome.iter().filter(|&&gene| gene == 1).count()
}

/// Generate random genome
pub fn random_genome<R: Rng>(length: usize, rng: &mut R) -> Genome {
    (0..length).map(|_| rng.gen_range(0..=1u8)).collect()
}

pub fn genome_from_str(bits: &str) -> Result<Genome> {
    bits.chars()
        .enumerate()
        .map(|(i, c)| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            other => Err(MazeError::Decode {
                position: i,
                code: other.to_string(),
            }),
        })
        .collect()
}

pub fn genome_to_string(genome: &[u8]) -> String {
    genome
        .iter()
        .map(|&gene| if gene == 0 { '0' } else { '1' })
        .collect()
}
