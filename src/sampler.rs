//! Unique sampling without replacement.
//!
//! Draws distinct ids from a population `[1, P]`. Two strategies are
//! available:
//!
//! - [`SamplerStrategy::Rejection`]: draw uniformly and discard ids already
//!   chosen. Bounded by [`MAX_REJECTIONS`], after which the draw falls back
//!   to picking directly among the ids that remain.
//! - [`SamplerStrategy::Shuffle`]: a partial shuffle over the index space,
//!   which never rejects.

use ahash::AHashSet;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rejected draws allowed per call before falling back to the complement.
pub const MAX_REJECTIONS: usize = 64;

/// How distinct ids are drawn from a population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplerStrategy {
    /// Rejection sampling against a per-draw accumulator (default)
    #[default]
    Rejection,
    /// Partial Fisher-Yates / Floyd sampling of the index space
    Shuffle,
}

impl std::str::FromStr for SamplerStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rejection" | "reject" => Ok(SamplerStrategy::Rejection),
            "shuffle" | "floyd" => Ok(SamplerStrategy::Shuffle),
            _ => Err(format!(
                "Unknown sampler strategy: {}. Valid options: rejection, shuffle",
                s
            )),
        }
    }
}

impl fmt::Display for SamplerStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplerStrategy::Rejection => write!(f, "rejection"),
            SamplerStrategy::Shuffle => write!(f, "shuffle"),
        }
    }
}

/// Precondition failures reported by the sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    /// More distinct values were requested than the population holds
    CountExceedsPopulation { count: usize, population: i64 },
    /// Every id in the population has already been chosen
    PopulationExhausted { population: i64 },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::CountExceedsPopulation { count, population } => write!(
                f,
                "cannot draw {} distinct ids from a population of {}",
                count, population
            ),
            SampleError::PopulationExhausted { population } => write!(
                f,
                "all {} ids in the population have already been chosen",
                population
            ),
        }
    }
}

impl std::error::Error for SampleError {}

/// Draw one id from `[1, population]` that is not yet in `chosen`, and record it.
///
/// The returned id is uniform over the ids not already in `chosen`.
pub fn sample_unique<R: Rng + ?Sized>(
    rng: &mut R,
    population: i64,
    chosen: &mut AHashSet<i64>,
) -> Result<i64, SampleError> {
    if population <= 0 || chosen.len() as i64 >= population {
        return Err(SampleError::PopulationExhausted { population });
    }

    for _ in 0..MAX_REJECTIONS {
        let candidate = rng.random_range(1..=population);
        if chosen.insert(candidate) {
            return Ok(candidate);
        }
    }

    // Dense accumulator: pick directly among what is left.
    let remaining: Vec<i64> = (1..=population).filter(|id| !chosen.contains(id)).collect();
    if remaining.is_empty() {
        return Err(SampleError::PopulationExhausted { population });
    }
    let id = remaining[rng.random_range(0..remaining.len())];
    chosen.insert(id);
    Ok(id)
}

/// Draw `count` distinct ids from `[1, population]`, in draw order.
pub fn draw_distinct<R: Rng + ?Sized>(
    rng: &mut R,
    population: i64,
    count: usize,
    strategy: SamplerStrategy,
) -> Result<Vec<i64>, SampleError> {
    if population < 0 || count as i64 > population {
        return Err(SampleError::CountExceedsPopulation { count, population });
    }

    match strategy {
        SamplerStrategy::Rejection => {
            let mut chosen = AHashSet::with_capacity(count);
            let mut ids = Vec::with_capacity(count);
            for _ in 0..count {
                ids.push(sample_unique(rng, population, &mut chosen)?);
            }
            Ok(ids)
        }
        SamplerStrategy::Shuffle => Ok(rand::seq::index::sample(rng, population as usize, count)
            .into_iter()
            .map(|index| index as i64 + 1)
            .collect()),
    }
}
