//! Hypergeometric significance for the delta estimator.
//!
//! The delta score is a count statistic, so its null model is sampling
//! without replacement: drawing the condition's significantly regulated
//! sites from the observed population and asking how surprising the number
//! landing inside one kinase's substrate set is.

use statrs::distribution::{Discrete, Hypergeometric};

use crate::error::EngineError;
use crate::observations::{FoldChanges, Significance};

/// Global counts shared by every kinase's hypergeometric test in one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Population {
    /// Number of observed phosphosites (`N`).
    pub observed: u64,
    /// Number of significantly regulated sites among the observed (`n`).
    pub regulated: u64,
}

impl Population {
    /// Count the population from the observation and significance vectors.
    ///
    /// Regulated sites are counted over the observed population, which
    /// keeps `regulated <= observed` by construction. An empty population
    /// invalidates every kinase's test, so it fails the whole call.
    pub fn from_observations(
        observations: &FoldChanges,
        significance: &Significance,
        cutoff: f64,
    ) -> Result<Self, EngineError> {
        let observed = observations.len() as u64;
        if observed == 0 {
            return Err(EngineError::EmptyPopulation);
        }
        let regulated = observations
            .sites()
            .filter(|site| significance.is_significant(site, cutoff))
            .count() as u64;
        Ok(Population {
            observed,
            regulated,
        })
    }
}

/// Point probability of finding exactly `significant` regulated sites in a
/// substrate set of `set_size` observed sites.
///
/// A kinase with zero significant substrates carries no evidence against
/// the null and is assigned p = 1 without consulting the distribution.
pub fn significant_count_test(population: Population, set_size: u64, significant: u64) -> f64 {
    if significant == 0 {
        return 1.0;
    }
    let dist = Hypergeometric::new(population.observed, set_size, population.regulated)
        .expect("substrate set and regulated count are bounded by the observed population");
    dist.pmf(significant)
}
