//! Score estimator policies.
//!
//! Each policy turns one kinase's qualifying substrate set into a raw
//! activity score plus the effective sample size its significance test
//! needs:
//!
//! 1. **Mean/median**: location of the substrate fold-changes
//! 2. **Significant mean**: the same, restricted to significantly
//!    regulated substrates
//! 3. **Delta**: net count of significantly up- vs down-regulated
//!    substrates
//! 4. **Weighted mean**: fold-changes weighted by the signed interaction
//!    scores
//!
//! A policy returning `None` for a kinase means the score is undefined for
//! that kinase (e.g. no significant substrates); the kinase is silently
//! dropped from the result table.

mod delta;
mod location;
mod weighted;

use std::fmt;

pub(crate) use delta::delta_score;
pub(crate) use location::{location_score, significant_location_score};
pub(crate) use weighted::weighted_score;

/// Estimator policy selectable per enrichment call.
///
/// Pairs a scoring rule with the significance regime its scores are tested
/// under (see [`Estimator::regime`]); the intersection and correction
/// machinery is policy agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Estimator {
    /// Mean (or median) fold-change of the substrate set.
    Mean,
    /// Mean (or median) fold-change over the significantly regulated
    /// substrates only. Requires a significance vector.
    SignificantMean,
    /// Count of significantly up-regulated minus significantly
    /// down-regulated substrates. Requires a significance vector.
    Delta,
    /// Interaction-weighted mean fold-change, for graphs with continuous
    /// prediction scores.
    WeightedMean,
}

impl Estimator {
    /// The significance regime the policy's scores are tested under.
    pub fn regime(self) -> Regime {
        match self {
            Self::Mean | Self::SignificantMean | Self::WeightedMean => Regime::ZTest,
            Self::Delta => Regime::Hypergeometric,
        }
    }

    /// Whether the policy needs a site-level significance vector.
    pub fn requires_significance(self) -> bool {
        matches!(self, Self::SignificantMean | Self::Delta)
    }
}

impl fmt::Display for Estimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mean => "mean",
            Self::SignificantMean => "significant mean",
            Self::Delta => "delta",
            Self::WeightedMean => "weighted mean",
        };
        f.write_str(name)
    }
}

/// Significance regime a score is evaluated under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Z statistic against the global data moments, for location-style
    /// scores.
    ZTest,
    /// Hypergeometric point probability, for the delta count score.
    Hypergeometric,
}

/// Raw per-kinase estimate before significance testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RawScore {
    /// The activity score; meaning depends on the estimator.
    pub score: f64,
    /// Effective sample size entering the z statistic: set size for the
    /// location policies, summed absolute weight for the weighted mean.
    pub sample_size: f64,
    /// Number of substrate sites the estimate is based on.
    pub substrate_count: usize,
    /// Substrates above the significance cutoff (delta policy only; zero
    /// elsewhere).
    pub significant_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regimes_pair_with_their_estimators() {
        assert_eq!(Estimator::Mean.regime(), Regime::ZTest);
        assert_eq!(Estimator::SignificantMean.regime(), Regime::ZTest);
        assert_eq!(Estimator::WeightedMean.regime(), Regime::ZTest);
        assert_eq!(Estimator::Delta.regime(), Regime::Hypergeometric);
    }

    #[test]
    fn significance_requirements() {
        assert!(!Estimator::Mean.requires_significance());
        assert!(!Estimator::WeightedMean.requires_significance());
        assert!(Estimator::SignificantMean.requires_significance());
        assert!(Estimator::Delta.requires_significance());
    }
}
