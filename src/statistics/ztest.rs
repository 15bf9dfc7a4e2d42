//! Z-statistic significance for the mean-family estimators.
//!
//! A kinase's substrate-set location is compared against the global moments
//! of the condition: under the null hypothesis that the substrate set is an
//! exchangeable sample from the full observation vector, the set mean is
//! approximately normal with mean `mP` and standard deviation
//! `delta / sqrt(n)`.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::EngineError;
use crate::observations::FoldChanges;

/// Global moments the z statistic is measured against.
///
/// Either supplied by the caller (e.g. moments of a larger reference
/// compendium) or derived from the observation vector of the current call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    /// Mean fold-change of the full data set (`mP`).
    pub mean: f64,
    /// Standard deviation of the full data set (`delta`).
    pub sd: f64,
}

impl Baseline {
    /// Validate that the moments can back a z statistic.
    ///
    /// A zero, negative, or non-finite spread invalidates every kinase's
    /// statistic at once, so it is a call-level error rather than a
    /// per-kinase filter.
    pub fn validated(self) -> Result<Self, EngineError> {
        if self.mean.is_finite() && self.sd.is_finite() && self.sd > 0.0 {
            Ok(self)
        } else {
            Err(EngineError::DegenerateBaseline {
                mean: self.mean,
                sd: self.sd,
            })
        }
    }

    /// Derive the moments from the observation vector: arithmetic mean and
    /// population standard deviation over all observed sites.
    pub fn from_observations(observations: &FoldChanges) -> Result<Self, EngineError> {
        let n = observations.len();
        if n == 0 {
            return Err(EngineError::EmptyBaseline);
        }
        let n = n as f64;
        let mean = observations.fold_changes().sum::<f64>() / n;
        let variance = observations
            .fold_changes()
            .map(|v| (v - mean) * (v - mean))
            .sum::<f64>()
            / n;
        Baseline {
            mean,
            sd: variance.sqrt(),
        }
        .validated()
    }
}

/// One-sided upper-tail probability of the magnitude z statistic.
///
/// `z = |(score - mean) * sqrt(n) / sd|` and `p = P(Z >= z)` under the
/// standard normal distribution. Taking the magnitude makes this a
/// two-sided test of displacement expressed as a single tail lookup.
///
/// `sample_size` is the substrate-set size, or the summed absolute weight
/// for the weighted-mean estimator. The baseline must have been validated.
pub fn z_test(score: f64, sample_size: f64, baseline: Baseline) -> f64 {
    let z = ((score - baseline.mean) * sample_size.sqrt() / baseline.sd).abs();
    Normal::standard().sf(z)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn moments_from_observations() {
        let fc: FoldChanges = [("A_S1", 1.0), ("B_S2", 2.0), ("C_S3", 3.0)]
            .into_iter()
            .collect();
        let baseline = Baseline::from_observations(&fc).unwrap();
        assert_relative_eq!(baseline.mean, 2.0);
        // population standard deviation, not the sample estimator
        assert_relative_eq!(baseline.sd, (2.0f64 / 3.0).sqrt());
    }

    #[test]
    fn empty_observations_are_rejected() {
        let fc = FoldChanges::new();
        assert_eq!(
            Baseline::from_observations(&fc),
            Err(EngineError::EmptyBaseline)
        );
    }

    #[test]
    fn constant_observations_have_degenerate_spread() {
        let fc: FoldChanges = [("A_S1", 1.0), ("B_S2", 1.0)].into_iter().collect();
        assert!(matches!(
            Baseline::from_observations(&fc),
            Err(EngineError::DegenerateBaseline { .. })
        ));
    }

    #[test]
    fn validation_rejects_bad_spreads() {
        assert!(Baseline { mean: 0.0, sd: 0.0 }.validated().is_err());
        assert!(Baseline { mean: 0.0, sd: -1.0 }.validated().is_err());
        assert!(Baseline {
            mean: f64::NAN,
            sd: 1.0
        }
        .validated()
        .is_err());
        assert!(Baseline { mean: 0.0, sd: 1.0 }.validated().is_ok());
    }

    #[test]
    fn zero_displacement_gives_half() {
        let baseline = Baseline { mean: 0.0, sd: 1.0 };
        assert_relative_eq!(z_test(0.0, 9.0, baseline), 0.5);
    }

    #[test]
    fn displacement_is_symmetric() {
        let baseline = Baseline { mean: 0.0, sd: 1.0 };
        let up = z_test(1.5, 4.0, baseline);
        let down = z_test(-1.5, 4.0, baseline);
        assert_relative_eq!(up, down);
        assert!(up < 0.01);
    }
}
