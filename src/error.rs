//! Error types for the enrichment engine.

use std::fmt;

use crate::analysis::Estimator;

/// Error returned when a global statistic of an enrichment call is
/// undefined.
///
/// Per-kinase problems (a substrate set below the minimum size, an empty
/// significant subset, a vanishing weighted denominator) are filtering
/// decisions, not errors: the kinase is removed from the result table and
/// the batch continues. The variants here invalidate every kinase's
/// statistic at once, so the whole call fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineError {
    /// The observation vector has no finite values to derive baseline
    /// moments from.
    EmptyBaseline,

    /// The global standard deviation is zero, negative, or non-finite.
    ///
    /// A degenerate spread makes every z statistic undefined; this usually
    /// means the observation vector is constant or a caller-supplied
    /// baseline was mis-specified.
    DegenerateBaseline {
        /// Baseline mean that accompanied the bad spread.
        mean: f64,
        /// The offending standard deviation.
        sd: f64,
    },

    /// The hypergeometric population (observed phosphosites) is empty.
    EmptyPopulation,

    /// The selected estimator needs a significance vector but none was
    /// supplied.
    MissingSignificance {
        /// Estimator that was requested.
        estimator: Estimator,
    },

    /// A raw p-value outside `[0, 1]` reached the correction step.
    InvalidPValue {
        /// Position of the offending value in the raw p-value batch.
        index: usize,
        /// The offending value.
        p: f64,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBaseline => {
                write!(f, "observation vector is empty, cannot derive baseline moments")
            }
            Self::DegenerateBaseline { mean, sd } => write!(
                f,
                "baseline standard deviation must be positive and finite (mean {mean}, sd {sd})"
            ),
            Self::EmptyPopulation => {
                write!(f, "observed phosphosite population is empty")
            }
            Self::MissingSignificance { estimator } => {
                write!(f, "the {estimator} estimator requires a significance vector")
            }
            Self::InvalidPValue { index, p } => {
                write!(f, "raw p-value at index {index} is outside [0, 1]: {p}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        let err = EngineError::DegenerateBaseline { mean: 0.2, sd: 0.0 };
        assert!(err.to_string().contains("sd 0"));

        let err = EngineError::InvalidPValue { index: 3, p: 1.5 };
        assert!(err.to_string().contains("index 3"));
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn display_names_the_estimator() {
        let err = EngineError::MissingSignificance {
            estimator: Estimator::Delta,
        };
        assert!(err.to_string().contains("delta"));
    }
}
