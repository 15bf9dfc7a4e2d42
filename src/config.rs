//! Configuration for enrichment calls.

use crate::constants::{FDR_ALPHA, MIN_SET_SIZE, SIGNIFICANCE_CUTOFF};
use crate::statistics::Baseline;
use crate::types::Location;

/// Options shared by all estimator entry points.
///
/// The defaults reproduce the conventional analysis: at least five observed
/// substrates per kinase, a site-significance cutoff of p = 0.05 on the
/// `-log10` scale, baseline moments derived from the data, and an FDR level
/// of 0.05 for flagging.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Minimum number of observed substrate sites a kinase needs to be
    /// scored (inclusive). Raising it trades coverage for stability: fewer
    /// kinases are reported, each backed by more sites.
    pub minimum_set_size: usize,

    /// Cutoff on `-log10` transformed site p-values above which a site
    /// counts as significantly regulated. Used by the delta and
    /// significant-mean estimators.
    pub significance_cutoff: f64,

    /// False-discovery-rate level for the per-kinase `significant` flag.
    pub fdr_alpha: f64,

    /// Global moments for the z statistic. When absent they are computed
    /// from the observation vector of the call, which is the right choice
    /// unless scores should be comparable across conditions.
    pub baseline: Option<Baseline>,

    /// Location statistic for the mean-family estimators.
    pub location: Location,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            minimum_set_size: MIN_SET_SIZE,
            significance_cutoff: SIGNIFICANCE_CUTOFF,
            fdr_alpha: FDR_ALPHA,
            baseline: None,
            location: Location::Mean,
        }
    }
}

impl Config {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Exploratory preset: smaller substrate sets are admitted, so more
    /// kinases are reported at lower per-kinase confidence.
    pub fn exploratory() -> Self {
        Self {
            minimum_set_size: 3,
            ..Default::default()
        }
    }

    /// Stringent preset: larger substrate sets, a site cutoff of p = 0.01,
    /// and an FDR level of 0.01.
    pub fn stringent() -> Self {
        Self {
            minimum_set_size: 10,
            significance_cutoff: 2.0,
            fdr_alpha: 0.01,
            ..Default::default()
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the minimum substrate-set size.
    pub fn minimum_set_size(mut self, size: usize) -> Self {
        assert!(size >= 1, "minimum_set_size must be at least 1");
        self.minimum_set_size = size;
        self
    }

    /// Set the site-significance cutoff (`-log10` scale).
    pub fn significance_cutoff(mut self, cutoff: f64) -> Self {
        assert!(
            cutoff.is_finite() && cutoff >= 0.0,
            "significance_cutoff must be finite and non-negative"
        );
        self.significance_cutoff = cutoff;
        self
    }

    /// Set the FDR level for the `significant` flag.
    pub fn fdr_alpha(mut self, alpha: f64) -> Self {
        assert!(alpha > 0.0 && alpha < 1.0, "fdr_alpha must be in (0, 1)");
        self.fdr_alpha = alpha;
        self
    }

    /// Supply the global baseline moments instead of deriving them from the
    /// observation vector.
    pub fn baseline(mut self, mean: f64, sd: f64) -> Self {
        assert!(
            mean.is_finite() && sd.is_finite() && sd > 0.0,
            "baseline requires a finite mean and a positive finite sd"
        );
        self.baseline = Some(Baseline { mean, sd });
        self
    }

    /// Set the location statistic for the mean-family estimators.
    pub fn location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Use the median instead of the mean for the mean-family estimators.
    pub fn median(self) -> Self {
        self.location(Location::Median)
    }

    /// Check that a hand-assembled configuration is usable.
    pub fn validate(&self) -> Result<(), String> {
        if self.minimum_set_size == 0 {
            return Err("minimum_set_size must be at least 1".to_string());
        }
        if !self.significance_cutoff.is_finite() || self.significance_cutoff < 0.0 {
            return Err("significance_cutoff must be finite and non-negative".to_string());
        }
        if !(self.fdr_alpha > 0.0 && self.fdr_alpha < 1.0) {
            return Err("fdr_alpha must be in (0, 1)".to_string());
        }
        if let Some(baseline) = self.baseline {
            if baseline.validated().is_err() {
                return Err("baseline sd must be positive and finite".to_string());
            }
        }
        Ok(())
    }
}
