//! Numeric defaults shared across the engine.

/// Default minimum number of observed substrate sites a kinase needs to be
/// scored at all. Below this, an activity estimate is dominated by the
/// noise of individual sites.
pub const MIN_SET_SIZE: usize = 5;

/// Default cutoff on `-log10` transformed site p-values above which a site
/// counts as significantly regulated. Corresponds to a site-level p-value
/// of 0.05.
pub const SIGNIFICANCE_CUTOFF: f64 = 1.301_029_995_663_981_2;

/// Default false-discovery-rate level for flagging kinases after the
/// Benjamini-Hochberg correction.
pub const FDR_ALPHA: f64 = 0.05;
