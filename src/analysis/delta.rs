//! Delta estimator: net count of significantly regulated substrates.

use crate::analysis::RawScore;
use crate::graph::SubstrateSet;
use crate::observations::{FoldChanges, Significance};

/// Count of significantly up-regulated minus significantly down-regulated
/// substrates.
///
/// A site counts as up (down) when its fold-change is strictly positive
/// (negative) and its significance clears the cutoff. Sites with a zero
/// fold-change contribute to neither direction but still count toward
/// `significant_count`, which parameterizes the hypergeometric test.
pub(crate) fn delta_score(
    set: &SubstrateSet<'_>,
    observations: &FoldChanges,
    significance: &Significance,
    cutoff: f64,
) -> RawScore {
    let mut up = 0_i64;
    let mut down = 0_i64;
    let mut significant = 0_u64;
    for (site, _) in &set.sites {
        if !significance.is_significant(site, cutoff) {
            continue;
        }
        significant += 1;
        match observations.get(site) {
            Some(fc) if fc > 0.0 => up += 1,
            Some(fc) if fc < 0.0 => down += 1,
            _ => {}
        }
    }
    RawScore {
        score: (up - down) as f64,
        sample_size: set.len() as f64,
        substrate_count: set.len(),
        significant_count: significant,
    }
}
