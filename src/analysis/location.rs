//! Location estimators: mean and median of the substrate fold-changes.

use log::debug;

use crate::analysis::RawScore;
use crate::graph::SubstrateSet;
use crate::observations::{FoldChanges, Significance};
use crate::types::Location;

/// Mean or median fold-change over the full qualifying substrate set.
///
/// Returns `None` only for an empty set, which
/// [`crate::InteractionGraph::qualifying_substrates`] never produces.
pub(crate) fn location_score(
    set: &SubstrateSet<'_>,
    observations: &FoldChanges,
    location: Location,
) -> Option<RawScore> {
    let values = substrate_values(set, observations);
    score_from_values(values, location)
}

/// Mean or median fold-change restricted to significantly regulated
/// substrates.
///
/// A kinase whose qualifying set holds no significant site has no defined
/// score and is dropped from the result table.
pub(crate) fn significant_location_score(
    set: &SubstrateSet<'_>,
    observations: &FoldChanges,
    significance: &Significance,
    cutoff: f64,
    location: Location,
) -> Option<RawScore> {
    let values: Vec<f64> = set
        .sites
        .iter()
        .filter(|(site, _)| significance.is_significant(site, cutoff))
        .filter_map(|(site, _)| observations.get(site))
        .collect();
    if values.is_empty() {
        debug!("skipping {}: no significantly regulated substrates", set.kinase);
        return None;
    }
    score_from_values(values, location)
}

fn substrate_values(set: &SubstrateSet<'_>, observations: &FoldChanges) -> Vec<f64> {
    set.sites
        .iter()
        .filter_map(|(site, _)| observations.get(site))
        .collect()
}

fn score_from_values(mut values: Vec<f64>, location: Location) -> Option<RawScore> {
    if values.is_empty() {
        return None;
    }
    let n = values.len();
    let score = match location {
        Location::Mean => values.iter().sum::<f64>() / n as f64,
        Location::Median => median(&mut values),
    };
    Some(RawScore {
        score,
        sample_size: n as f64,
        substrate_count: n,
        significant_count: 0,
    })
}

/// Median with averaging of the two central values for even lengths.
fn median(values: &mut [f64]) -> f64 {
    values.sort_unstable_by(|a, b| a.total_cmp(b));
    let n = values.len();
    let mid = n / 2;
    if n % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    }
}
