//! Weighted-mean estimator for continuous interaction scores.

use crate::analysis::RawScore;
use crate::graph::SubstrateSet;
use crate::observations::FoldChanges;

/// Fold-changes weighted by the signed interaction scores:
/// `sum(fc * w) / sum(|w|)`.
///
/// Negative weights flip the contribution of dephosphorylation targets, so
/// a phosphatase whose substrates all drop still scores as active. The
/// effective sample size for the z statistic is the summed absolute
/// weight. A vanished denominator leaves the score undefined and drops the
/// kinase.
pub(crate) fn weighted_score(
    set: &SubstrateSet<'_>,
    observations: &FoldChanges,
) -> Option<RawScore> {
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    let mut contributing = 0_usize;
    for &(site, weight) in &set.sites {
        let Some(fc) = observations.get(site) else {
            continue;
        };
        weighted_sum += fc * weight.value();
        weight_total += weight.magnitude();
        contributing += 1;
    }
    if weight_total <= 0.0 {
        return None;
    }
    Some(RawScore {
        score: weighted_sum / weight_total,
        sample_size: weight_total,
        substrate_count: contributing,
        significant_count: 0,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::graph::{InteractionGraph, Weight};

    #[test]
    fn unit_weights_degenerate_to_the_mean() {
        let fc: FoldChanges = [("A_S1", 1.0), ("A_S2", 2.0), ("A_S3", 3.0)]
            .into_iter()
            .collect();
        let mut graph = InteractionGraph::new();
        for site in ["A_S1", "A_S2", "A_S3"] {
            graph.insert("KIN", site, Weight::ACTIVATING);
        }

        let sets = graph.qualifying_substrates(&fc, 1);
        let raw = weighted_score(&sets[0], &fc).unwrap();
        assert_relative_eq!(raw.score, 2.0);
        assert_relative_eq!(raw.sample_size, 3.0);
    }

    #[test]
    fn inhibiting_weights_flip_the_sign() {
        let fc: FoldChanges = [("A_S1", -1.0), ("A_S2", -3.0)].into_iter().collect();
        let mut graph = InteractionGraph::new();
        graph.insert("PTP", "A_S1", Weight::INHIBITING);
        graph.insert("PTP", "A_S2", Weight::INHIBITING);

        let sets = graph.qualifying_substrates(&fc, 1);
        let raw = weighted_score(&sets[0], &fc).unwrap();
        // substrates dropping under an inhibitor reads as activity
        assert_relative_eq!(raw.score, 2.0);
        assert_relative_eq!(raw.sample_size, 2.0);
    }

    #[test]
    fn continuous_scores_weight_the_contributions() {
        let fc: FoldChanges = [("A_S1", 2.0), ("A_S2", 0.0)].into_iter().collect();
        let mut graph = InteractionGraph::new();
        graph.insert("KIN", "A_S1", Weight::from_signed(3.0).unwrap());
        graph.insert("KIN", "A_S2", Weight::from_signed(1.0).unwrap());

        let sets = graph.qualifying_substrates(&fc, 1);
        let raw = weighted_score(&sets[0], &fc).unwrap();
        assert_relative_eq!(raw.score, 1.5);
        assert_relative_eq!(raw.sample_size, 4.0);
    }
}
