//! Result records for enrichment calls.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::types::KinaseId;

/// Activity estimate for a single kinase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinaseActivity {
    /// Kinase (or phosphatase) identifier from the interaction graph.
    pub kinase: KinaseId,

    /// Activity score. Its meaning depends on the estimator: displacement
    /// of the substrate fold-changes from baseline for the mean family, or
    /// the net count of regulated substrates for the delta estimator.
    pub score: f64,

    /// Raw significance of the score under the estimator's regime.
    pub p_value: f64,

    /// Benjamini-Hochberg adjusted significance, joint across every kinase
    /// tested in the same call.
    pub p_adjusted: f64,

    /// Number of observed substrate sites the estimate is based on.
    pub substrate_count: usize,

    /// Whether `p_adjusted` clears the configured FDR level.
    pub significant: bool,
}

impl KinaseActivity {
    /// Whether the score points toward increased activity.
    pub fn is_activated(&self) -> bool {
        self.score > 0.0
    }
}

/// Per-kinase activity estimates of one enrichment call.
///
/// Records are sorted by kinase identifier. Scores, raw p-values, and
/// adjusted p-values live in one record per kinase, so the three mappings
/// share their key set by construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityTable {
    kinases: Vec<KinaseActivity>,
}

impl ActivityTable {
    pub(crate) fn new(mut kinases: Vec<KinaseActivity>) -> Self {
        kinases.sort_unstable_by(|a, b| a.kinase.cmp(&b.kinase));
        Self { kinases }
    }

    /// Number of kinases that survived scoring.
    pub fn len(&self) -> usize {
        self.kinases.len()
    }

    /// Whether no kinase survived scoring.
    pub fn is_empty(&self) -> bool {
        self.kinases.is_empty()
    }

    /// Iterate over the records in kinase order.
    pub fn iter(&self) -> impl Iterator<Item = &KinaseActivity> {
        self.kinases.iter()
    }

    /// Look up one kinase's record.
    pub fn get(&self, kinase: &str) -> Option<&KinaseActivity> {
        self.kinases
            .binary_search_by(|record| record.kinase.as_str().cmp(kinase))
            .ok()
            .map(|index| &self.kinases[index])
    }

    /// Kinase → activity score.
    pub fn scores(&self) -> FxHashMap<&str, f64> {
        self.kinases
            .iter()
            .map(|r| (r.kinase.as_str(), r.score))
            .collect()
    }

    /// Kinase → raw p-value.
    pub fn p_values(&self) -> FxHashMap<&str, f64> {
        self.kinases
            .iter()
            .map(|r| (r.kinase.as_str(), r.p_value))
            .collect()
    }

    /// Kinase → FDR-adjusted p-value.
    pub fn adjusted_p_values(&self) -> FxHashMap<&str, f64> {
        self.kinases
            .iter()
            .map(|r| (r.kinase.as_str(), r.p_adjusted))
            .collect()
    }

    /// Records sorted by adjusted p-value, most significant first; ties
    /// broken by kinase identifier.
    pub fn ranked(&self) -> Vec<&KinaseActivity> {
        let mut ranked: Vec<&KinaseActivity> = self.kinases.iter().collect();
        ranked.sort_by(|a, b| {
            a.p_adjusted
                .total_cmp(&b.p_adjusted)
                .then_with(|| a.kinase.cmp(&b.kinase))
        });
        ranked
    }
}

impl<'a> IntoIterator for &'a ActivityTable {
    type Item = &'a KinaseActivity;
    type IntoIter = std::slice::Iter<'a, KinaseActivity>;

    fn into_iter(self) -> Self::IntoIter {
        self.kinases.iter()
    }
}

impl IntoIterator for ActivityTable {
    type Item = KinaseActivity;
    type IntoIter = std::vec::IntoIter<KinaseActivity>;

    fn into_iter(self) -> Self::IntoIter {
        self.kinases.into_iter()
    }
}
