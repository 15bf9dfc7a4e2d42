//! Kinase-substrate interaction graph.

use log::debug;
use rustc_hash::FxHashMap;

use crate::observations::FoldChanges;
use crate::types::{KinaseId, SiteId};

/// Signed, non-zero interaction weight.
///
/// Curated resources encode a phosphorylating relationship as +1 and a
/// dephosphorylating (phosphatase) relationship as -1; prediction tools
/// supply continuous scores with the same sign convention. In those tables
/// a stored zero is indistinguishable from "no known relationship", so zero
/// is unrepresentable here: constructors reject zero and non-finite input
/// instead of storing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weight(f64);

impl Weight {
    /// Curated phosphorylating interaction (+1).
    pub const ACTIVATING: Weight = Weight(1.0);

    /// Curated dephosphorylating interaction (-1).
    pub const INHIBITING: Weight = Weight(-1.0);

    /// Wrap a signed continuous score. Returns `None` for zero or
    /// non-finite values, which mean "absent" in every source format.
    pub fn from_signed(value: f64) -> Option<Self> {
        (value.is_finite() && value != 0.0).then_some(Weight(value))
    }

    /// The signed value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Absolute value of the weight.
    pub fn magnitude(self) -> f64 {
        self.0.abs()
    }

    /// Whether this is a dephosphorylating (negative) relationship.
    pub fn is_inhibiting(self) -> bool {
        self.0 < 0.0
    }

    /// Collapse a continuous score to the curated +1/-1 convention.
    pub fn binarized(self) -> Self {
        if self.is_inhibiting() {
            Self::INHIBITING
        } else {
            Self::ACTIVATING
        }
    }
}

/// Sparse kinase → substrate adjacency with signed weights.
///
/// Logically a two-dimensional table keyed by (site, kinase); stored by
/// kinase column since every engine operation walks one kinase's substrate
/// set at a time. Inputs are never mutated by the engine; the graph is
/// plain data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionGraph {
    targets: FxHashMap<KinaseId, FxHashMap<SiteId, Weight>>,
}

impl InteractionGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an interaction. A later insert for the same (kinase, site)
    /// pair overwrites the earlier weight.
    pub fn insert(&mut self, kinase: impl Into<KinaseId>, site: impl Into<SiteId>, weight: Weight) {
        self.targets
            .entry(kinase.into())
            .or_default()
            .insert(site.into(), weight);
    }

    /// Number of kinases with at least one recorded target.
    pub fn kinase_count(&self) -> usize {
        self.targets.len()
    }

    /// Whether the graph holds no interactions.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Iterate over the kinase identifiers.
    pub fn kinases(&self) -> impl Iterator<Item = &KinaseId> {
        self.targets.keys()
    }

    /// The weight of one (kinase, site) pair, if recorded.
    pub fn weight(&self, kinase: &str, site: &str) -> Option<Weight> {
        self.targets.get(kinase).and_then(|s| s.get(site)).copied()
    }

    /// Iterate over all (kinase, site, weight) entries.
    pub fn entries(&self) -> impl Iterator<Item = (&KinaseId, &SiteId, Weight)> {
        self.targets
            .iter()
            .flat_map(|(kinase, sites)| sites.iter().map(move |(site, &w)| (kinase, site, w)))
    }

    /// Rebuild the graph with kinase identifiers passed through `relabel`.
    ///
    /// Kinases mapped to `None` are dropped; columns that collapse onto the
    /// same new label are merged, later entries overwriting earlier ones.
    /// Used to swap accession-keyed columns for gene names after loading a
    /// curated resource.
    pub fn relabel_kinases<F>(&self, relabel: F) -> InteractionGraph
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut out = InteractionGraph::new();
        for (kinase, sites) in &self.targets {
            let Some(new_label) = relabel(kinase) else {
                debug!("dropping kinase {kinase}: no converted identifier");
                continue;
            };
            for (site, &weight) in sites {
                out.insert(new_label.clone(), site.clone(), weight);
            }
        }
        out
    }

    /// Intersect every kinase's target sites with the observed sites and
    /// keep the kinases whose intersection reaches `minimum_set_size`.
    ///
    /// The returned sets are sorted by kinase identifier, and the sites
    /// within each set by site identifier, so downstream accumulation is
    /// deterministic. Kinases with an empty or undersized intersection are
    /// absent from the output; that absence is the only signal.
    pub fn qualifying_substrates<'a>(
        &'a self,
        observations: &FoldChanges,
        minimum_set_size: usize,
    ) -> Vec<SubstrateSet<'a>> {
        let mut sets: Vec<SubstrateSet<'a>> = Vec::new();
        for (kinase, targets) in &self.targets {
            let mut sites: Vec<(&'a str, Weight)> = targets
                .iter()
                .filter(|(site, _)| observations.contains(site))
                .map(|(site, &w)| (site.as_str(), w))
                .collect();
            if sites.is_empty() || sites.len() < minimum_set_size {
                debug!(
                    "skipping {kinase}: {} observed substrates (minimum {minimum_set_size})",
                    sites.len()
                );
                continue;
            }
            sites.sort_unstable_by_key(|&(site, _)| site);
            sets.push(SubstrateSet {
                kinase: kinase.as_str(),
                sites,
            });
        }
        sets.sort_unstable_by_key(|set| set.kinase);
        sets
    }
}

/// One kinase's observed substrate set: the intersection of its known
/// targets with the sites present in the observation vector.
#[derive(Debug, Clone)]
pub struct SubstrateSet<'a> {
    /// Kinase the set belongs to.
    pub kinase: &'a str,
    /// Qualifying sites with their interaction weights, sorted by site id.
    pub sites: Vec<(&'a str, Weight)>,
}

impl SubstrateSet<'_> {
    /// Number of qualifying sites.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Whether the set is empty. Sets produced by
    /// [`InteractionGraph::qualifying_substrates`] never are.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
