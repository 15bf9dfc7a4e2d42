//! Enrichment engine entry points.

use rayon::prelude::*;

use crate::analysis::{self, Estimator, RawScore};
use crate::config::Config;
use crate::error::EngineError;
use crate::graph::{InteractionGraph, SubstrateSet};
use crate::observations::{FoldChanges, Significance};
use crate::result::{ActivityTable, KinaseActivity};
use crate::statistics::{benjamini_hochberg, significant_count_test, z_test, Baseline, Population};
use crate::types::Location;

/// Kinase activity estimation over one experimental condition.
///
/// Every entry point runs the same pipeline: intersect the interaction
/// graph with the observed sites, score each qualifying kinase under the
/// selected estimator, convert the scores to raw p-values under the
/// estimator's significance regime, and adjust the whole p-value batch
/// jointly with the Benjamini-Hochberg procedure. Per-kinase computations
/// run in parallel; the correction is the join point.
///
/// The engine holds no state between calls and never mutates its inputs.
///
/// # Example
///
/// ```
/// use kinact::{ActivityEngine, FoldChanges, InteractionGraph, Weight};
///
/// let observations: FoldChanges = [
///     ("P06239_S59", 1.1),
///     ("P06239_Y394", 0.9),
///     ("P08631_S522", 1.4),
///     ("P12931_S17", -0.2),
///     ("P42685_S21", 0.3),
/// ]
/// .into_iter()
/// .collect();
///
/// let mut graph = InteractionGraph::new();
/// for site in ["P06239_S59", "P06239_Y394", "P08631_S522"] {
///     graph.insert("LCK", site, Weight::ACTIVATING);
/// }
///
/// let table = ActivityEngine::new()
///     .minimum_set_size(3)
///     .mean(&observations, &graph)
///     .unwrap();
///
/// assert_eq!(table.len(), 1);
/// assert!(table.get("LCK").unwrap().score > 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ActivityEngine {
    config: Config,
}

impl ActivityEngine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from an existing configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the minimum substrate-set size.
    pub fn minimum_set_size(mut self, size: usize) -> Self {
        self.config = self.config.minimum_set_size(size);
        self
    }

    /// Set the site-significance cutoff (`-log10` scale).
    pub fn significance_cutoff(mut self, cutoff: f64) -> Self {
        self.config = self.config.significance_cutoff(cutoff);
        self
    }

    /// Set the FDR level for the `significant` flag.
    pub fn fdr_alpha(mut self, alpha: f64) -> Self {
        self.config = self.config.fdr_alpha(alpha);
        self
    }

    /// Supply global baseline moments for the z statistic.
    pub fn baseline(mut self, mean: f64, sd: f64) -> Self {
        self.config = self.config.baseline(mean, sd);
        self
    }

    /// Set the location statistic for the mean-family estimators.
    pub fn location(mut self, location: Location) -> Self {
        self.config = self.config.location(location);
        self
    }

    /// Use the median instead of the mean for the mean-family estimators.
    pub fn median(self) -> Self {
        self.location(Location::Median)
    }

    /// The current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Score kinases by the mean (or median) fold-change of their substrate
    /// sets; significance via the z statistic.
    pub fn mean(
        &self,
        observations: &FoldChanges,
        graph: &InteractionGraph,
    ) -> Result<ActivityTable, EngineError> {
        let sets = graph.qualifying_substrates(observations, self.config.minimum_set_size);
        if sets.is_empty() {
            return Ok(ActivityTable::default());
        }
        let baseline = self.resolve_baseline(observations)?;
        let location = self.config.location;
        self.finish_z(&sets, baseline, |set| {
            analysis::location_score(set, observations, location)
        })
    }

    /// Score kinases by the mean (or median) fold-change of their
    /// significantly regulated substrates only; significance via the z
    /// statistic.
    ///
    /// Kinases whose qualifying set holds no significant site are dropped
    /// from the table.
    pub fn mean_significant(
        &self,
        observations: &FoldChanges,
        significance: &Significance,
        graph: &InteractionGraph,
    ) -> Result<ActivityTable, EngineError> {
        let sets = graph.qualifying_substrates(observations, self.config.minimum_set_size);
        if sets.is_empty() {
            return Ok(ActivityTable::default());
        }
        let baseline = self.resolve_baseline(observations)?;
        let location = self.config.location;
        let cutoff = self.config.significance_cutoff;
        self.finish_z(&sets, baseline, |set| {
            analysis::significant_location_score(set, observations, significance, cutoff, location)
        })
    }

    /// Score kinases by the count of significantly up-regulated minus
    /// significantly down-regulated substrates; significance via the
    /// hypergeometric point probability.
    pub fn delta(
        &self,
        observations: &FoldChanges,
        significance: &Significance,
        graph: &InteractionGraph,
    ) -> Result<ActivityTable, EngineError> {
        let sets = graph.qualifying_substrates(observations, self.config.minimum_set_size);
        if sets.is_empty() {
            return Ok(ActivityTable::default());
        }
        let cutoff = self.config.significance_cutoff;
        let population = Population::from_observations(observations, significance, cutoff)?;

        let scored: Vec<(&str, RawScore)> = sets
            .par_iter()
            .map(|set| {
                (
                    set.kinase,
                    analysis::delta_score(set, observations, significance, cutoff),
                )
            })
            .collect();
        let raw_p: Vec<f64> = scored
            .iter()
            .map(|(_, raw)| {
                significant_count_test(
                    population,
                    raw.substrate_count as u64,
                    raw.significant_count,
                )
            })
            .collect();
        self.assemble(scored, raw_p)
    }

    /// Score kinases by the interaction-weighted mean fold-change of their
    /// substrate sets; significance via the z statistic with the summed
    /// absolute weight as the effective sample size.
    pub fn weighted_mean(
        &self,
        observations: &FoldChanges,
        graph: &InteractionGraph,
    ) -> Result<ActivityTable, EngineError> {
        let sets = graph.qualifying_substrates(observations, self.config.minimum_set_size);
        if sets.is_empty() {
            return Ok(ActivityTable::default());
        }
        let baseline = self.resolve_baseline(observations)?;
        self.finish_z(&sets, baseline, |set| {
            analysis::weighted_score(set, observations)
        })
    }

    /// Run the estimator selected at runtime.
    ///
    /// Estimators that need a significance vector fail immediately with
    /// [`EngineError::MissingSignificance`] when none is supplied.
    pub fn run(
        &self,
        estimator: Estimator,
        observations: &FoldChanges,
        significance: Option<&Significance>,
        graph: &InteractionGraph,
    ) -> Result<ActivityTable, EngineError> {
        match estimator {
            Estimator::Mean => self.mean(observations, graph),
            Estimator::WeightedMean => self.weighted_mean(observations, graph),
            Estimator::SignificantMean => {
                let significance =
                    significance.ok_or(EngineError::MissingSignificance { estimator })?;
                self.mean_significant(observations, significance, graph)
            }
            Estimator::Delta => {
                let significance =
                    significance.ok_or(EngineError::MissingSignificance { estimator })?;
                self.delta(observations, significance, graph)
            }
        }
    }

    fn resolve_baseline(&self, observations: &FoldChanges) -> Result<Baseline, EngineError> {
        match self.config.baseline {
            Some(baseline) => baseline.validated(),
            None => Baseline::from_observations(observations),
        }
    }

    fn finish_z<'g, F>(
        &self,
        sets: &[SubstrateSet<'g>],
        baseline: Baseline,
        scorer: F,
    ) -> Result<ActivityTable, EngineError>
    where
        F: Fn(&SubstrateSet<'g>) -> Option<RawScore> + Sync,
    {
        let scored: Vec<(&str, RawScore)> = sets
            .par_iter()
            .filter_map(|set| scorer(set).map(|raw| (set.kinase, raw)))
            .collect();
        let raw_p: Vec<f64> = scored
            .iter()
            .map(|(_, raw)| z_test(raw.score, raw.sample_size, baseline))
            .collect();
        self.assemble(scored, raw_p)
    }

    fn assemble(
        &self,
        scored: Vec<(&str, RawScore)>,
        raw_p: Vec<f64>,
    ) -> Result<ActivityTable, EngineError> {
        let adjusted = benjamini_hochberg(&raw_p)?;
        let records: Vec<KinaseActivity> = scored
            .into_iter()
            .zip(raw_p)
            .zip(adjusted)
            .map(|(((kinase, raw), p_value), p_adjusted)| KinaseActivity {
                kinase: kinase.to_string(),
                score: raw.score,
                p_value,
                p_adjusted,
                substrate_count: raw.substrate_count,
                significant: p_adjusted <= self.config.fdr_alpha,
            })
            .collect();
        Ok(ActivityTable::new(records))
    }
}
