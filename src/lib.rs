//! # kinact
//!
//! Kinase-substrate enrichment analysis (KSEA) for phosphoproteomics.
//!
//! Given per-phosphosite fold-changes of one condition and a prior
//! kinase→substrate interaction graph, this crate estimates which kinases
//! shifted activity relative to baseline, outputting per kinase:
//! - An activity score (substrate-set displacement or net regulated count)
//! - A raw p-value under the estimator's significance regime
//! - A false-discovery-rate adjusted p-value, corrected jointly across all
//!   tested kinases
//!
//! The methodology follows the kinase-substrate enrichment analysis of
//! Casado et al. (Science Signaling, 2013): a kinase whose known target
//! sites move coherently in the measured data is inferred to have changed
//! activity, whether or not the kinase itself was measured.
//!
//! ## Common Pitfall: Score Comparability
//!
//! By default the baseline moments for the z statistic are derived from
//! the observation vector of each call, so scores are calibrated *within*
//! one condition. To compare activity across conditions, supply fixed
//! moments via [`Config::baseline`] (or the engine builder) instead.
//!
//! ## Quick Start
//!
//! ```ignore
//! use kinact::{ActivityEngine, FoldChanges, InteractionGraph};
//! use kinact::data::{load_curated, CuratedOptions};
//!
//! let graph = load_curated("omnipath_ptms.txt".as_ref(), &CuratedOptions::default())?;
//! let observations: FoldChanges = my_condition_fold_changes();
//!
//! let table = ActivityEngine::new().mean(&observations, &graph)?;
//! for record in table.ranked() {
//!     println!("{}\t{:.3}\t{:.2e}", record.kinase, record.score, record.p_adjusted);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod engine;
mod error;
mod graph;
mod observations;
mod result;
mod types;

// Functional modules
pub mod analysis;
pub mod data;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use analysis::{Estimator, Regime};
pub use config::Config;
pub use constants::{FDR_ALPHA, MIN_SET_SIZE, SIGNIFICANCE_CUTOFF};
pub use engine::ActivityEngine;
pub use error::EngineError;
pub use graph::{InteractionGraph, SubstrateSet, Weight};
pub use observations::{FoldChanges, Significance};
pub use result::{ActivityTable, KinaseActivity};
pub use statistics::Baseline;
pub use types::{KinaseId, Location, SiteId};
