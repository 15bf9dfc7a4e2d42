//! Statistical machinery behind the enrichment engine.
//!
//! This module provides the significance layer the estimators plug into:
//! - Z statistics against global data moments for the mean-family scores
//! - Hypergeometric point probabilities for the delta count score
//! - Joint Benjamini-Hochberg correction across all tested kinases

mod correction;
mod hypergeom;
mod ztest;

pub use correction::benjamini_hochberg;
pub use hypergeom::{significant_count_test, Population};
pub use ztest::{z_test, Baseline};
