//! Output formatting for enrichment results.
//!
//! This module provides formatters for displaying an [`ActivityTable`] in
//! different formats:
//! - Terminal: human-readable ranked table with colors
//! - JSON: machine-readable serialization
//!
//! [`ActivityTable`]: crate::ActivityTable

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::format_table;
