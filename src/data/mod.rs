//! Collaborator interfaces: prior-knowledge loading and id conversion.
//!
//! The engine itself is agnostic about where its interaction graph comes
//! from. This module provides the thin wrappers around the tabular exports
//! it is usually fed with:
//!
//! - **Curated resources** ([`load_curated`]): tab-separated PTM exports of
//!   curated kinase-substrate databases
//! - **Prediction tools** ([`load_networkin`]): NetworKIN-style output with
//!   continuous interaction scores
//! - **Identifier conversion** ([`IdMap`]): UniProt accession, gene name,
//!   and STRING id cross-references
//!
//! # Example
//!
//! ```ignore
//! use kinact::data::{load_curated, CuratedOptions};
//! use std::path::Path;
//!
//! let graph = load_curated(Path::new("omnipath_ptms.txt"), &CuratedOptions::default())?;
//! println!("{} kinases with curated targets", graph.kinase_count());
//! ```

mod idmap;
mod networkin;
mod omnipath;

pub use idmap::{IdMap, IdSystem};
pub use networkin::{
    load_networkin, load_sequences, merge_with_curated, write_prediction_inputs,
};
pub use omnipath::{load_curated, CuratedOptions, KNOWN_SOURCES, SUPPORTED_ORGANISMS};

use std::fmt;

/// Errors that can occur while loading prior-knowledge tables.
#[derive(Debug)]
pub enum DataError {
    /// IO error reading or writing a file.
    Io(std::io::Error),

    /// Malformed row at a specific line.
    Parse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Description of the parse error.
        message: String,
    },

    /// A required column is missing from the header.
    MissingColumn {
        /// Name of the expected column.
        column: String,
    },

    /// An invalid numeric value in a score column.
    InvalidValue {
        /// Line number where the invalid value was found (1-indexed).
        line: usize,
        /// The invalid value string.
        value: String,
    },

    /// A requested interaction source is not part of the curated resource.
    UnknownSource {
        /// The unrecognized source name.
        source: String,
    },

    /// A requested organism is not supported by the curated resource.
    UnknownOrganism {
        /// The unrecognized organism name.
        organism: String,
    },

    /// Identifier conversion was asked to map a system onto itself.
    IdenticalSystems {
        /// The system that appeared on both sides.
        system: IdSystem,
    },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(e) => write!(f, "IO error: {}", e),
            DataError::Parse { line, message } => {
                write!(f, "Parse error at line {}: {}", line, message)
            }
            DataError::MissingColumn { column } => {
                write!(f, "Missing column '{}' in header", column)
            }
            DataError::InvalidValue { line, value } => {
                write!(f, "Invalid score at line {}: '{}'", line, value)
            }
            DataError::UnknownSource { source } => {
                write!(
                    f,
                    "Unknown interaction source '{}'; supported sources: {:?}",
                    source, KNOWN_SOURCES
                )
            }
            DataError::UnknownOrganism { organism } => {
                write!(
                    f,
                    "Unknown organism '{}'; supported organisms: {:?}",
                    organism, SUPPORTED_ORGANISMS
                )
            }
            DataError::IdenticalSystems { system } => {
                write!(f, "Conversion from {} to itself is not a conversion", system)
            }
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::Io(e)
    }
}

/// Locate a named column in a split header row.
pub(crate) fn column_index(header: &[&str], column: &str) -> Result<usize, DataError> {
    header
        .iter()
        .position(|&name| name == column)
        .ok_or_else(|| DataError::MissingColumn {
            column: column.to_string(),
        })
}
