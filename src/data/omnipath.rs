//! Curated kinase-substrate resource loading.
//!
//! Parses the tab-separated PTM export shared by curated interaction
//! databases: one row per (enzyme, substrate site, modification) with the
//! contributing source databases in a `;`-joined column. Phosphorylation
//! rows become activating (+1) edges, dephosphorylation rows inhibiting
//! (-1) edges; everything else is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use super::{column_index, DataError};
use crate::graph::{InteractionGraph, Weight};

/// Source databases integrated in the curated export.
pub const KNOWN_SOURCES: &[&str] = &[
    "ARN",
    "CA1",
    "dbPTM",
    "DEPOD",
    "HPRD",
    "MIMP",
    "Macrophage",
    "NRF2ome",
    "phosphoELM",
    "PhosphoSite",
    "SPIKE",
    "SignaLink3",
    "Signor",
    "TRIP",
];

/// Organisms the curated export may be restricted to.
pub const SUPPORTED_ORGANISMS: &[&str] = &["human", "mouse", "rat"];

/// Filters applied while loading a curated resource.
#[derive(Debug, Clone)]
pub struct CuratedOptions {
    /// Source databases to keep. An empty list keeps every known source.
    pub sources: Vec<String>,

    /// Optional organism restriction. Only applied when the export carries
    /// an `Organism` column; validated against [`SUPPORTED_ORGANISMS`]
    /// either way.
    pub organism: Option<String>,
}

impl Default for CuratedOptions {
    fn default() -> Self {
        Self {
            sources: vec!["PhosphoSite".to_string()],
            organism: None,
        }
    }
}

impl CuratedOptions {
    /// Keep interactions from every known source.
    pub fn all_sources() -> Self {
        Self {
            sources: Vec::new(),
            organism: None,
        }
    }

    /// Check the filters against the supported vocabularies.
    pub fn validate(&self) -> Result<(), DataError> {
        for source in &self.sources {
            if !KNOWN_SOURCES.contains(&source.as_str()) {
                return Err(DataError::UnknownSource {
                    source: source.clone(),
                });
            }
        }
        if let Some(organism) = &self.organism {
            if !SUPPORTED_ORGANISMS.contains(&organism.to_lowercase().as_str()) {
                return Err(DataError::UnknownOrganism {
                    organism: organism.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Load a curated PTM export into an interaction graph.
///
/// Expected tab-separated columns: `UniProt_A` (enzyme), `UniProt_B`
/// (substrate protein), `Residue_letter`, `Residue_number`, `PTM_type`,
/// and `Databases`; an `Organism` column is honored when present. Site
/// identifiers are assembled as `<UniProt_B>_<letter><number>`.
///
/// The graph is keyed by enzyme accession;
/// [`InteractionGraph::relabel_kinases`] together with
/// [`crate::data::IdMap`] swaps the columns to gene names.
pub fn load_curated(path: &Path, options: &CuratedOptions) -> Result<InteractionGraph, DataError> {
    options.validate()?;

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    let header_line = match lines.next() {
        Some(line) => line?,
        None => return Ok(InteractionGraph::new()),
    };
    let header: Vec<&str> = header_line.trim_end().split('\t').collect();
    let enzyme_col = column_index(&header, "UniProt_A")?;
    let substrate_col = column_index(&header, "UniProt_B")?;
    let letter_col = column_index(&header, "Residue_letter")?;
    let number_col = column_index(&header, "Residue_number")?;
    let ptm_col = column_index(&header, "PTM_type")?;
    let sources_col = column_index(&header, "Databases")?;
    let organism_col = column_index(&header, "Organism").ok();

    let wanted_organism = options.organism.as_ref().map(|o| o.to_lowercase());
    let needed = [enzyme_col, substrate_col, letter_col, number_col, ptm_col, sources_col]
        .into_iter()
        .max()
        .unwrap_or(0);

    let mut graph = InteractionGraph::new();
    let mut kept = 0_usize;
    for (line_num, line_result) in lines.enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.trim_end().split('\t').collect();
        if fields.len() <= needed {
            return Err(DataError::Parse {
                line: line_num + 2,
                message: format!("expected at least {} columns, got {}", needed + 1, fields.len()),
            });
        }

        let ptm_type = fields[ptm_col];
        if !ptm_type.contains("phosphorylation") {
            continue;
        }

        if let (Some(wanted), Some(col)) = (&wanted_organism, organism_col) {
            if fields.get(col).map(|o| o.to_lowercase()).as_deref() != Some(wanted.as_str()) {
                continue;
            }
        }

        if !options.sources.is_empty() {
            let row_sources = fields[sources_col].split(';');
            let mut matched = false;
            for source in row_sources {
                if options.sources.iter().any(|s| s == source) {
                    matched = true;
                    break;
                }
            }
            if !matched {
                continue;
            }
        }

        let weight = if ptm_type.starts_with("de") {
            Weight::INHIBITING
        } else {
            Weight::ACTIVATING
        };
        let site = format!(
            "{}_{}{}",
            fields[substrate_col], fields[letter_col], fields[number_col]
        );
        graph.insert(fields[enzyme_col], site, weight);
        kept += 1;
    }

    debug!(
        "loaded {} curated interactions across {} kinases",
        kept,
        graph.kinase_count()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const HEADER: &str = "UniProt_A\tUniProt_B\tResidue_letter\tResidue_number\tPTM_type\tDatabases";

    fn write_export(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
        file
    }

    #[test]
    fn phosphorylation_rows_become_signed_edges() {
        let file = write_export(&[
            "P06239\tP08631\tS\t522\tphosphorylation\tPhosphoSite",
            "P60484\tP08631\tS\t522\tdephosphorylation\tPhosphoSite;Signor",
            "P06239\tP08631\tK\t100\tubiquitination\tPhosphoSite",
        ]);

        let graph = load_curated(file.path(), &CuratedOptions::default()).unwrap();
        assert_eq!(graph.kinase_count(), 2);
        assert_eq!(graph.weight("P06239", "P08631_S522"), Some(Weight::ACTIVATING));
        assert_eq!(graph.weight("P60484", "P08631_S522"), Some(Weight::INHIBITING));
    }

    #[test]
    fn source_filter_drops_other_databases() {
        let file = write_export(&[
            "P06239\tP08631\tS\t522\tphosphorylation\tSignor",
            "P06239\tP08631\tY\t100\tphosphorylation\tPhosphoSite;HPRD",
        ]);

        let options = CuratedOptions {
            sources: vec!["PhosphoSite".to_string()],
            organism: None,
        };
        let graph = load_curated(file.path(), &options).unwrap();
        assert_eq!(graph.weight("P06239", "P08631_S522"), None);
        assert_eq!(graph.weight("P06239", "P08631_Y100"), Some(Weight::ACTIVATING));
    }

    #[test]
    fn unknown_source_is_rejected_before_reading() {
        let file = write_export(&[]);
        let options = CuratedOptions {
            sources: vec!["NotADatabase".to_string()],
            organism: None,
        };
        assert!(matches!(
            load_curated(file.path(), &options),
            Err(DataError::UnknownSource { .. })
        ));
    }

    #[test]
    fn unknown_organism_is_rejected() {
        let options = CuratedOptions {
            sources: Vec::new(),
            organism: Some("axolotl".to_string()),
        };
        assert!(matches!(
            options.validate(),
            Err(DataError::UnknownOrganism { .. })
        ));
    }

    #[test]
    fn missing_column_is_loud() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "UniProt_A\tUniProt_B").unwrap();
        assert!(matches!(
            load_curated(file.path(), &CuratedOptions::all_sources()),
            Err(DataError::MissingColumn { .. })
        ));
    }
}
