//! Prediction-tool adapter for NetworKIN-style kinase predictions.
//!
//! NetworKIN emits one row per (site, regulator) candidate with a
//! continuous confidence score and a tree label separating kinases (`KIN`)
//! from phosphatases (`PTP`). Scores above the cutoff become signed
//! continuous weights: positive for kinases, negative for phosphatases.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;
use rustc_hash::FxHashMap;

use super::{column_index, DataError};
use crate::graph::{InteractionGraph, Weight};
use crate::types::SiteId;

/// Load a NetworKIN result file into a continuous-weight graph.
///
/// Expected tab-separated columns: `#Name` (substrate accession),
/// `Position` (residue letter and number, e.g. `S59`), `Tree` (`KIN` or
/// `PTP`; other trees are skipped), `Kinase/Phosphatase/Phospho-binding
/// domain description` (regulator name), and `NetworKIN score`. Rows at or
/// below `score_cutoff` are dropped.
pub fn load_networkin(path: &Path, score_cutoff: f64) -> Result<InteractionGraph, DataError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    let header_line = match lines.next() {
        Some(line) => line?,
        None => return Ok(InteractionGraph::new()),
    };
    let header: Vec<&str> = header_line.trim_end().split('\t').collect();
    let name_col = column_index(&header, "#Name")?;
    let position_col = column_index(&header, "Position")?;
    let tree_col = column_index(&header, "Tree")?;
    let regulator_col = column_index(
        &header,
        "Kinase/Phosphatase/Phospho-binding domain description",
    )?;
    let score_col = column_index(&header, "NetworKIN score")?;

    let needed = [name_col, position_col, tree_col, regulator_col, score_col]
        .into_iter()
        .max()
        .unwrap_or(0);

    let mut graph = InteractionGraph::new();
    for (line_num, line_result) in lines.enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.trim_end().split('\t').collect();
        if fields.len() <= needed {
            return Err(DataError::Parse {
                line: line_num + 2,
                message: format!(
                    "expected at least {} columns, got {}",
                    needed + 1,
                    fields.len()
                ),
            });
        }

        let tree = fields[tree_col];
        let is_phosphatase = match tree {
            "KIN" => false,
            "PTP" => true,
            _ => continue,
        };

        let score: f64 = fields[score_col]
            .parse()
            .map_err(|_| DataError::InvalidValue {
                line: line_num + 2,
                value: fields[score_col].to_string(),
            })?;
        if score <= score_cutoff {
            continue;
        }

        let signed = if is_phosphatase { -score } else { score };
        let Some(weight) = Weight::from_signed(signed) else {
            continue;
        };
        let site = format!("{}_{}", fields[name_col], fields[position_col]);
        graph.insert(fields[regulator_col], site, weight);
    }

    debug!("loaded {} predicted regulators", graph.kinase_count());
    Ok(graph)
}

/// Combine predicted interactions with a curated graph.
///
/// Predicted continuous weights are collapsed to the curated +1/-1
/// convention, then curated entries overwrite predictions wherever both
/// exist. The inputs are left untouched.
pub fn merge_with_curated(
    predicted: &InteractionGraph,
    curated: &InteractionGraph,
) -> InteractionGraph {
    let mut merged = InteractionGraph::new();
    for (kinase, site, weight) in predicted.entries() {
        merged.insert(kinase.clone(), site.clone(), weight.binarized());
    }
    for (kinase, site, weight) in curated.entries() {
        merged.insert(kinase.clone(), site.clone(), weight);
    }
    merged
}

/// Write the site and FASTA input files a NetworKIN run needs.
///
/// `site_file.txt` holds one `accession<TAB>position<TAB>residue` row per
/// site; `fasta_file.txt` holds each referenced protein sequence once.
/// Sites whose protein has no sequence in `sequences` are still listed in
/// the site file, matching the predictor's tolerance for unmapped entries.
pub fn write_prediction_inputs(
    sites: &[SiteId],
    sequences: &FxHashMap<String, String>,
    output_dir: &Path,
) -> Result<(), DataError> {
    fs::create_dir_all(output_dir)?;
    let mut site_file = BufWriter::new(File::create(output_dir.join("site_file.txt"))?);
    let mut fasta_file = BufWriter::new(File::create(output_dir.join("fasta_file.txt"))?);

    let mut written: Vec<&str> = Vec::new();
    for (index, site) in sites.iter().enumerate() {
        let (accession, residue) = site.split_once('_').ok_or_else(|| DataError::Parse {
            line: index + 1,
            message: format!("site id '{site}' is not <accession>_<residue>"),
        })?;
        let mut chars = residue.chars();
        let letter = chars.next().ok_or_else(|| DataError::Parse {
            line: index + 1,
            message: format!("site id '{site}' has an empty residue"),
        })?;
        let position: &str = chars.as_str();

        writeln!(site_file, "{accession}\t{position}\t{letter}")?;

        if !written.contains(&accession) {
            if let Some(sequence) = sequences.get(accession) {
                writeln!(fasta_file, ">{accession}")?;
                writeln!(fasta_file, "{sequence}")?;
            }
            written.push(accession);
        }
    }

    site_file.flush()?;
    fasta_file.flush()?;
    Ok(())
}

/// Load protein sequences from a UniProt-style tab export with `Entry` and
/// `Sequence` columns.
pub fn load_sequences(path: &Path) -> Result<FxHashMap<String, String>, DataError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    let header_line = match lines.next() {
        Some(line) => line?,
        None => return Ok(FxHashMap::default()),
    };
    let header: Vec<&str> = header_line.trim_end().split('\t').collect();
    let entry_col = column_index(&header, "Entry")?;
    let sequence_col = column_index(&header, "Sequence")?;

    let mut sequences = FxHashMap::default();
    for line_result in lines {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.trim_end().split('\t').collect();
        if let (Some(entry), Some(sequence)) = (fields.get(entry_col), fields.get(sequence_col)) {
            sequences.insert(entry.to_string(), sequence.to_string());
        }
    }
    Ok(sequences)
}
