//! Identifier conversion between protein and gene naming systems.
//!
//! Curated resources key their enzyme columns by UniProt accession while
//! most downstream reporting wants gene names. The mapping table is a
//! reduced cross-reference with one row per protein; conversions resolve
//! only when exactly one row matches, mirroring the ambiguity rules of the
//! upstream mapping service.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rustc_hash::FxHashMap;

use super::{column_index, DataError};

/// Identifier system of a kinase or protein label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdSystem {
    /// UniProt accession, e.g. `P06239`.
    UniProt,
    /// HGNC-style gene name, e.g. `LCK`.
    GeneName,
    /// STRING identifier, e.g. `9606.ENSP00000337825`.
    StringId,
}

impl IdSystem {
    fn column(self) -> &'static str {
        match self {
            Self::UniProt => "uniprot",
            Self::GeneName => "gene_name",
            Self::StringId => "string_id",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::UniProt => 0,
            Self::GeneName => 1,
            Self::StringId => 2,
        }
    }
}

impl fmt::Display for IdSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Cross-reference table between the supported identifier systems.
#[derive(Debug, Clone, Default)]
pub struct IdMap {
    rows: Vec<[Option<String>; 3]>,
    lookup: [FxHashMap<String, Vec<usize>>; 3],
}

impl IdMap {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one cross-reference row. Absent labels stay unmapped.
    pub fn insert_record(
        &mut self,
        uniprot: Option<&str>,
        gene_name: Option<&str>,
        string_id: Option<&str>,
    ) {
        let row_index = self.rows.len();
        let row = [
            uniprot.map(str::to_string),
            gene_name.map(str::to_string),
            string_id.map(str::to_string),
        ];
        for (system_index, label) in row.iter().enumerate() {
            if let Some(label) = label {
                self.lookup[system_index]
                    .entry(label.clone())
                    .or_default()
                    .push(row_index);
            }
        }
        self.rows.push(row);
    }

    /// Load the table from a comma-separated file with `uniprot`,
    /// `gene_name`, and `string_id` columns. Empty fields stay unmapped.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut lines = reader.lines();

        let header_line = match lines.next() {
            Some(line) => line?,
            None => return Ok(Self::new()),
        };
        let header: Vec<&str> = header_line.trim_end().split(',').collect();
        let uniprot_col = column_index(&header, "uniprot")?;
        let gene_col = column_index(&header, "gene_name")?;
        let string_col = column_index(&header, "string_id")?;

        let mut map = Self::new();
        for line_result in lines {
            let line = line_result?;
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.trim_end().split(',').collect();
            let get = |col: usize| {
                fields
                    .get(col)
                    .map(|f| f.trim())
                    .filter(|f| !f.is_empty())
            };
            map.insert_record(get(uniprot_col), get(gene_col), get(string_col));
        }
        Ok(map)
    }

    /// Number of cross-reference rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Convert a single identifier between systems.
    ///
    /// Returns `Ok(None)` when the identifier is unknown, matches more
    /// than one row, or its row carries no label in the target system.
    /// Asking for a conversion of a system onto itself is a configuration
    /// error, not a no-op.
    pub fn convert_one(
        &self,
        id: &str,
        from: IdSystem,
        to: IdSystem,
    ) -> Result<Option<String>, DataError> {
        if from == to {
            return Err(DataError::IdenticalSystems { system: from });
        }
        let matches = match self.lookup[from.index()].get(id) {
            Some(rows) => rows,
            None => return Ok(None),
        };
        if matches.len() != 1 {
            return Ok(None);
        }
        Ok(self.rows[matches[0]][to.index()].clone())
    }

    /// Convert a batch of identifiers, keeping the input order.
    pub fn convert<'a, I>(
        &self,
        ids: I,
        from: IdSystem,
        to: IdSystem,
    ) -> Result<Vec<Option<String>>, DataError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter()
            .map(|id| self.convert_one(id, from, to))
            .collect()
    }
}
