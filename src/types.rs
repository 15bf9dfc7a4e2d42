//! Identifier aliases and small shared types.

/// Phosphosite identifier: protein accession, residue letter, and residue
/// position joined as `<accession>_<letter><position>`, e.g. `P06239_S59`
/// for the serine 59 of Lck.
///
/// Used as the join key across observation vectors and the interaction
/// graph.
pub type SiteId = String;

/// Kinase (or phosphatase) identifier.
///
/// Whether this is a UniProt accession or a gene name depends on the
/// interaction source; the engine treats it as an opaque key.
pub type KinaseId = String;

/// Location statistic used by the mean-family estimators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Location {
    /// Arithmetic mean of the substrate fold-changes.
    #[default]
    Mean,
    /// Median of the substrate fold-changes, robust to single outlier
    /// sites in small substrate sets.
    Median,
}
