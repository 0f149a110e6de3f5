//! Error types for structure construction and comparison.

use thiserror::Error;

/// Errors reported by sequence validation, structure construction, and the
/// metrics. Every failure mode is a distinct variant; nothing is retried or
/// silently repaired.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// A character outside {A, C, G, U} reached a core entry point.
    #[error("invalid nucleotide '{0}' in sequence")]
    InvalidSequence(char),

    /// The pairing violates a representation invariant (length mismatch,
    /// self-pair, out-of-range or asymmetric partner, non-Watson-Crick pair).
    #[error("pairing is not valid for this sequence: {0}")]
    InvalidStructure(String),

    /// An index was used by more than one pair in a supplied pair list.
    #[error("index {0} is used by more than one pair")]
    ConstructionConflict(usize),

    /// Similarity requires equal sequence lengths.
    #[error("sequence lengths differ: {0} vs {1}")]
    LengthMismatch(usize, usize),
}
