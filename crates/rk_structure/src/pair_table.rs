//! Positional pairing representation.
//!
//! A `PairTable` stores, for every sequence position, either the partner
//! index or `None`. The table itself is a plain representation; the
//! invariants tying it to a concrete sequence (symmetry, chemistry) are
//! enforced by `SecondaryStructure`, which is the only validated owner.

use std::fmt;
use std::slice;

use crate::DotBracket;
use crate::DotBracketVec;
use crate::NAIDX;
use crate::StructureError;

/// A fixed-length table of optional partner indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTable(Vec<Option<NAIDX>>);

impl PairTable {
    /// An all-unpaired table of the given length.
    pub fn unpaired(length: usize) -> Self {
        PairTable(vec![None; length])
    }

    /// Build a table from an unordered list of index pairs.
    ///
    /// Every index may appear in at most one pair; reuse is a
    /// `ConstructionConflict`, endpoints >= `length` are rejected.
    pub fn from_pairs(length: usize, pairs: &[(usize, usize)]) -> Result<Self, StructureError> {
        let mut table = vec![None; length];
        for &(i, j) in pairs {
            if i >= length || j >= length {
                return Err(StructureError::InvalidStructure(format!(
                    "pair ({i},{j}) is out of range for length {length}"
                )));
            }
            for idx in [i, j] {
                if table[idx].is_some() {
                    return Err(StructureError::ConstructionConflict(idx));
                }
            }
            table[i] = Some(j as NAIDX);
            table[j] = Some(i as NAIDX);
        }
        Ok(PairTable(table))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Partner of position `i`, or `None` if unpaired.
    pub fn partner(&self, i: usize) -> Option<NAIDX> {
        self.0[i]
    }

    pub fn iter(&self) -> slice::Iter<'_, Option<NAIDX>> {
        self.0.iter()
    }

    /// Number of pairs, each symmetric pair counted once.
    pub fn num_pairs(&self) -> usize {
        self.0.iter().filter(|p| p.is_some()).count() / 2
    }

    /// Copy of the underlying partner array.
    pub fn to_vec(&self) -> Vec<Option<NAIDX>> {
        self.0.clone()
    }
}

impl From<Vec<Option<NAIDX>>> for PairTable {
    fn from(table: Vec<Option<NAIDX>>) -> Self {
        PairTable(table)
    }
}

/// Parse a balanced dot-bracket string.
impl TryFrom<&str> for PairTable {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut table = vec![None; s.chars().count()];
        let mut stack: Vec<usize> = Vec::new();
        for (i, c) in s.chars().enumerate() {
            match DotBracket::try_from(c)? {
                DotBracket::Unpaired => {}
                DotBracket::Open => stack.push(i),
                DotBracket::Close => {
                    let j = stack.pop().ok_or_else(|| {
                        StructureError::InvalidStructure(format!(
                            "unmatched ')' at position {i}"
                        ))
                    })?;
                    table[i] = Some(j as NAIDX);
                    table[j] = Some(i as NAIDX);
                }
            }
        }
        if let Some(&j) = stack.last() {
            return Err(StructureError::InvalidStructure(format!(
                "unmatched '(' at position {j}"
            )));
        }
        Ok(PairTable(table))
    }
}

/// Dot-bracket rendering.
impl fmt::Display for PairTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DotBracketVec::from(self))
    }
}
