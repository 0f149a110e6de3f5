//! Dot-bracket notation.
//!
//! One character per sequence position: `(` for the lower index of a pair,
//! `)` for the higher, `.` for unpaired. Pseudoknotted pair tables render
//! with the same per-position rule; the resulting string is then not a
//! balanced-bracket expression and cannot be parsed back.

use std::fmt;

use crate::PairTable;
use crate::StructureError;

/// The state of one position in dot-bracket notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotBracket {
    Unpaired,
    Open,
    Close,
}

impl From<DotBracket> for char {
    fn from(db: DotBracket) -> Self {
        match db {
            DotBracket::Unpaired => '.',
            DotBracket::Open => '(',
            DotBracket::Close => ')',
        }
    }
}

impl TryFrom<char> for DotBracket {
    type Error = StructureError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(DotBracket::Unpaired),
            '(' => Ok(DotBracket::Open),
            ')' => Ok(DotBracket::Close),
            _ => Err(StructureError::InvalidStructure(format!(
                "invalid dot-bracket character '{c}'"
            ))),
        }
    }
}

/// A dot-bracket string as a vector of per-position states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotBracketVec(pub Vec<DotBracket>);

impl DotBracketVec {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DotBracket> {
        self.0.iter()
    }
}

impl From<&PairTable> for DotBracketVec {
    fn from(pt: &PairTable) -> Self {
        let mut dbv = vec![DotBracket::Unpaired; pt.len()];
        for (i, &j_opt) in pt.iter().enumerate() {
            if let Some(j) = j_opt {
                if i < j as usize {
                    dbv[i] = DotBracket::Open;
                    dbv[j as usize] = DotBracket::Close;
                }
            }
        }
        DotBracketVec(dbv)
    }
}

impl fmt::Display for DotBracketVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &db in &self.0 {
            write!(f, "{}", char::from(db))?;
        }
        Ok(())
    }
}
