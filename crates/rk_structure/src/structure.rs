//! The validated secondary-structure entity.
//!
//! A `SecondaryStructure` couples a sequence with a pairing that has passed
//! the representation invariant: matching length, no self-pairs, symmetric
//! partners in range, and Watson-Crick chemistry on every pair. Construction
//! is the only place the invariant runs; afterwards the value is immutable
//! and can be shared freely.

use crate::NAIDX;
use crate::PairTable;
use crate::RnaSequence;
use crate::StructureError;
use crate::is_rna_base;
use crate::watson_crick;

/// Check a pairing against its sequence. Runs in O(n).
///
/// Order of checks per index: unpaired is always fine; otherwise the
/// partner must not be the index itself, must be in range, must point back,
/// and the two bases must be complementary. The alphabet re-check is
/// defensive; `RnaSequence` construction already guarantees it.
fn validate(sequence: &RnaSequence, pairing: &PairTable) -> Result<(), StructureError> {
    if pairing.len() != sequence.len() {
        return Err(StructureError::InvalidStructure(format!(
            "pairing length {} does not match sequence length {}",
            pairing.len(),
            sequence.len()
        )));
    }
    let bases = sequence.bases().as_bytes();
    for (i, &j_opt) in pairing.iter().enumerate() {
        if !is_rna_base(bases[i]) {
            return Err(StructureError::InvalidSequence(bases[i] as char));
        }
        let Some(j) = j_opt else { continue };
        let j = j as usize;
        if j == i {
            return Err(StructureError::InvalidStructure(format!(
                "position {i} is paired with itself"
            )));
        }
        if j >= pairing.len() {
            return Err(StructureError::InvalidStructure(format!(
                "partner {j} of position {i} is out of range"
            )));
        }
        if pairing.partner(j) != Some(i as NAIDX) {
            return Err(StructureError::InvalidStructure(format!(
                "positions {i} and {j} are not paired symmetrically"
            )));
        }
        if !watson_crick(bases[i], bases[j]) {
            return Err(StructureError::InvalidStructure(format!(
                "{}-{} at ({i},{j}) is not a Watson-Crick pair",
                bases[i] as char, bases[j] as char
            )));
        }
    }
    Ok(())
}

/// An immutable (sequence, pairing) pair satisfying the structure invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondaryStructure {
    sequence: RnaSequence,
    pairing: PairTable,
}

impl SecondaryStructure {
    /// Build a structure from an unordered list of index pairs.
    ///
    /// The list is turned into a positional table (index reuse is a
    /// `ConstructionConflict`), then validated against the sequence.
    pub fn make(
        sequence: RnaSequence,
        pairs: &[(usize, usize)],
    ) -> Result<Self, StructureError> {
        let pairing = PairTable::from_pairs(sequence.len(), pairs)?;
        validate(&sequence, &pairing)?;
        Ok(Self { sequence, pairing })
    }

    pub fn bases(&self) -> &str {
        self.sequence.bases()
    }

    pub fn name(&self) -> &str {
        self.sequence.name()
    }

    /// The owning sequence value.
    pub fn sequence(&self) -> RnaSequence {
        self.sequence.clone()
    }

    /// Borrowed view of the pairing.
    pub fn pair_table(&self) -> &PairTable {
        &self.pairing
    }

    /// Defensive copy of the partner array.
    pub fn pairing(&self) -> Vec<Option<NAIDX>> {
        self.pairing.to_vec()
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Number of pairs, each symmetric pair counted once.
    pub fn num_pairs(&self) -> usize {
        self.pairing.num_pairs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(bases: &str) -> RnaSequence {
        RnaSequence::new("test", bases).unwrap()
    }

    #[test]
    fn test_make_valid() {
        let ss = SecondaryStructure::make(seq("GGGCCC"), &[(0, 5), (1, 4), (2, 3)]).unwrap();
        assert_eq!(ss.num_pairs(), 3);
        assert_eq!(ss.bases(), "GGGCCC");
        assert_eq!(ss.name(), "test");
        assert_eq!(ss.pairing()[0], Some(5));
    }

    #[test]
    fn test_make_unordered_input() {
        // order of the pair list does not matter
        let a = SecondaryStructure::make(seq("GGCC"), &[(1, 2), (0, 3)]).unwrap();
        let b = SecondaryStructure::make(seq("GGCC"), &[(0, 3), (1, 2)]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_make_rejects_non_watson_crick() {
        assert!(matches!(
            SecondaryStructure::make(seq("GU"), &[(0, 1)]),
            Err(StructureError::InvalidStructure(_))
        ));
    }

    #[test]
    fn test_make_rejects_self_pair() {
        assert!(matches!(
            SecondaryStructure::make(seq("ACGU"), &[(2, 2)]),
            Err(StructureError::InvalidStructure(_))
        ));
    }

    #[test]
    fn test_make_rejects_index_reuse() {
        assert_eq!(
            SecondaryStructure::make(seq("GGCC"), &[(0, 3), (0, 2)]),
            Err(StructureError::ConstructionConflict(0))
        );
    }

    #[test]
    fn test_symmetry_roundtrip() {
        let ss = SecondaryStructure::make(seq("AGGCCU"), &[(0, 5), (1, 4)]).unwrap();
        let pairing = ss.pairing();
        for (i, &j_opt) in pairing.iter().enumerate() {
            if let Some(j) = j_opt {
                assert_eq!(pairing[j as usize], Some(i as NAIDX));
            }
        }
        let paired = pairing.iter().filter(|p| p.is_some()).count();
        assert_eq!(ss.num_pairs(), paired / 2);
    }

    #[test]
    fn test_pairing_is_a_copy() {
        let ss = SecondaryStructure::make(seq("GC"), &[(0, 1)]).unwrap();
        let mut copy = ss.pairing();
        copy[0] = None;
        assert_eq!(ss.pairing()[0], Some(1));
    }

    #[test]
    fn test_empty_structure() {
        let ss = SecondaryStructure::make(seq(""), &[]).unwrap();
        assert!(ss.is_empty());
        assert_eq!(ss.num_pairs(), 0);
    }
}
