//! Pair and PairSet definitions.
//!
//! Compact integer-based representation of base pairs, used where a
//! structure is handled as a set of pairs rather than positionally:
//! folder tracebacks collect into a `PairSet`, and the distance metric
//! compares two of them.
//!
//! A `Pair` is two 16-bit indices (`NAIDX`) packed into a 32-bit key
//! (`P1KEY`) for cheap set storage. Indices are 0-based throughout,
//! consistent with `PairTable` and the folding matrices.

use std::fmt;

use nohash_hasher::IntSet;

use crate::NAIDX;
use crate::P1KEY;
use crate::PairTable;

/// A base pair (i, j) with i < j.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    i: NAIDX,
    j: NAIDX,
}

impl Pair {
    /// Create a new pair (i, j). Panics in debug if i >= j.
    pub fn new(i: NAIDX, j: NAIDX) -> Self {
        debug_assert!(i < j);
        Pair { i, j }
    }

    /// Return the 5'-side index.
    pub fn i(&self) -> NAIDX {
        self.i
    }

    /// Return the 3'-side index.
    pub fn j(&self) -> NAIDX {
        self.j
    }

    /// Compact 32-bit key encoding both indices.
    pub fn key(&self) -> P1KEY {
        ((self.i as P1KEY) << NAIDX::BITS) | (self.j as P1KEY)
    }

    /// Decode a key back into a `Pair`.
    pub fn from_key(key: P1KEY) -> Self {
        let i = (key >> NAIDX::BITS) as NAIDX;
        let j = (key & NAIDX::MAX as P1KEY) as NAIDX;
        debug_assert!(i < j);
        Pair { i, j }
    }
}

/// A collection of base pairs stored as compact integer keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairSet {
    length: usize,
    pairs: IntSet<P1KEY>,
}

impl PairSet {
    /// Create an empty pair set for a given sequence length.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            pairs: IntSet::default(),
        }
    }

    /// Number of pairs contained in the set.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Insert a new pair; returns true if it was newly inserted.
    pub fn insert(&mut self, pair: Pair) -> bool {
        debug_assert!((pair.j() as usize) < self.length);
        self.pairs.insert(pair.key())
    }

    /// Check if a pair exists in the set.
    pub fn contains(&self, pair: &Pair) -> bool {
        self.pairs.contains(&pair.key())
    }

    /// Iterator over all pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Pair> + '_ {
        self.pairs.iter().map(|&k| Pair::from_key(k))
    }

    /// All pairs as a Vec, sorted by (i, j) for deterministic inspection.
    pub fn to_vec(&self) -> Vec<Pair> {
        let mut v: Vec<_> = self.iter().collect();
        v.sort_unstable_by_key(|p| (p.i(), p.j()));
        v
    }

    /// The sorted pair list in the `(usize, usize)` form the
    /// `SecondaryStructure` constructor consumes.
    pub fn to_pairs(&self) -> Vec<(usize, usize)> {
        self.to_vec()
            .iter()
            .map(|p| (p.i() as usize, p.j() as usize))
            .collect()
    }

    /// Underlying sequence length.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl From<&PairTable> for PairSet {
    fn from(pt: &PairTable) -> Self {
        let mut pairs = IntSet::default();
        for (i, &j_opt) in pt.iter().enumerate() {
            let i = i as NAIDX;
            if let Some(j) = j_opt {
                if i < j {
                    pairs.insert(Pair::new(i, j).key());
                }
            }
        }
        Self {
            length: pt.len(),
            pairs,
        }
    }
}

impl fmt::Display for PairSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for pair in self.to_vec() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "({},{})", pair.i(), pair.j())?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_key_roundtrip() {
        let p = Pair::new(1, 42);
        assert_eq!(Pair::from_key(p.key()), p);
    }

    #[test]
    fn test_from_pair_table() {
        let pt = PairTable::try_from("((..))").unwrap();
        let ps = PairSet::from(&pt);

        let expected = vec![Pair::new(0, 5), Pair::new(1, 4)];
        assert_eq!(ps.length(), 6);
        assert_eq!(ps.to_vec(), expected);

        for p in &expected {
            assert!(ps.contains(p));
        }
        assert!(!ps.contains(&Pair::new(0, 4)));
    }

    #[test]
    fn test_to_pairs() {
        let pt = PairTable::try_from("(.)()").unwrap();
        let ps = PairSet::from(&pt);
        assert_eq!(ps.to_pairs(), vec![(0, 2), (3, 4)]);
    }

    #[test]
    fn test_display() {
        let pt = PairTable::try_from("((..))").unwrap();
        let ps = PairSet::from(&pt);
        assert_eq!(format!("{ps}"), "(0,5),(1,4)");
    }
}
