//! Distance and similarity between two structures.

use crate::PairSet;
use crate::SecondaryStructure;
use crate::StructureError;

/// Bottleneck distance between the pair sets of `a` and `b`.
///
/// For every pair (i1,j1) of `a`, take the closest pair (i2,j2) of `b`
/// under the Chebyshev distance `max(|i1-i2|, |j1-j2|)`; the result is the
/// largest of those minima. Pairs are compared in canonical i < j
/// orientation; aligning the sorted coordinates never increases the
/// Chebyshev value, so the orientation choice does not change the result.
///
/// The sequences of `a` and `b` need not match; only pairing geometry is
/// compared. Quirk, kept on purpose: if either structure has no pairs at
/// all, the distance is 0 rather than an error or a maximal sentinel.
pub fn distance(a: &SecondaryStructure, b: &SecondaryStructure) -> usize {
    let pa = PairSet::from(a.pair_table());
    let pb = PairSet::from(b.pair_table());
    if pa.is_empty() || pb.is_empty() {
        return 0;
    }
    pa.to_vec()
        .iter()
        .map(|p| {
            pb.iter()
                .map(|q| {
                    let di = (p.i() as usize).abs_diff(q.i() as usize);
                    let dj = (p.j() as usize).abs_diff(q.j() as usize);
                    di.max(dj)
                })
                .min()
                .unwrap_or(0)
        })
        .max()
        .unwrap_or(0)
}

/// Fraction of positions on which `a` and `b` agree (same partner index, or
/// both unpaired), in [0, 1].
///
/// Requires equal sequence lengths; two zero-length structures are fully
/// similar.
pub fn similarity(
    a: &SecondaryStructure,
    b: &SecondaryStructure,
) -> Result<f64, StructureError> {
    if a.len() != b.len() {
        return Err(StructureError::LengthMismatch(a.len(), b.len()));
    }
    if a.is_empty() {
        return Ok(1.0);
    }
    let matching = a
        .pair_table()
        .iter()
        .zip(b.pair_table().iter())
        .filter(|(x, y)| x == y)
        .count();
    Ok(matching as f64 / a.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RnaSequence;

    fn structure(bases: &str, pairs: &[(usize, usize)]) -> SecondaryStructure {
        let seq = RnaSequence::new("m", bases).unwrap();
        SecondaryStructure::make(seq, pairs).unwrap()
    }

    #[test]
    fn test_distance_identical() {
        let a = structure("GGGCCC", &[(0, 5), (1, 4)]);
        assert_eq!(distance(&a, &a), 0);
    }

    #[test]
    fn test_distance_shifted_pair() {
        let a = structure("GGGCCC", &[(0, 5), (1, 4)]);
        let b = structure("GGGCCC", &[(0, 4)]);
        // (0,5) -> (0,4): 1; (1,4) -> (0,4): 1
        assert_eq!(distance(&a, &b), 1);
        assert_eq!(distance(&b, &a), 1);
    }

    #[test]
    fn test_distance_unequal_lengths_allowed() {
        let a = structure("GC", &[(0, 1)]);
        let b = structure("GGGCCC", &[(2, 3)]);
        assert_eq!(distance(&a, &b), 2);
    }

    #[test]
    fn test_distance_zero_when_either_unfolded() {
        let folded = structure("GGGCCC", &[(0, 5)]);
        let open = structure("GGGCCC", &[]);
        assert_eq!(distance(&folded, &open), 0);
        assert_eq!(distance(&open, &folded), 0);
        assert_eq!(distance(&open, &open), 0);
    }

    #[test]
    fn test_similarity_full_and_partial() {
        let a = structure("GGCC", &[(0, 3), (1, 2)]);
        let b = structure("GGCC", &[(0, 3)]);
        assert_eq!(similarity(&a, &a).unwrap(), 1.0);
        // positions 0 and 3 agree, 1 and 2 do not
        assert_eq!(similarity(&a, &b).unwrap(), 0.5);
    }

    #[test]
    fn test_similarity_empty_sequences() {
        let a = structure("", &[]);
        assert_eq!(similarity(&a, &a).unwrap(), 1.0);
    }

    #[test]
    fn test_similarity_length_mismatch() {
        let a = structure("GC", &[]);
        let b = structure("GGCC", &[]);
        assert_eq!(
            similarity(&a, &b),
            Err(StructureError::LengthMismatch(2, 4))
        );
    }
}
