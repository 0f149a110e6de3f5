//! Nussinov-style crossing-free base-pair maximization.

use ndarray::Array2;

use rk_structure::NAIDX;
use rk_structure::Pair;
use rk_structure::PairSet;
use rk_structure::RnaSequence;
use rk_structure::SecondaryStructure;
use rk_structure::StructureError;
use rk_structure::watson_crick;

/// Crossing-free maximum-pairing folder.
///
/// `best[(i, j)]` holds the maximum number of Watson-Crick pairs a
/// crossing-free structure can place on the closed interval `[i, j]`:
///
/// `best[i][j] = max(best[i+1][j],
///                   max over k in (i, j] pairable with i of
///                       1 + best[i+1][k-1] + best[k+1][j])`
///
/// Ties go to the earliest option in that enumeration order (the unpaired
/// branch, then ascending k), which makes the traceback reproducible.
pub struct Nussinov {
    bases: Vec<u8>,
    best: Array2<usize>,
}

impl From<&RnaSequence> for Nussinov {
    fn from(sequence: &RnaSequence) -> Self {
        let bases = sequence.bases().as_bytes().to_vec();
        let best = fill(&bases);
        Self { bases, best }
    }
}

impl Nussinov {
    /// Maximum number of pairs over the whole sequence.
    pub fn max_pairs(&self) -> usize {
        let n = self.bases.len();
        if n < 2 { 0 } else { self.best[(0, n - 1)] }
    }

    /// Recover the realized pairing from the table.
    pub fn pair_set(&self) -> PairSet {
        let n = self.bases.len();
        let mut pairs = PairSet::new(n);
        if n >= 2 {
            traceback(0, n - 1, &self.best, &self.bases, &mut pairs);
        }
        pairs
    }

    /// Predict a crossing-free maximum-pairing structure.
    pub fn predict(sequence: &RnaSequence) -> Result<SecondaryStructure, StructureError> {
        let dp = Nussinov::from(sequence);
        log::debug!(
            "nussinov: {} pairs over {} nt",
            dp.max_pairs(),
            sequence.len()
        );
        SecondaryStructure::make(sequence.clone(), &dp.pair_set().to_pairs())
    }
}

fn fill(bases: &[u8]) -> Array2<usize> {
    let n = bases.len();
    let mut best = Array2::from_elem((n, n), 0);
    for l in 1..n {
        for i in 0..n - l {
            let j = i + l;
            let mut max_val = best[(i + 1, j)];
            for k in i + 1..=j {
                if watson_crick(bases[i], bases[k]) {
                    let inner = if k > i + 1 { best[(i + 1, k - 1)] } else { 0 };
                    let right = if k < j { best[(k + 1, j)] } else { 0 };
                    max_val = max_val.max(1 + inner + right);
                }
            }
            best[(i, j)] = max_val;
        }
    }
    best
}

fn traceback(
    i: usize,
    j: usize,
    best: &Array2<usize>,
    bases: &[u8],
    pairs: &mut PairSet,
) {
    if i >= j {
        return;
    }
    let best_ij = best[(i, j)];
    if best_ij == best[(i + 1, j)] {
        traceback(i + 1, j, best, bases, pairs);
        return;
    }
    for k in i + 1..=j {
        if !watson_crick(bases[i], bases[k]) {
            continue;
        }
        let inner = if k > i + 1 { best[(i + 1, k - 1)] } else { 0 };
        let right = if k < j { best[(k + 1, j)] } else { 0 };
        if best_ij == 1 + inner + right {
            pairs.insert(Pair::new(i as NAIDX, k as NAIDX));
            if k > i + 1 {
                traceback(i + 1, k - 1, best, bases, pairs);
            }
            if k < j {
                traceback(k + 1, j, best, bases, pairs);
            }
            return;
        }
    }
    unreachable!("inconsistent folding table at ({i},{j})");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rk_structure::DotBracketVec;
    use rk_structure::is_pseudoknot;

    fn fold(bases: &str) -> SecondaryStructure {
        let seq = RnaSequence::new("t", bases).unwrap();
        Nussinov::predict(&seq).unwrap()
    }

    fn dot_bracket(ss: &SecondaryStructure) -> String {
        format!("{}", DotBracketVec::from(ss.pair_table()))
    }

    #[test]
    fn test_hairpin() {
        assert_eq!(dot_bracket(&fold("AAACCCUUU")), "(((...)))");
    }

    #[test]
    fn test_two_helices() {
        assert_eq!(dot_bracket(&fold("AAUUGGCC")), "(())(())");
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(dot_bracket(&fold("")), "");
    }

    #[test]
    fn test_no_complementary_bases() {
        let ss = fold("AAAA");
        assert_eq!(ss.num_pairs(), 0);
        assert_eq!(dot_bracket(&ss), "....");
    }

    #[test]
    fn test_single_base() {
        assert_eq!(dot_bracket(&fold("G")), ".");
    }

    #[test]
    fn test_result_is_crossing_free() {
        for bases in ["GGACCUUG", "GCGCGCGCGC", "AUAUGCGCAU"] {
            let ss = fold(bases);
            assert!(!is_pseudoknot(ss.pair_table()), "crossing in {bases}");
        }
    }

    #[test]
    fn test_deterministic() {
        let seq = RnaSequence::new("t", "GCAUGCAUGCAU").unwrap();
        let a = Nussinov::predict(&seq).unwrap();
        let b = Nussinov::predict(&seq).unwrap();
        assert_eq!(a.pairing(), b.pairing());
    }

    #[test]
    fn test_max_pairs_matches_structure() {
        let seq = RnaSequence::new("t", "GGGAAACCC").unwrap();
        let dp = Nussinov::from(&seq);
        let ss = Nussinov::predict(&seq).unwrap();
        assert_eq!(dp.max_pairs(), ss.num_pairs());
        assert_eq!(dp.max_pairs(), 3);
    }
}
