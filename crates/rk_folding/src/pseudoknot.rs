//! Simple-pseudoknot-aware base-pair maximization.
//!
//! Extends the crossing-free folder with one globally chosen pair of cut
//! points (cut1, cut2) splitting the sequence into three regions. Pairs
//! crossing from region 1 into region 2, and from region 2 into region 3,
//! are allowed as long as each cross-region band is internally nested, so
//! the result is always either crossing-free or a simple pseudoknot.
//!
//! Every cut combination `0 < cut1 < cut2 < n-1` is scored; a candidate
//! replaces the incumbent only when it strictly improves the pair count,
//! which keeps the crossing-free prediction as the fallback and makes the
//! lowest (cut1, cut2) win ties.

use ahash::AHashSet;
use ndarray::Array2;

use rk_structure::RnaSequence;
use rk_structure::SecondaryStructure;
use rk_structure::StructureError;
use rk_structure::watson_crick;

use crate::Nussinov;

/// Simple-pseudoknot-aware maximum-pairing folder.
pub struct KnotAware {
    best_pairs: Vec<(usize, usize)>,
    cuts: Option<(usize, usize)>,
}

impl From<&RnaSequence> for KnotAware {
    fn from(sequence: &RnaSequence) -> Self {
        let bases = sequence.bases().as_bytes();
        let n = bases.len();

        let mut best_pairs = Nussinov::from(sequence).pair_set().to_pairs();
        let mut cuts = None;

        if n >= 4 {
            for cut1 in 1..n - 2 {
                for cut2 in cut1 + 1..n - 1 {
                    let region1: Vec<usize> = (0..cut1).collect();
                    let region2_desc: Vec<usize> = (cut1..cut2).rev().collect();
                    let band1 = band_matching(bases, &region1, &region2_desc);

                    // region-2 indices taken by the first band are gone;
                    // no index ever serves both bands.
                    let taken: AHashSet<usize> = band1.iter().map(|&(_, j)| j).collect();
                    let region2: Vec<usize> =
                        (cut1..cut2).filter(|i| !taken.contains(i)).collect();
                    let region3_desc: Vec<usize> = (cut2..n).rev().collect();
                    let band2 = band_matching(bases, &region2, &region3_desc);

                    if band1.len() + band2.len() > best_pairs.len() {
                        best_pairs = band1.into_iter().chain(band2).collect();
                        cuts = Some((cut1, cut2));
                    }
                }
            }
        }

        best_pairs.sort_unstable();
        Self { best_pairs, cuts }
    }
}

impl KnotAware {
    /// Number of pairs in the prediction.
    pub fn max_pairs(&self) -> usize {
        self.best_pairs.len()
    }

    /// The chosen cut points, or `None` when the crossing-free fallback won.
    pub fn cuts(&self) -> Option<(usize, usize)> {
        self.cuts
    }

    /// Predict a maximum pairing that is crossing-free or forms a single
    /// simple pseudoknot.
    pub fn predict(sequence: &RnaSequence) -> Result<SecondaryStructure, StructureError> {
        let fold = KnotAware::from(sequence);
        match fold.cuts {
            Some((c1, c2)) => log::debug!(
                "knot-aware: {} pairs over {} nt, cuts ({c1},{c2})",
                fold.max_pairs(),
                sequence.len()
            ),
            None => log::debug!(
                "knot-aware: {} pairs over {} nt, crossing-free",
                fold.max_pairs(),
                sequence.len()
            ),
        }
        SecondaryStructure::make(sequence.clone(), &fold.best_pairs)
    }
}

/// Maximum nested matching between two index lists.
///
/// `left` ascends through the lower region, `right_desc` descends through
/// the upper one; a diagonal step in the suffix table pairs the current
/// ends, so matched pairs always nest around the boundary between the two
/// regions. The traceback prefers pairing, then skipping a left index,
/// then skipping a right index, which hands each left index the outermost
/// partner still available.
fn band_matching(bases: &[u8], left: &[usize], right_desc: &[usize]) -> Vec<(usize, usize)> {
    let p = left.len();
    let q = right_desc.len();
    if p == 0 || q == 0 {
        return Vec::new();
    }

    let mut m = Array2::from_elem((p + 1, q + 1), 0usize);
    for i in (0..p).rev() {
        for j in (0..q).rev() {
            let mut val = m[(i + 1, j)].max(m[(i, j + 1)]);
            if watson_crick(bases[left[i]], bases[right_desc[j]]) {
                val = val.max(1 + m[(i + 1, j + 1)]);
            }
            m[(i, j)] = val;
        }
    }

    let mut pairs = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < p && j < q {
        let val = m[(i, j)];
        if val == 0 {
            break;
        }
        if watson_crick(bases[left[i]], bases[right_desc[j]]) && val == 1 + m[(i + 1, j + 1)] {
            pairs.push((left[i], right_desc[j]));
            i += 1;
            j += 1;
        } else if val == m[(i + 1, j)] {
            i += 1;
        } else {
            j += 1;
        }
    }
    pairs
}
