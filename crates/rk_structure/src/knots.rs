//! Pseudoknot classification.
//!
//! Two analyses over a pair table:
//!  - `is_pseudoknot`: generic crossing detection, the balanced-bracket
//!    stack scan, O(n).
//!  - `is_simple_pseudoknot`: Akutsu's "simple pseudoknot" class, decided
//!    by exhaustive search over the two cut points partitioning the
//!    sequence into three regions, O(n^3).
//!
//! Both take validated tables; a self-paired index is a programmer error,
//! not a classification outcome.

use crate::PairTable;

/// Returns true if the pairing contains at least one crossing pair.
///
/// Left-to-right scan with a stack of expected closing indices: an opening
/// position pushes its partner, a closing position must match the most
/// recently opened pairing. The stack is local to the call.
pub fn is_pseudoknot(pt: &PairTable) -> bool {
    let mut open: Vec<usize> = Vec::new();
    for (i, &j_opt) in pt.iter().enumerate() {
        let Some(j) = j_opt else { continue };
        let j = j as usize;
        assert!(j != i, "position {i} is paired with itself");
        if j > i {
            open.push(j);
        } else {
            match open.last() {
                Some(&expected) if expected == i => {
                    open.pop();
                }
                _ => return true,
            }
        }
    }
    false
}

/// Returns true if the pairing forms a simple pseudoknot.
///
/// A structure is a simple pseudoknot if some pair of cut points
/// `0 < cut1 < cut2 < n-1` splits the sequence into regions
/// `[0,cut1)`, `[cut1,cut2)`, `[cut2,n)` such that no pair links region 1
/// directly to region 3, and the region-1/region-2 and region-2/region-3
/// pair bands are each internally non-crossing and fully closed within
/// their scan scope. An empty pairing returns false by convention.
///
/// Every (cut1, cut2) combination is tried; both conditions are O(n), so
/// the whole search is O(n^3).
pub fn is_simple_pseudoknot(pt: &PairTable) -> bool {
    let n = pt.len();
    if pt.num_pairs() == 0 || n < 4 {
        return false;
    }
    for cut1 in 1..n - 2 {
        for cut2 in cut1 + 1..n - 1 {
            if regions_link_adjacent(pt, cut1, cut2)
                && band_is_nested(pt, 0, cut1, cut2)
                && band_is_nested(pt, cut1, cut2, n)
            {
                return true;
            }
        }
    }
    false
}

/// Condition 1: no pair connects region 1 to region 3.
fn regions_link_adjacent(pt: &PairTable, cut1: usize, cut2: usize) -> bool {
    for (i, &j_opt) in pt.iter().enumerate() {
        let Some(j) = j_opt else { continue };
        let j = j as usize;
        if j > i && i < cut1 && j >= cut2 {
            return false;
        }
    }
    true
}

/// Condition 2 for one cross-region band: scanning `[lo, hi)`, the pairs
/// with one endpoint in `[lo, mid)` and the other in `[mid, hi)` must close
/// in last-opened-first order, and every one of them must close before the
/// scope ends.
fn band_is_nested(pt: &PairTable, lo: usize, mid: usize, hi: usize) -> bool {
    let mut open: Vec<usize> = Vec::new();
    for i in lo..hi {
        let Some(j) = pt.partner(i) else { continue };
        let j = j as usize;
        if i < mid && (mid..hi).contains(&j) {
            open.push(j);
        } else if i >= mid && (lo..mid).contains(&j) {
            match open.last() {
                Some(&expected) if expected == i => {
                    open.pop();
                }
                _ => return false,
            }
        }
    }
    open.is_empty()
}
