//! Connect-table (CT-style) rendering.
//!
//! One 1-indexed row per position:
//! `position base previous next partner-or-0 position`, derived purely
//! from the structure accessors. The previous index of the first row and
//! the next index of the last row are 0.

use std::fmt::Write;

use crate::SecondaryStructure;

/// Render a structure as a connect table.
pub fn connect_table(ss: &SecondaryStructure) -> String {
    let n = ss.len();
    let bases = ss.bases().as_bytes();
    let mut out = String::new();
    let _ = writeln!(out, "{n}\t{}", ss.name());
    for (i, j_opt) in ss.pairing().iter().enumerate() {
        let pos = i + 1;
        let prev = i;
        let next = if pos == n { 0 } else { pos + 1 };
        let partner = j_opt.map_or(0, |j| j as usize + 1);
        let _ = writeln!(
            out,
            "{pos}\t{}\t{prev}\t{next}\t{partner}\t{pos}",
            bases[i] as char
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RnaSequence;

    #[test]
    fn test_connect_table() {
        let seq = RnaSequence::new("mini", "GAC").unwrap();
        let ss = SecondaryStructure::make(seq, &[(0, 2)]).unwrap();
        let expected = "3\tmini\n\
                        1\tG\t0\t2\t3\t1\n\
                        2\tA\t1\t3\t0\t2\n\
                        3\tC\t2\t0\t1\t3\n";
        assert_eq!(connect_table(&ss), expected);
    }

    #[test]
    fn test_connect_table_empty() {
        let seq = RnaSequence::new("none", "").unwrap();
        let ss = SecondaryStructure::make(seq, &[]).unwrap();
        assert_eq!(connect_table(&ss), "0\tnone\n");
    }
}
