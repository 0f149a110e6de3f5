//! Text sequence loading.
//!
//! A pure function from FASTA-style text to a validated `RnaSequence`.
//! The header line is optional; the name is the header up to the first
//! whitespace, so names handed to the core are always whitespace-free.
//! Bases are case-folded before validation.

use crate::RnaSequence;
use crate::StructureError;

/// Parse a single-record FASTA text into a validated sequence.
pub fn parse_fasta(text: &str) -> Result<RnaSequence, StructureError> {
    let mut name = String::new();
    let mut bases = String::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix('>') {
            name = header
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string();
        } else {
            bases.push_str(&line.to_ascii_uppercase());
        }
    }
    RnaSequence::new(&name, &bases)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_header() {
        let seq = parse_fasta(">tRNA-Phe sample record\nGGAC\nCUUG\n").unwrap();
        assert_eq!(seq.name(), "tRNA-Phe");
        assert_eq!(seq.bases(), "GGACCUUG");
    }

    #[test]
    fn test_parse_bare_sequence() {
        let seq = parse_fasta("accgu\n").unwrap();
        assert_eq!(seq.name(), "");
        assert_eq!(seq.bases(), "ACCGU");
    }

    #[test]
    fn test_parse_rejects_bad_base() {
        assert_eq!(
            parse_fasta(">x\nACGTN\n"),
            Err(StructureError::InvalidSequence('T'))
        );
    }
}
