//! The rk_structure crate.
//!
//! Representations and analyses of RNA secondary structure:
//!  - validated sequences and pair tables
//!  - the `SecondaryStructure` entity and its invariant checker
//!  - pseudoknot classification (generic and "simple" in Akutsu's sense)
//!  - distance and similarity metrics between structures
//!  - dot-bracket and connect-table rendering, text sequence loading
//!

mod connect;
mod dotbracket;
mod error;
mod fasta;
mod knots;
mod metrics;
mod pair_set;
mod pair_table;
mod sequence;
mod structure;

pub use connect::*;
pub use dotbracket::*;
pub use error::*;
pub use fasta::*;
pub use knots::*;
pub use metrics::*;
pub use pair_set::*;
pub use pair_table::*;
pub use sequence::*;
pub use structure::*;


/// Nucleic Acid INdeX: we use `u16` (0 to 65k), which is plenty for RNA.
/// Should you ever want to fold longer sequences, beware that `P1KEY` needs to
/// be *twice as large* (in bits) as `NAIDX`, since pairs `(NAIDX, NAIDX)` are
/// compacted into one `P1KEY`.
pub type NAIDX = u16;

/// Pair key. Must be >= 2×`NAIDX` in bit width so we can safely pack two indices.
pub type P1KEY = u32;

/// Compile-time sanity check: 2×NAIDX bits must fit into P1KEY.
const _: () = {
    debug_assert!(2 * NAIDX::BITS <= P1KEY::BITS);
};
