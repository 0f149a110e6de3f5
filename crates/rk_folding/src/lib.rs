//! The rk_folding crate.
//!
//! Maximum base-pairing prediction for RNA sequences:
//!  - crossing-free folding (Nussinov-style interval dynamic program)
//!  - simple-pseudoknot-aware folding (exhaustive two-cut search over
//!    nested cross-region bands, falling back to the crossing-free result)
//!
//! Both predictors are deterministic: re-running on the same sequence
//! yields a bit-identical pairing.

mod nussinov;
mod pseudoknot;

pub use nussinov::*;
pub use pseudoknot::*;
