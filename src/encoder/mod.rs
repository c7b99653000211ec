//! QR symbol construction modules
//!
//! This module contains the stages that turn codewords into a finished symbol:
//! - Error correction (Reed-Solomon remainders, block interleaving)
//! - Function patterns (finder, timing, alignment, format and version info)
//! - Zigzag codeword placement
//! - Mask generation, penalty scoring and mask selection

/// BCH codes for format and version info
pub mod bch;
pub(crate) mod config;
/// Function pattern drawing (finder/timing/alignment/format/version)
pub mod function_patterns;
/// ECC block assembly and interleaving
pub mod interleave;
/// Mask pattern grids
pub mod mask;
/// Zigzag codeword placement and read-back
pub mod placement;
/// Four-rule mask penalty scoring
pub mod penalty;
/// Reed-Solomon codeword generation
pub mod reed_solomon;
/// Step-wise symbol construction and mask selection
pub mod symbol;
/// ISO/IEC 18004 tables (ECC codewords/blocks) and capacity formulas
pub mod tables;
