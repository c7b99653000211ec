//! RustQR encode - QR code symbol construction in pure Rust
//!
//! Turns a version, an error correction level and a block of codewords into a
//! finished Model 2 QR symbol: function patterns, zigzag data placement,
//! Reed-Solomon error correction and penalty-driven mask selection.
//!
//! Splitting text into segments and rendering the symbol are left to callers.
//!
//! # Example
//! ```
//! use rust_qr_encode::{ECLevel, encode};
//!
//! // 1-L holds 19 data codewords
//! let symbol = encode(1, ECLevel::L, &[0u8; 19]).unwrap();
//! assert_eq!(symbol.size(), 21);
//! assert!(symbol.get(0, 0)); // finder corner is dark
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code encoding modules (error correction, patterns, placement, masking)
pub mod encoder;
/// Error type shared by all encoder stages
pub mod error;
/// Core data structures (Grid, BitMatrix, Version, ECLevel, etc.)
pub mod models;

pub use encoder::penalty::PenaltyReport;
pub use encoder::reed_solomon::{Gf256, ReedSolomonGenerator};
pub use encoder::symbol::SymbolBuilder;
pub use encoder::tables::{num_data_codewords, num_raw_data_modules};
pub use error::QrError;
pub use models::{BitMatrix, ECLevel, Grid, MaskPattern, Module, QrSymbol, Version};

use encoder::config;
use encoder::interleave::add_ecc_and_interleave;

/// Encode data codewords into a QR symbol
///
/// # Arguments
/// * `version` - Symbol version (1-40)
/// * `ec_level` - Error correction level
/// * `data` - Exactly `num_data_codewords(version, ec_level)` bytes, already
///   segment-encoded and padded
///
/// # Returns
/// The finished symbol using the lowest-penalty mask
pub fn encode(version: u8, ec_level: ECLevel, data: &[u8]) -> Result<QrSymbol, QrError> {
    Encoder::new().encode(version, ec_level, data)
}

/// Build a QR symbol from the full interleaved codeword sequence
///
/// `codewords` must hold exactly `num_raw_data_modules(version) / 8` bytes
/// (data and ECC codewords, already interleaved).
pub fn encode_codewords(
    version: u8,
    ec_level: ECLevel,
    codewords: &[u8],
) -> Result<QrSymbol, QrError> {
    Encoder::new().encode_codewords(version, ec_level, codewords)
}

/// Encoder with mask and parallelism options
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    /// Mask to apply instead of the lowest-penalty one
    mask: Option<MaskPattern>,
    /// Explicit parallelism setting; `None` defers to the environment
    parallel: Option<bool>,
}

impl Encoder {
    /// Create an encoder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a specific mask pattern
    pub fn with_mask(mut self, mask: MaskPattern) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Score mask candidates in parallel (same result as sequential)
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Encode data codewords (adds ECC and interleaves first)
    pub fn encode(&self, version: u8, ec_level: ECLevel, data: &[u8]) -> Result<QrSymbol, QrError> {
        let checked = Version::new(version)?;
        let codewords = add_ecc_and_interleave(checked, ec_level, data)?;
        self.encode_codewords(version, ec_level, &codewords)
    }

    /// Encode a full interleaved codeword sequence
    pub fn encode_codewords(
        &self,
        version: u8,
        ec_level: ECLevel,
        codewords: &[u8],
    ) -> Result<QrSymbol, QrError> {
        let mut builder = SymbolBuilder::new(version, ec_level)?;
        builder.place_codewords(codewords)?;
        let parallel = self.use_parallel(builder.version());
        Ok(builder.finish(self.mask, parallel))
    }

    fn use_parallel(&self, version: Version) -> bool {
        self.parallel.unwrap_or_else(|| {
            config::parallel_masks() && version.number() >= config::parallel_min_version()
        })
    }
}
