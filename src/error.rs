/// Errors returned while constructing a QR symbol.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QrError {
    /// Version number outside 1..=40.
    #[error("version {0} out of range (expected 1..=40)")]
    VersionOutOfRange(u8),
    /// Reed-Solomon generator degree outside 1..=255.
    #[error("generator degree {0} out of range (expected 1..=255)")]
    DegreeOutOfRange(usize),
    /// Codeword sequence does not fill the symbol's raw capacity exactly.
    #[error("expected {expected} codewords for placement, got {actual}")]
    CodewordCountMismatch {
        /// Raw codeword capacity of the symbol
        expected: usize,
        /// Length that was passed in
        actual: usize,
    },
    /// Data codewords do not match the (version, level) data capacity.
    #[error("expected {expected} data codewords, got {actual}")]
    DataLengthMismatch {
        /// Data codeword capacity for the version and level
        expected: usize,
        /// Length that was passed in
        actual: usize,
    },
    /// Mask index outside 0..=7.
    #[error("mask index {0} out of range (expected 0..=7)")]
    InvalidMaskIndex(i32),
}
