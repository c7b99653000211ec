/// Working grid of typed modules
pub mod grid;
/// Packed bit matrix of the finished symbol
pub mod matrix;
/// Version, level, mask and symbol types
pub mod qr_code;

pub use grid::{Grid, Module, PatternKind};
pub use matrix::BitMatrix;
pub use qr_code::{ECLevel, MaskPattern, QrSymbol, SegmentMode, Version};
