use super::BitMatrix;
use crate::encoder::penalty::PenaltyReport;
use crate::error::QrError;

/// QR Code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest Model 2 version
    pub const MIN: Version = Version(1);
    /// Largest Model 2 version
    pub const MAX: Version = Version(40);

    /// Validate a version number
    pub fn new(number: u8) -> Result<Self, QrError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&number) {
            Ok(Self(number))
        } else {
            Err(QrError::VersionOutOfRange(number))
        }
    }

    /// Get the version number (1-40)
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Iterate all versions in ascending order
    pub fn all() -> impl Iterator<Item = Version> {
        (Self::MIN.0..=Self::MAX.0).map(Version)
    }
}

impl TryFrom<u8> for Version {
    type Error = QrError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// All levels in ordinal order
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Row index into the capacity tables
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    /// 2-bit code embedded in the format information (L=01, M=00, Q=11, H=10)
    pub fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 1,
            ECLevel::M => 0,
            ECLevel::Q => 3,
            ECLevel::H => 2,
        }
    }
}

/// Mask pattern (0-7)
///
/// `x` is the column and `y` the row of the module being tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaskPattern {
    /// (x + y) % 2 == 0
    Pattern0 = 0,
    /// y % 2 == 0
    Pattern1 = 1,
    /// x % 3 == 0
    Pattern2 = 2,
    /// (x + y) % 3 == 0
    Pattern3 = 3,
    /// (x/3 + y/2) % 2 == 0
    Pattern4 = 4,
    /// (x*y)%2 + (x*y)%3 == 0
    Pattern5 = 5,
    /// ((x*y)%2 + (x*y)%3) % 2 == 0
    Pattern6 = 6,
    /// ((x+y)%2 + (x*y)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All patterns in index order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from bits
    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::ALL.get(bits as usize).copied()
    }

    /// Pattern index (0-7)
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Check if module at column `x`, row `y` should be inverted
    pub fn is_masked(&self, x: usize, y: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (x + y) % 2 == 0,
            MaskPattern::Pattern1 => y % 2 == 0,
            MaskPattern::Pattern2 => x % 3 == 0,
            MaskPattern::Pattern3 => (x + y) % 3 == 0,
            MaskPattern::Pattern4 => (x / 3 + y / 2) % 2 == 0,
            MaskPattern::Pattern5 => (x * y) % 2 + (x * y) % 3 == 0,
            MaskPattern::Pattern6 => ((x * y) % 2 + (x * y) % 3) % 2 == 0,
            MaskPattern::Pattern7 => ((x + y) % 2 + (x * y) % 3) % 2 == 0,
        }
    }
}

impl TryFrom<i32> for MaskPattern {
    type Error = QrError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        u8::try_from(index)
            .ok()
            .and_then(Self::from_bits)
            .ok_or(QrError::InvalidMaskIndex(index))
    }
}

/// Segment encoding mode, as consumed by upstream segment encoders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentMode {
    /// Digits 0-9
    Numeric,
    /// 0-9, A-Z, space and $%*+-./:
    Alphanumeric,
    /// Arbitrary bytes
    Byte,
    /// Shift JIS double-byte characters
    Kanji,
    /// Extended Channel Interpretation designator
    Eci,
}

impl SegmentMode {
    /// 4-bit mode indicator
    pub fn mode_bits(&self) -> u8 {
        match self {
            SegmentMode::Numeric => 0x1,
            SegmentMode::Alphanumeric => 0x2,
            SegmentMode::Byte => 0x4,
            SegmentMode::Kanji => 0x8,
            SegmentMode::Eci => 0x7,
        }
    }

    /// Width of the character count field for a version
    pub fn char_count_bits(&self, version: Version) -> u8 {
        let widths: [u8; 3] = match self {
            SegmentMode::Numeric => [10, 12, 14],
            SegmentMode::Alphanumeric => [9, 11, 13],
            SegmentMode::Byte => [8, 16, 16],
            SegmentMode::Kanji => [8, 10, 12],
            SegmentMode::Eci => [0, 0, 0],
        };
        widths[(version.number() as usize + 7) / 17]
    }
}

/// Finished QR symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrSymbol {
    /// QR code version
    pub version: Version,
    /// Error correction level
    pub error_correction: ECLevel,
    /// Mask pattern applied to the data modules
    pub mask_pattern: MaskPattern,
    /// Module matrix (true = dark, false = light)
    pub modules: BitMatrix,
    /// Penalty report for every candidate mask, indexed by pattern
    pub penalties: Vec<PenaltyReport>,
}

impl QrSymbol {
    /// Side length in modules
    pub fn size(&self) -> usize {
        self.modules.width()
    }

    /// Module color at column `x`, row `y` (true = dark)
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.modules.get(x, y)
    }

    /// Penalty score of the chosen mask
    pub fn penalty(&self) -> u32 {
        self.penalties[self.mask_pattern.index() as usize].total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_size() {
        assert_eq!(Version::new(1).unwrap().size(), 21);
        assert_eq!(Version::new(2).unwrap().size(), 25);
        assert_eq!(Version::new(40).unwrap().size(), 177);
    }

    #[test]
    fn test_version_range() {
        assert_eq!(Version::new(0), Err(QrError::VersionOutOfRange(0)));
        assert_eq!(Version::new(41), Err(QrError::VersionOutOfRange(41)));
        assert_eq!(Version::all().count(), 40);
    }

    #[test]
    fn test_ec_level() {
        let codes: Vec<u8> = ECLevel::ALL.iter().map(|l| l.format_bits()).collect();
        assert_eq!(codes, vec![1, 0, 3, 2]);
        assert_eq!(ECLevel::H.ordinal(), 3);
    }

    #[test]
    fn test_mask_pattern() {
        let mask = MaskPattern::Pattern0;
        assert!(mask.is_masked(0, 0));
        assert!(!mask.is_masked(0, 1));
        assert!(mask.is_masked(1, 1));

        // Pattern1 depends on the row only, Pattern2 on the column only
        assert!(MaskPattern::Pattern1.is_masked(5, 0));
        assert!(!MaskPattern::Pattern1.is_masked(0, 1));
        assert!(MaskPattern::Pattern2.is_masked(3, 1));
        assert!(!MaskPattern::Pattern2.is_masked(1, 3));
    }

    #[test]
    fn test_mask_index_conversion() {
        assert_eq!(MaskPattern::try_from(7), Ok(MaskPattern::Pattern7));
        assert_eq!(MaskPattern::try_from(8), Err(QrError::InvalidMaskIndex(8)));
        assert_eq!(MaskPattern::try_from(-1), Err(QrError::InvalidMaskIndex(-1)));
    }

    #[test]
    fn test_segment_char_count_bits() {
        let v = |n| Version::new(n).unwrap();
        assert_eq!(SegmentMode::Numeric.char_count_bits(v(9)), 10);
        assert_eq!(SegmentMode::Numeric.char_count_bits(v(10)), 12);
        assert_eq!(SegmentMode::Byte.char_count_bits(v(26)), 16);
        assert_eq!(SegmentMode::Kanji.char_count_bits(v(27)), 12);
        assert_eq!(SegmentMode::Alphanumeric.mode_bits(), 0b0010);
    }
}
