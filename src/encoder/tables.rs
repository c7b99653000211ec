//! Capacity tables and formulas for Model 2 symbols

use crate::models::{ECLevel, Version};

/// Error correction block structure for one (version, level) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcBlockInfo {
    /// Number of error correction blocks
    pub num_blocks: usize,
    /// ECC codewords appended to each block
    pub ecc_per_block: usize,
}

// Tables from ISO/IEC 18004 (Model 2)
// Index: [ec_level][version]
const ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Error correction block structure for a version and level
pub fn ec_block_info(version: Version, ec_level: ECLevel) -> EcBlockInfo {
    let (idx, ver) = (ec_level.ordinal(), version.number() as usize);
    EcBlockInfo {
        num_blocks: NUM_ERROR_CORRECTION_BLOCKS[idx][ver] as usize,
        ecc_per_block: ECC_CODEWORDS_PER_BLOCK[idx][ver] as usize,
    }
}

/// Number of modules available for codeword bits (data + ECC + remainder bits)
/// once all function patterns are drawn.
pub fn num_raw_data_modules(version: Version) -> usize {
    let ver = version.number() as usize;
    let mut result = (16 * ver + 128) * ver + 64;
    if ver >= 2 {
        let num_align = ver / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if ver >= 7 {
            // Two 3x6 version information blocks
            result -= 36;
        }
    }
    result
}

/// Number of 8-bit codewords (data + ECC) the symbol holds
pub fn num_raw_codewords(version: Version) -> usize {
    num_raw_data_modules(version) / 8
}

/// Number of data codewords left once ECC codewords are reserved
pub fn num_data_codewords(version: Version, ec_level: ECLevel) -> usize {
    let info = ec_block_info(version, ec_level);
    num_raw_codewords(version) - info.ecc_per_block * info.num_blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_raw_data_modules() {
        assert_eq!(num_raw_data_modules(v(1)), 208);
        assert_eq!(num_raw_data_modules(v(2)), 359);
        assert_eq!(num_raw_data_modules(v(6)), 1383);
        assert_eq!(num_raw_data_modules(v(7)), 1568);
        assert_eq!(num_raw_data_modules(v(40)), 29648);
    }

    #[test]
    fn test_version_info_adjustment_starts_at_7() {
        // Without the version-information term, version 7 would hold 36 more modules
        let ver = 7usize;
        let a = ver / 7 + 2;
        let without = (16 * ver + 128) * ver + 64 - ((25 * a - 10) * a - 55);
        assert_eq!(num_raw_data_modules(v(7)), without - 36);

        let ver = 6usize;
        let a = ver / 7 + 2;
        let without = (16 * ver + 128) * ver + 64 - ((25 * a - 10) * a - 55);
        assert_eq!(num_raw_data_modules(v(6)), without);
    }

    #[test]
    fn test_data_codewords() {
        let v1: Vec<usize> = ECLevel::ALL
            .iter()
            .map(|&l| num_data_codewords(v(1), l))
            .collect();
        assert_eq!(v1, vec![19, 16, 13, 9]);
        assert_eq!(num_data_codewords(v(5), ECLevel::Q), 62);
        assert_eq!(num_data_codewords(v(40), ECLevel::L), 2956);
        assert_eq!(num_data_codewords(v(40), ECLevel::H), 1276);
    }

    #[test]
    fn test_tables_have_no_sentinels_in_range() {
        for version in Version::all() {
            for level in ECLevel::ALL {
                let info = ec_block_info(version, level);
                assert!(info.num_blocks >= 1);
                assert!(info.ecc_per_block >= 7);
                assert!(num_data_codewords(version, level) > 0);
            }
        }
    }
}
