/// Error correction block assembly and interleaving
use crate::encoder::reed_solomon::ReedSolomonGenerator;
use crate::encoder::tables::{ec_block_info, num_data_codewords, num_raw_codewords};
use crate::error::QrError;
use crate::models::{ECLevel, Version};

/// Split `data` into error correction blocks, append each block's ECC and
/// interleave the result into the final codeword sequence.
///
/// Short blocks come first and hold one data codeword less than long blocks;
/// that missing column is skipped while interleaving. The output fills the
/// symbol's raw capacity exactly.
pub fn add_ecc_and_interleave(
    version: Version,
    ec_level: ECLevel,
    data: &[u8],
) -> Result<Vec<u8>, QrError> {
    let expected = num_data_codewords(version, ec_level);
    if data.len() != expected {
        return Err(QrError::DataLengthMismatch {
            expected,
            actual: data.len(),
        });
    }

    let info = ec_block_info(version, ec_level);
    let raw_codewords = num_raw_codewords(version);
    let num_short_blocks = info.num_blocks - raw_codewords % info.num_blocks;
    let short_block_len = raw_codewords / info.num_blocks;
    let short_data_len = short_block_len - info.ecc_per_block;
    let generator = ReedSolomonGenerator::new(info.ecc_per_block)?;

    let mut blocks: Vec<Vec<u8>> = Vec::with_capacity(info.num_blocks);
    let mut offset = 0;
    for i in 0..info.num_blocks {
        let data_len = short_data_len + usize::from(i >= num_short_blocks);
        let chunk = &data[offset..offset + data_len];
        offset += data_len;

        let mut block = Vec::with_capacity(short_block_len + 1);
        block.extend_from_slice(chunk);
        if i < num_short_blocks {
            // Placeholder keeps every block the same length; skipped below
            block.push(0);
        }
        block.extend(generator.remainder(chunk));
        blocks.push(block);
    }

    let mut result = Vec::with_capacity(raw_codewords);
    for i in 0..=short_block_len {
        for (j, block) in blocks.iter().enumerate() {
            if i != short_data_len || j >= num_short_blocks {
                result.push(block[i]);
            }
        }
    }

    assert_eq!(result.len(), raw_codewords, "interleaved length mismatch");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_single_block_appends_ecc() {
        let data = [
            32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17,
        ];
        let codewords = add_ecc_and_interleave(v(1), ECLevel::M, &data).unwrap();
        assert_eq!(&codewords[..16], &data);
        assert_eq!(
            &codewords[16..],
            &[196, 35, 39, 119, 235, 215, 231, 226, 93, 23]
        );
    }

    #[test]
    fn test_rejects_wrong_data_length() {
        let err = add_ecc_and_interleave(v(1), ECLevel::L, &[0u8; 20]).unwrap_err();
        assert_eq!(
            err,
            QrError::DataLengthMismatch {
                expected: 19,
                actual: 20
            }
        );
    }

    #[test]
    fn test_interleaves_short_and_long_blocks() {
        // 5-Q: two blocks of 15 data codewords, then two of 16
        let data: Vec<u8> = (0..62).collect();
        let codewords = add_ecc_and_interleave(v(5), ECLevel::Q, &data).unwrap();
        assert_eq!(codewords.len(), 134);
        assert_eq!(&codewords[..10], &[0, 15, 30, 46, 1, 16, 31, 47, 2, 17]);
        // Column 15 exists only in the long blocks
        assert_eq!(&codewords[60..62], &[45, 61]);
    }

    #[test]
    fn test_fills_raw_capacity_for_every_version() {
        for version in Version::all() {
            for level in ECLevel::ALL {
                let data = vec![0xA5; num_data_codewords(version, level)];
                let codewords = add_ecc_and_interleave(version, level, &data).unwrap();
                assert_eq!(codewords.len(), num_raw_codewords(version));
            }
        }
    }
}
