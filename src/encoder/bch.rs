/// BCH codes protecting the format and version information fields
use crate::models::{ECLevel, MaskPattern, Version};

/// BCH(15,5) generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const FORMAT_GENERATOR: u32 = 0x537;
/// XOR mask that keeps the format field from being all zero
const FORMAT_MASK: u32 = 0x5412;
/// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const VERSION_GENERATOR: u32 = 0x1F25;

/// 15-bit format information for a level and mask.
///
/// `None` yields the blank field drawn before a mask has been chosen.
pub fn format_bits(ec_level: ECLevel, mask: Option<MaskPattern>) -> u16 {
    let Some(mask) = mask else {
        return 0;
    };
    let data = ((ec_level.format_bits() as u32) << 3) | mask.index() as u32;
    let bits = ((data << 10) | bch_remainder(data, FORMAT_GENERATOR, 10)) ^ FORMAT_MASK;
    assert!(bits >> 15 == 0, "format field {bits:#x} exceeds 15 bits");
    bits as u16
}

/// 18-bit version information (only drawn for versions 7 and up)
pub fn version_bits(version: Version) -> u32 {
    let data = version.number() as u32;
    let bits = (data << 12) | bch_remainder(data, VERSION_GENERATOR, 12);
    assert!(bits >> 18 == 0, "version field {bits:#x} exceeds 18 bits");
    bits
}

fn bch_remainder(data: u32, generator: u32, degree: u32) -> u32 {
    let mut rem = data;
    for _ in 0..degree {
        rem = (rem << 1) ^ (((rem >> (degree - 1)) & 1) * generator);
    }
    rem
}
