//! Reed-Solomon codeword generation over GF(256)
//!
//! QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1 (0x11D)
//! and generator element alpha = 2.

use crate::error::QrError;

/// GF(256) field operations using log/exp tables
pub struct Gf256;

static LOG_TABLE: [u8; 256] = [
    0, 0, 1, 25, 2, 50, 26, 198, 3, 223, 51, 238, 27, 104, 199, 75, 4, 100, 224, 14, 52, 141, 239,
    129, 28, 193, 105, 248, 200, 8, 76, 113, 5, 138, 101, 47, 225, 36, 15, 33, 53, 147, 142, 218,
    240, 18, 130, 69, 29, 181, 194, 125, 106, 39, 249, 185, 201, 154, 9, 120, 77, 228, 114, 166, 6,
    191, 139, 98, 102, 221, 48, 253, 226, 152, 37, 179, 16, 145, 34, 136, 54, 208, 148, 206, 143,
    150, 219, 189, 241, 210, 19, 92, 131, 56, 70, 64, 30, 66, 182, 163, 195, 72, 126, 110, 107, 58,
    40, 84, 250, 133, 186, 61, 202, 94, 155, 159, 10, 21, 121, 43, 78, 212, 229, 172, 115, 243,
    167, 87, 7, 112, 192, 247, 140, 128, 99, 13, 103, 74, 222, 237, 49, 197, 254, 24, 227, 165,
    153, 119, 38, 184, 180, 124, 17, 68, 146, 217, 35, 32, 137, 46, 55, 63, 209, 91, 149, 188, 207,
    205, 144, 135, 151, 178, 220, 252, 190, 97, 242, 86, 211, 171, 20, 42, 93, 158, 132, 60, 57,
    83, 71, 109, 65, 162, 31, 45, 67, 216, 183, 123, 164, 118, 196, 23, 73, 236, 127, 12, 111, 246,
    108, 161, 59, 82, 41, 157, 85, 170, 251, 96, 134, 177, 187, 204, 62, 90, 203, 89, 95, 176, 156,
    169, 160, 81, 11, 245, 22, 235, 122, 117, 44, 215, 79, 174, 213, 233, 230, 231, 173, 232, 116,
    214, 244, 234, 168, 80, 88, 175,
];

static EXP_TABLE: [u8; 256] = [
    1, 2, 4, 8, 16, 32, 64, 128, 29, 58, 116, 232, 205, 135, 19, 38, 76, 152, 45, 90, 180, 117,
    234, 201, 143, 3, 6, 12, 24, 48, 96, 192, 157, 39, 78, 156, 37, 74, 148, 53, 106, 212, 181,
    119, 238, 193, 159, 35, 70, 140, 5, 10, 20, 40, 80, 160, 93, 186, 105, 210, 185, 111, 222, 161,
    95, 190, 97, 194, 153, 47, 94, 188, 101, 202, 137, 15, 30, 60, 120, 240, 253, 231, 211, 187,
    107, 214, 177, 127, 254, 225, 223, 163, 91, 182, 113, 226, 217, 175, 67, 134, 17, 34, 68, 136,
    13, 26, 52, 104, 208, 189, 103, 206, 129, 31, 62, 124, 248, 237, 199, 147, 59, 118, 236, 197,
    151, 51, 102, 204, 133, 23, 46, 92, 184, 109, 218, 169, 79, 158, 33, 66, 132, 21, 42, 84, 168,
    77, 154, 41, 82, 164, 85, 170, 73, 146, 57, 114, 228, 213, 183, 115, 230, 209, 191, 99, 198,
    145, 63, 126, 252, 229, 215, 179, 123, 246, 241, 255, 227, 219, 171, 75, 150, 49, 98, 196, 149,
    55, 110, 220, 165, 87, 174, 65, 130, 25, 50, 100, 200, 141, 7, 14, 28, 56, 112, 224, 221, 167,
    83, 166, 81, 162, 89, 178, 121, 242, 249, 239, 195, 155, 43, 86, 172, 69, 138, 9, 18, 36, 72,
    144, 61, 122, 244, 245, 247, 243, 251, 235, 203, 139, 11, 22, 44, 88, 176, 125, 250, 233, 207,
    131, 27, 54, 108, 216, 173, 71, 142, 1,
];

impl Gf256 {
    /// Multiply two field elements
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        let log_b = LOG_TABLE[b as usize] as usize;
        EXP_TABLE[(log_a + log_b) % 255]
    }

    /// alpha^n, reduced modulo the multiplicative group order
    pub fn exp(n: usize) -> u8 {
        EXP_TABLE[n % 255]
    }
}

/// Generator polynomial for a fixed number of ECC codewords.
///
/// Coefficients are stored highest power first with the leading 1 omitted,
/// so `coefficients().len() == degree`. The roots are alpha^0 .. alpha^(degree-1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReedSolomonGenerator {
    coefficients: Vec<u8>,
}

impl ReedSolomonGenerator {
    /// Build the generator of the given degree (1..=255)
    pub fn new(degree: usize) -> Result<Self, QrError> {
        if !(1..=255).contains(&degree) {
            return Err(QrError::DegreeOutOfRange(degree));
        }

        // Start from the monomial x^0 and multiply by (x - alpha^i) for each root
        let mut coefficients = vec![0u8; degree];
        coefficients[degree - 1] = 1;
        let mut root = 1u8;
        for _ in 0..degree {
            for j in 0..degree {
                coefficients[j] = Gf256::mul(coefficients[j], root);
                if j + 1 < degree {
                    coefficients[j] ^= coefficients[j + 1];
                }
            }
            root = Gf256::mul(root, 0x02);
        }

        Ok(Self { coefficients })
    }

    /// Number of ECC codewords produced
    pub fn degree(&self) -> usize {
        self.coefficients.len()
    }

    /// Non-leading coefficients, highest power first
    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients
    }

    /// ECC codewords for `data`: the remainder of data(x) * x^degree / g(x).
    pub fn remainder(&self, data: &[u8]) -> Vec<u8> {
        let degree = self.degree();
        let mut remainder = vec![0u8; degree];
        for &d in data {
            let factor = d ^ remainder[0];
            remainder.copy_within(1.., 0);
            remainder[degree - 1] = 0;
            for (r, &coef) in remainder.iter_mut().zip(&self.coefficients) {
                *r ^= Gf256::mul(coef, factor);
            }
        }
        remainder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Carry-less shift-and-add multiply reduced by 0x11D
    fn mul_reference(x: u8, y: u8) -> u8 {
        let mut z: u16 = 0;
        for i in (0..8).rev() {
            z = (z << 1) ^ ((z >> 7) * 0x11D);
            z ^= ((y as u16 >> i) & 1) * x as u16;
        }
        assert_eq!(z >> 8, 0);
        z as u8
    }

    /// Evaluate a descending-order polynomial at `x`
    fn eval(poly: &[u8], x: u8) -> u8 {
        poly.iter().fold(0u8, |acc, &c| Gf256::mul(acc, x) ^ c)
    }

    #[test]
    fn test_gf256_identities() {
        for x in 0..=255u8 {
            assert_eq!(Gf256::mul(x, 1), x);
            assert_eq!(Gf256::mul(x, 0), 0);
            assert_eq!(Gf256::mul(0, x), 0);
        }
    }

    #[test]
    fn test_gf256_matches_reference_and_commutes() {
        for x in 0..=255u8 {
            for y in 0..=255u8 {
                let z = Gf256::mul(x, y);
                assert_eq!(z, mul_reference(x, y), "{x} * {y}");
                assert_eq!(z, Gf256::mul(y, x));
            }
        }
    }

    #[test]
    fn test_gf256_exp() {
        assert_eq!(Gf256::exp(0), 1);
        assert_eq!(Gf256::exp(8), 0x1D);
        assert_eq!(Gf256::exp(255), 1);
        assert_eq!(Gf256::exp(260), Gf256::exp(5));
    }

    #[test]
    fn test_generator_degree_range() {
        assert_eq!(ReedSolomonGenerator::new(0), Err(QrError::DegreeOutOfRange(0)));
        assert_eq!(ReedSolomonGenerator::new(256), Err(QrError::DegreeOutOfRange(256)));
        assert_eq!(ReedSolomonGenerator::new(255).unwrap().degree(), 255);
    }

    #[test]
    fn test_generator_degree_7() {
        let generator = ReedSolomonGenerator::new(7).unwrap();
        assert_eq!(generator.coefficients(), &[127, 122, 154, 164, 11, 68, 117]);
    }

    #[test]
    fn test_generator_roots() {
        let generator = ReedSolomonGenerator::new(10).unwrap();
        let mut full = vec![1u8];
        full.extend_from_slice(generator.coefficients());
        for i in 0..10 {
            assert_eq!(eval(&full, Gf256::exp(i)), 0, "alpha^{i} should be a root");
        }
        assert_ne!(eval(&full, Gf256::exp(10)), 0);
    }

    #[test]
    fn test_remainder_of_zero_data() {
        for degree in [1, 7, 10, 30, 68] {
            let generator = ReedSolomonGenerator::new(degree).unwrap();
            let ecc = generator.remainder(&[0u8; 40]);
            assert_eq!(ecc.len(), degree);
            assert!(ecc.iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_remainder_hello_world_1m() {
        // "HELLO WORLD" in alphanumeric mode, version 1-M
        let data = [
            32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17,
        ];
        let generator = ReedSolomonGenerator::new(10).unwrap();
        assert_eq!(
            generator.remainder(&data),
            vec![196, 35, 39, 119, 235, 215, 231, 226, 93, 23]
        );
    }

    #[test]
    fn test_codeword_is_multiple_of_generator() {
        let data: Vec<u8> = (0..26u8).map(|i| i.wrapping_mul(37) ^ 0x5A).collect();
        let generator = ReedSolomonGenerator::new(16).unwrap();
        let mut codeword = data.clone();
        codeword.extend(generator.remainder(&data));
        for i in 0..16 {
            assert_eq!(eval(&codeword, Gf256::exp(i)), 0);
        }
    }
}
