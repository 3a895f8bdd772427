//! SubBytes substitution: an affine map over GF(2) applied to the field inverse.
//!
//! Nothing is tabulated; every call inverts the byte with extended Euclid and
//! then applies the circulant matrix and constant vector below.

use crate::gf256::inverse;

/// 8-bit affine map `x -> lin * x ⊕ bias` with both parts written as bit vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Affine8 {
    /// Matrix rows, each packed so the leftmost written column is the high bit.
    lin: [u8; 8],
    /// Constant vector, row `i` in position `i`.
    bias: [u8; 8],
}

/// FIPS-197 circulant matrix and the constant {63}, least significant bit first.
const SBOX_AFFINE: Affine8 = Affine8 {
    lin: [
        0b1000_1111,
        0b1100_0111,
        0b1110_0011,
        0b1111_0001,
        0b1111_1000,
        0b0111_1100,
        0b0011_1110,
        0b0001_1111,
    ],
    bias: [1, 1, 0, 0, 0, 1, 1, 0],
};

impl Affine8 {
    /// Applies the map to `bits`, given most significant first.
    ///
    /// Column `j` of the matrix multiplies bit `j` counted from the least
    /// significant end, so the output comes back least significant first.
    fn apply(&self, bits: &[u8; 8]) -> [u8; 8] {
        let mut out = [0u8; 8];
        for (i, (row, bias)) in self.lin.iter().zip(self.bias.iter()).enumerate() {
            let mut total = 0u8;
            for j in 0..8 {
                total ^= (row >> (7 - j)) & 1 & bits[7 - j];
            }
            out[i] = total ^ bias;
        }
        out
    }
}

/// Substitutes one byte.
pub fn sub_byte(byte: u8) -> u8 {
    let inv = inverse(byte).padded(8);
    let mut bits = [0u8; 8];
    for (bit, &coeff) in bits.iter_mut().zip(inv.coeffs()) {
        *bit = coeff as u8;
    }

    let mut out = SBOX_AFFINE.apply(&bits);
    // Swap positions i and 7 - i to return to most-significant-first order.
    out.reverse();
    out.iter().fold(0u8, |acc, &bit| (acc << 1) | bit)
}

/// Evaluates [`sub_byte`] on every input, indexed by input byte.
pub fn generate_table() -> [u8; 256] {
    core::array::from_fn(|i| sub_byte(i as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_substitutions() {
        assert_eq!(sub_byte(0x00), 0x63);
        assert_eq!(sub_byte(0x01), 0x7c);
        assert_eq!(sub_byte(0x10), 0xca);
        assert_eq!(sub_byte(0x53), 0xed);
        assert_eq!(sub_byte(0xff), 0x16);
    }

    #[test]
    fn first_row_matches_fips197() {
        let table = generate_table();
        let expected: [u8; 16] = [
            0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7,
            0xab, 0x76,
        ];
        assert_eq!(&table[..16], &expected);
    }

    #[test]
    fn table_is_a_permutation() {
        let table = generate_table();
        let mut seen = [false; 256];
        for &value in table.iter() {
            assert!(!seen[value as usize], "duplicate output {value:#04x}");
            seen[value as usize] = true;
        }
    }

    #[test]
    fn no_fixed_points() {
        let table = generate_table();
        for (input, &output) in table.iter().enumerate() {
            assert_ne!(input as u8, output);
            assert_ne!(input as u8 ^ 0xff, output);
        }
    }

    #[test]
    fn affine_of_zero_is_constant() {
        // {63}, least significant bit first.
        assert_eq!(SBOX_AFFINE.apply(&[0; 8]), [1, 1, 0, 0, 0, 1, 1, 0]);
    }
}
