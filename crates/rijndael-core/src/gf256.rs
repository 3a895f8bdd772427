//! GF(2^8) byte algebra on bit polynomials.
//!
//! A byte is expanded into its binary coefficients, most significant set bit
//! first; zero expands to the empty polynomial. Addition and multiplication are
//! the GF(2) polynomial operations, and [`reduce`] folds overflow past x^7 back
//! using x^8 = x^4 + x^3 + x + 1.

use crate::poly::{Poly, PolyInverse};

/// Coefficient modulus for every byte polynomial.
pub const FIELD_CHAR: u32 = 2;

/// x^8 + x^4 + x^3 + x + 1.
pub const IRREDUCIBLE: Poly = Poly::from_array([1, 0, 0, 0, 1, 1, 0, 1, 1]);

/// x^9 folded down: x^5 + x^4 + x^2 + x.
const X9_REDUCED: Poly = Poly::from_array([1, 1, 0, 1, 1, 0]);

/// Indices of x^4, x^3, x^1 and x^0 in an 8-coefficient polynomial.
const X8_TAPS: [usize; 4] = [3, 4, 6, 7];

/// Expands `byte` into binary coefficients, most significant set bit first.
pub fn byte_to_field(byte: u8) -> Poly {
    let width = (u8::BITS - byte.leading_zeros()) as usize;
    let mut poly = Poly::zeroed(width);
    for (i, coeff) in poly.coeffs_mut().iter_mut().enumerate() {
        *coeff = u32::from((byte >> (width - 1 - i)) & 1);
    }
    poly
}

/// Reads binary coefficients back as a byte. Leading zeros are allowed.
///
/// # Panics
///
/// If more than eight significant coefficients remain, i.e. the polynomial
/// was never reduced.
pub fn field_to_byte(poly: &Poly) -> u8 {
    let significant = poly.trimmed();
    assert!(
        significant.len() <= 8,
        "unreduced polynomial {poly:?} cannot be read as a byte"
    );
    significant.coeffs().iter().fold(0u8, |acc, &c| {
        debug_assert!(c < FIELD_CHAR, "coefficient {c} is not a bit");
        (acc << 1) | c as u8
    })
}

/// Coefficient-wise sum mod 2 (XOR), aligned at the low-order end.
pub fn field_add(x: &Poly, y: &Poly) -> Poly {
    x.add_mod(y, FIELD_CHAR)
}

/// Full product mod 2 with `len(x) + len(y) - 1` coefficients, unreduced.
pub fn field_multiply(x: &Poly, y: &Poly) -> Poly {
    x.mul_mod(y, FIELD_CHAR)
}

/// Folds a product that overflowed past x^7.
///
/// Nine coefficients: the x^8 coefficient is dropped and, when set, x^4 + x^3
/// + x + 1 is added. Ten coefficients: only ever x^9 from the round-constant
/// path, so the fixed reduction x^5 + x^4 + x^2 + x is returned whatever the
/// input holds. Anything shorter passes through untouched.
pub fn reduce(total: &Poly) -> Poly {
    match total.len() {
        9 => {
            let mut reduced = total.skip_leading(1);
            if total.coeffs()[0] == 1 {
                let coeffs = reduced.coeffs_mut();
                for &tap in &X8_TAPS {
                    coeffs[tap] ^= 1;
                }
            }
            reduced
        }
        10 => X9_REDUCED,
        _ => *total,
    }
}

/// Multiplicative inverse of `byte` in field form. Zero maps to eight zero bits.
pub fn inverse(byte: u8) -> Poly {
    aes_inverse(byte_to_field(byte)).find_inverse()
}

fn aes_inverse(divisor: Poly) -> PolyInverse {
    PolyInverse::new_unchecked(divisor, IRREDUCIBLE, FIELD_CHAR)
}
