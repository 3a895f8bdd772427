//! Polynomials over a prime field and the extended Euclidean inverse.
//!
//! Coefficients are stored most-significant power first, so `[1, 0, 2]` is
//! `x^2 + 2`. The length encodes degree + 1 and the empty sequence is the zero
//! polynomial. Buffers have a fixed capacity; nothing here allocates.

use core::fmt;

use log::{trace, warn};

use crate::error::FieldError;

/// Maximum number of coefficients a [`Poly`] can hold.
pub const POLY_CAPACITY: usize = 16;

/// Coefficient count of the inverse of zero, one byte of bits.
pub const ZERO_INVERSE_LEN: usize = 8;

/// Polynomial with at most [`POLY_CAPACITY`] coefficients, most significant first.
///
/// Leading zeros are preserved unless explicitly trimmed: the coefficient count
/// is observable and some callers depend on it.
#[derive(Clone, Copy)]
pub struct Poly {
    coeffs: [u32; POLY_CAPACITY],
    len: usize,
}

impl Poly {
    /// The zero polynomial (no coefficients).
    pub const fn zero() -> Self {
        Self {
            coeffs: [0; POLY_CAPACITY],
            len: 0,
        }
    }

    /// Builds a polynomial from a fixed-size coefficient array.
    pub const fn from_array<const N: usize>(coeffs: [u32; N]) -> Self {
        assert!(N <= POLY_CAPACITY, "coefficient array exceeds polynomial capacity");
        let mut buf = [0u32; POLY_CAPACITY];
        let mut i = 0;
        while i < N {
            buf[i] = coeffs[i];
            i += 1;
        }
        Self {
            coeffs: buf,
            len: N,
        }
    }

    /// Builds a polynomial from a coefficient slice, keeping leading zeros.
    pub fn from_coeffs(coeffs: &[u32]) -> Result<Self, FieldError> {
        if coeffs.len() > POLY_CAPACITY {
            return Err(FieldError::CapacityExceeded { len: coeffs.len() });
        }
        let mut poly = Self::zeroed(coeffs.len());
        poly.coeffs[..coeffs.len()].copy_from_slice(coeffs);
        Ok(poly)
    }

    /// All-zero polynomial with `len` coefficients.
    pub(crate) fn zeroed(len: usize) -> Self {
        assert!(
            len <= POLY_CAPACITY,
            "polynomial length {len} exceeds capacity {POLY_CAPACITY}"
        );
        Self {
            coeffs: [0; POLY_CAPACITY],
            len,
        }
    }

    /// `x^degree`: `degree + 1` coefficients, the leading one set.
    ///
    /// # Panics
    ///
    /// If `degree + 1` exceeds [`POLY_CAPACITY`].
    pub fn monomial(degree: usize) -> Self {
        let mut poly = Self::zeroed(degree + 1);
        poly.coeffs[0] = 1;
        poly
    }

    /// Coefficients, most significant first.
    #[inline]
    pub fn coeffs(&self) -> &[u32] {
        &self.coeffs[..self.len]
    }

    #[inline]
    pub(crate) fn coeffs_mut(&mut self) -> &mut [u32] {
        &mut self.coeffs[..self.len]
    }

    /// Number of stored coefficients (degree + 1 when trimmed).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for the zero polynomial in its canonical empty form.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Copy without leading zero coefficients.
    pub fn trimmed(&self) -> Self {
        let lead = self.coeffs().iter().take_while(|&&c| c == 0).count();
        self.skip_leading(lead)
    }

    /// Copy with the `count` most significant coefficients removed.
    pub(crate) fn skip_leading(&self, count: usize) -> Self {
        let mut out = Self::zeroed(self.len - count);
        out.coeffs[..out.len].copy_from_slice(&self.coeffs[count..self.len]);
        out
    }

    /// Left-pads with zeros up to `len` coefficients. Longer inputs are returned as-is.
    pub fn padded(&self, len: usize) -> Self {
        if self.len >= len {
            return *self;
        }
        let mut out = Self::zeroed(len);
        out.coeffs[len - self.len..len].copy_from_slice(self.coeffs());
        out
    }

    /// Every coefficient reduced into `0..p`.
    pub fn reduced(&self, p: u32) -> Self {
        let mut out = *self;
        for c in out.coeffs_mut() {
            *c = mod_p(u64::from(*c), p);
        }
        out
    }

    /// Coefficient-wise sum mod `p`, aligned at the low-order end.
    ///
    /// The result has the length of the longer operand.
    pub fn add_mod(&self, rhs: &Self, p: u32) -> Self {
        let (long, short) = if rhs.len > self.len {
            (rhs, self)
        } else {
            (self, rhs)
        };
        let mut out = *long;
        let offset = long.len - short.len;
        for (dst, &c) in out.coeffs_mut()[offset..].iter_mut().zip(short.coeffs()) {
            *dst = mod_p(u64::from(*dst) + u64::from(c), p);
        }
        out
    }

    /// Full convolution mod `p`, `len(self) + len(rhs) - 1` coefficients.
    ///
    /// No reduction against any modulus polynomial is applied.
    ///
    /// # Panics
    ///
    /// If the product needs more than [`POLY_CAPACITY`] coefficients, e.g. two
    /// nine-coefficient operands.
    pub fn mul_mod(&self, rhs: &Self, p: u32) -> Self {
        let mut out = Self::zeroed((self.len + rhs.len).saturating_sub(1));
        for (j, &a) in self.coeffs().iter().enumerate() {
            for (k, &b) in rhs.coeffs().iter().enumerate() {
                let acc = u64::from(out.coeffs[j + k]) + u64::from(a) * u64::from(b);
                out.coeffs[j + k] = mod_p(acc, p);
            }
        }
        out
    }

    /// Long division mod `p`, returning `(quotient, remainder)`.
    ///
    /// The quotient always has `len(self) - len(divisor) + 1` slots. A quotient
    /// term is only produced when the leading coefficients divide evenly as
    /// integers; otherwise division stops and the partial remainder is returned.
    /// The remainder is trimmed after every subtraction.
    pub fn div_rem(&self, divisor: &Self, p: u32) -> (Self, Self) {
        let divisor = divisor.trimmed();
        assert!(!divisor.is_empty(), "division by the zero polynomial");

        let lead = u64::from(divisor.coeffs[0]);
        let mut quotient = Self::zeroed((self.len + 1).saturating_sub(divisor.len));
        let mut rem = *self;
        while rem.len >= divisor.len {
            let top = u64::from(rem.coeffs[0]);
            let q_coeff = top / lead;
            if q_coeff * lead != top {
                break;
            }
            let power = quotient.len - (rem.len - divisor.len + 1);
            quotient.coeffs[power] = mod_p(q_coeff, p);
            for (r, &d) in rem.coeffs.iter_mut().zip(divisor.coeffs()) {
                let sub = mod_p(u64::from(d) * q_coeff, p);
                *r = mod_p(u64::from(*r) + u64::from(p) - u64::from(sub), p);
            }
            rem = rem.trimmed();
        }
        (quotient, rem)
    }

    /// Trimmed remainder of `self` modulo `modulus` over GF(p).
    pub fn rem(&self, modulus: &Self, p: u32) -> Self {
        self.div_rem(modulus, p).1.trimmed()
    }
}

impl Default for Poly {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Poly {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs() == other.coeffs()
    }
}

impl Eq for Poly {}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.coeffs()).finish()
    }
}

#[inline]
fn mod_p(value: u64, p: u32) -> u32 {
    (value % u64::from(p)) as u32
}

fn is_prime(p: u32) -> bool {
    if p < 2 {
        return false;
    }
    let p = u64::from(p);
    let mut d = 2u64;
    while d * d <= p {
        if p % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Inverse of `divisor` modulo `dividend` over GF(p), via extended Euclid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolyInverse {
    divisor: Poly,
    dividend: Poly,
    p: u32,
}

impl PolyInverse {
    /// Validates the inputs and prepares an inverse computation.
    ///
    /// Coefficients are reduced mod `p` and leading zeros dropped before the
    /// checks run.
    pub fn new(divisor: Poly, dividend: Poly, p: u32) -> Result<Self, FieldError> {
        if !is_prime(p) {
            return Err(FieldError::InvalidModulus(p));
        }
        let divisor = divisor.reduced(p).trimmed();
        let dividend = dividend.reduced(p).trimmed();
        if dividend.is_empty() {
            return Err(FieldError::EmptyDividend);
        }
        if divisor.len() > dividend.len() {
            return Err(FieldError::DivisorTooLong {
                divisor: divisor.len(),
                dividend: dividend.len(),
            });
        }
        Ok(Self::new_unchecked(divisor, dividend, p))
    }

    /// Skips validation; callers pass trimmed inputs and a prime `p`.
    pub(crate) const fn new_unchecked(divisor: Poly, dividend: Poly, p: u32) -> Self {
        Self {
            divisor,
            dividend,
            p,
        }
    }

    /// Computes `inv` with `divisor * inv ≡ 1 (mod dividend)`.
    ///
    /// The zero divisor maps to [`ZERO_INVERSE_LEN`] zero coefficients whatever
    /// the modulus. Of the last two
    /// back-substitution values, the one with more coefficients is returned; on
    /// a tie the later one wins. For odd `p` the result may be the inverse up
    /// to sign, since back-substitution adds rather than subtracts.
    pub fn find_inverse(&self) -> Poly {
        if self.divisor.is_empty() {
            return Poly::zeroed(ZERO_INVERSE_LEN);
        }

        let mut quotients = [Poly::zero(); POLY_CAPACITY];
        let count = self.euclid(&mut quotients);

        let mut add = Poly::from_array([0]);
        let mut mult = Poly::from_array([1]);
        for quotient in &quotients[..count] {
            let next = multiply_add(quotient, &mult, &add, self.p);
            add = mult;
            mult = next;
        }

        if mult.len() >= add.len() {
            mult
        } else {
            add
        }
    }

    /// Runs the Euclidean algorithm, recording quotients oldest first.
    ///
    /// The step that leaves an empty remainder is not recorded. A step that
    /// stalls on uneven leading coefficients ends the loop; its partial quotient
    /// is kept when it has a nonzero term. Returns the number of quotients
    /// written.
    fn euclid(&self, quotients: &mut [Poly; POLY_CAPACITY]) -> usize {
        let mut dividend = self.dividend;
        let mut divisor = self.divisor;
        let mut count = 0;
        loop {
            let (quotient, remainder) = dividend.div_rem(&divisor, self.p);
            if remainder.is_empty() {
                break;
            }
            // Partial division leaves the degree where it was; another pass
            // would divide the same pair again.
            if remainder.len() >= divisor.len() {
                warn!(
                    "euclid stalled: leading coefficient of {:?} does not divide {:?} over GF({})",
                    divisor, remainder, self.p
                );
                if quotient.coeffs().iter().any(|&c| c != 0) {
                    quotients[count] = quotient;
                    count += 1;
                }
                break;
            }
            trace!(
                "euclid step {}: quotient {:?}, remainder {:?}",
                count,
                quotient,
                remainder
            );
            quotients[count] = quotient;
            count += 1;
            dividend = divisor;
            divisor = remainder;
        }
        count
    }
}

/// `quotient * mult + add`, mod `p`. The sum keeps the product's length.
fn multiply_add(quotient: &Poly, mult: &Poly, add: &Poly, p: u32) -> Poly {
    let mut out = quotient.mul_mod(mult, p);
    let overlap = out.len().min(add.len());
    let (out_len, add_len) = (out.len(), add.len());
    for i in 0..overlap {
        let dst = &mut out.coeffs[out_len - 1 - i];
        *dst = mod_p(u64::from(*dst) + u64::from(add.coeffs[add_len - 1 - i]), p);
    }
    out
}
