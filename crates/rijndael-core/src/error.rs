//! Precondition failures raised by the polynomial layer.

use thiserror::Error;

use crate::poly::POLY_CAPACITY;

/// Caller contract violations. None of these are retried: each one means the
/// inputs handed to the field arithmetic were malformed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    /// The polynomial being reduced against has no coefficients.
    #[error("dividend polynomial must not be empty")]
    EmptyDividend,
    /// The coefficient modulus is not a prime.
    #[error("coefficient modulus must be a prime, got {0}")]
    InvalidModulus(u32),
    /// The divisor has more coefficients than the dividend.
    #[error("divisor of length {divisor} is longer than dividend of length {dividend}")]
    DivisorTooLong {
        /// Coefficient count of the divisor.
        divisor: usize,
        /// Coefficient count of the dividend.
        dividend: usize,
    },
    /// More coefficients than a fixed-capacity polynomial can hold.
    #[error("polynomial of length {len} exceeds capacity of {} coefficients", POLY_CAPACITY)]
    CapacityExceeded {
        /// Requested coefficient count.
        len: usize,
    },
}
