//! AES-128 built from explicit GF(2) polynomial arithmetic.
//!
//! No lookup tables are involved: the S-box inverts every byte with a generic
//! extended-Euclid routine over GF(p) and applies the FIPS-197 affine map, and
//! MixColumns multiplies bit polynomials before folding them back into a byte.
//! The crate provides:
//! - Polynomial arithmetic over a prime field with a fixed-capacity buffer.
//! - GF(2^8) byte algebra and the AES key schedule.
//! - The round primitives, a stepwise round engine, and block encryption with
//!   an optional trace of every intermediate state.
//!
//! Decryption is not provided, and nothing here is constant-time.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod error;
pub mod gf256;
mod key;
pub mod poly;
mod round;
mod sbox;
mod state;

pub use crate::cipher::{encrypt, encrypt_traced, encrypt_with_schedule, Trace};
pub use crate::error::FieldError;
pub use crate::key::{round_constant, KeySchedule, SCHEDULE_WORDS};
pub use crate::poly::{Poly, PolyInverse, POLY_CAPACITY, ZERO_INVERSE_LEN};
pub use crate::round::{
    add_round_key, mix_columns, shift_rows, sub_bytes, RoundEngine, RoundRecord, Stage, ROUNDS,
};
pub use crate::sbox::{generate_table, sub_byte};
pub use crate::state::{xor_in_place, State, Word};
