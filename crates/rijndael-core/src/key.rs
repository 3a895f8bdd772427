//! AES-128 key schedule.

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::gf256::{field_to_byte, reduce};
use crate::poly::Poly;
use crate::sbox::sub_byte;
use crate::state::{xor_in_place, State, Word};

/// Number of words in an AES-128 key schedule.
pub const SCHEDULE_WORDS: usize = 44;

/// Expanded key: 44 four-byte words, four per round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeySchedule {
    #[cfg_attr(feature = "serde", serde(with = "serde_big_array::BigArray"))]
    words: [Word; SCHEDULE_WORDS],
}

impl KeySchedule {
    /// Expands a key given as a column-major 4×4 matrix.
    pub fn expand(key: &State) -> Self {
        let mut words = [[0u8; 4]; SCHEDULE_WORDS];
        words[..4].copy_from_slice(key.columns());

        for i in 4..SCHEDULE_WORDS {
            let mut temp = words[i - 1];
            if i % 4 == 0 {
                temp = sub_word(rot_word(temp));
                temp[0] ^= round_constant((i - 4) / 4);
            }
            xor_in_place(&mut temp, &words[i - 4]);
            words[i] = temp;
        }

        debug!(
            "expanded key schedule: w[40..44] = {:02x?}",
            &words[SCHEDULE_WORDS - 4..]
        );
        Self { words }
    }

    /// Word `index` (0..44).
    #[inline]
    pub fn word(&self, index: usize) -> Word {
        self.words[index]
    }

    /// The full table.
    #[inline]
    pub fn words(&self) -> &[Word; SCHEDULE_WORDS] {
        &self.words
    }

    /// The four words XORed into the state in `round` (0..=10).
    pub fn round_key(&self, round: usize) -> [Word; 4] {
        let base = round * 4;
        [
            self.words[base],
            self.words[base + 1],
            self.words[base + 2],
            self.words[base + 3],
        ]
    }
}

/// Round constant x^`exponent` in GF(2^8), for exponents 0..=9.
///
/// # Panics
///
/// For exponents above 9, whose monomials are past what
/// [`reduce`](crate::gf256::reduce) folds back into a byte.
pub fn round_constant(exponent: usize) -> u8 {
    field_to_byte(&reduce(&Poly::monomial(exponent)))
}

fn rot_word(word: Word) -> Word {
    [word[1], word[2], word[3], word[0]]
}

fn sub_word(word: Word) -> Word {
    word.map(sub_byte)
}
