//! AES round transformations and the round sequencing state machine.

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::gf256::{byte_to_field, field_add, field_multiply, field_to_byte, reduce};
use crate::key::KeySchedule;
use crate::poly::Poly;
use crate::sbox::sub_byte;
use crate::state::{xor_in_place, State, Word};

/// Number of rounds after the initial key addition (AES-128).
pub const ROUNDS: usize = 10;

/// MixColumns coefficients, each a GF(2^8) byte.
const MIX_MATRIX: [[u8; 4]; 4] = [[2, 3, 1, 1], [1, 2, 3, 1], [1, 1, 2, 3], [3, 1, 1, 2]];

/// Applies SubBytes to the state in place.
pub fn sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = sub_byte(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r`.
pub fn shift_rows(state: &mut State) {
    for row in 1..4 {
        let mut values = state.row(row);
        values.rotate_left(row);
        state.set_row(row, values);
    }
}

fn mix_single_column(column: &Word) -> Word {
    let mut out = [0u8; 4];
    for (slot, coeffs) in out.iter_mut().zip(MIX_MATRIX.iter()) {
        let total = coeffs
            .iter()
            .zip(column.iter())
            .fold(Poly::zero(), |acc, (&m, &s)| {
                field_add(&acc, &field_multiply(&byte_to_field(m), &byte_to_field(s)))
            });
        *slot = field_to_byte(&reduce(&total));
    }
    out
}

/// MixColumns over all four columns.
pub fn mix_columns(state: &mut State) {
    for column in state.columns_mut().iter_mut() {
        *column = mix_single_column(column);
    }
}

/// Adds (XORs) the four round-key words into the state columns.
pub fn add_round_key(state: &mut State, round_key: &[Word; 4]) {
    for (column, word) in state.columns_mut().iter_mut().zip(round_key.iter()) {
        xor_in_place(column, word);
    }
}

/// Position in the round sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Key addition with words 0..4.
    Initial,
    /// Full round `1..=9`: SubBytes, ShiftRows, MixColumns, AddRoundKey.
    Full(usize),
    /// Round 10, without MixColumns.
    Final,
    /// Terminal; every round has been applied.
    Done,
}

impl Stage {
    /// Round index applied by this stage, `None` once done.
    pub fn round(self) -> Option<usize> {
        match self {
            Stage::Initial => Some(0),
            Stage::Full(round) => Some(round),
            Stage::Final => Some(ROUNDS),
            Stage::Done => None,
        }
    }

    fn next(self) -> Self {
        match self {
            Stage::Initial => Stage::Full(1),
            Stage::Full(round) if round + 1 < ROUNDS => Stage::Full(round + 1),
            Stage::Full(_) => Stage::Final,
            Stage::Final | Stage::Done => Stage::Done,
        }
    }
}

/// Snapshot taken after a round's AddRoundKey.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoundRecord {
    /// Round index, 0 for the initial key addition.
    pub round: usize,
    /// The schedule words XORed in this round.
    pub round_key: [Word; 4],
    /// State after the round.
    pub state: State,
}

/// Steps one state through the rounds, one stage per call.
///
/// Also an iterator over [`RoundRecord`]s, yielding exactly `ROUNDS + 1` items.
#[derive(Clone, Debug)]
pub struct RoundEngine<'a> {
    schedule: &'a KeySchedule,
    state: State,
    stage: Stage,
}

impl<'a> RoundEngine<'a> {
    /// Starts at [`Stage::Initial`] with `state` as the plaintext.
    pub fn new(state: State, schedule: &'a KeySchedule) -> Self {
        Self {
            schedule,
            state,
            stage: Stage::Initial,
        }
    }

    /// Current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Applies the current stage and advances. Returns `None` once done.
    pub fn step(&mut self) -> Option<RoundRecord> {
        let round = self.stage.round()?;
        match self.stage {
            Stage::Full(_) => {
                sub_bytes(&mut self.state);
                shift_rows(&mut self.state);
                mix_columns(&mut self.state);
            }
            Stage::Final => {
                sub_bytes(&mut self.state);
                shift_rows(&mut self.state);
            }
            Stage::Initial | Stage::Done => {}
        }
        let round_key = self.schedule.round_key(round);
        add_round_key(&mut self.state, &round_key);
        debug!("round {round}: {:02x?}", self.state.to_bytes());

        self.stage = self.stage.next();
        Some(RoundRecord {
            round,
            round_key,
            state: self.state,
        })
    }

    /// Runs the remaining stages and returns the final state.
    pub fn finish(mut self) -> State {
        while self.step().is_some() {}
        self.state
    }
}

impl Iterator for RoundEngine<'_> {
    type Item = RoundRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}
