//! Block encryption driven through the round engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::key::KeySchedule;
use crate::round::{RoundEngine, RoundRecord, ROUNDS};
use crate::state::State;

/// Encrypts `message` under `key`, both column-major 4×4 matrices.
pub fn encrypt(message: &State, key: &State) -> State {
    let schedule = KeySchedule::expand(key);
    encrypt_with_schedule(message, &schedule)
}

/// Encrypts with a pre-expanded key schedule.
pub fn encrypt_with_schedule(message: &State, schedule: &KeySchedule) -> State {
    RoundEngine::new(*message, schedule).finish()
}

/// Encrypts and keeps every intermediate round.
pub fn encrypt_traced(message: &State, key: &State) -> Trace {
    let schedule = KeySchedule::expand(key);
    let mut rounds = Vec::with_capacity(ROUNDS + 1);
    let mut engine = RoundEngine::new(*message, &schedule);
    for record in engine.by_ref() {
        rounds.push(record);
    }
    Trace {
        rounds,
        ciphertext: *engine.state(),
    }
}

/// Every round of one encryption, initial key addition first.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trace {
    /// One record per round, `ROUNDS + 1` in total.
    pub rounds: Vec<RoundRecord>,
    /// State after the final round.
    pub ciphertext: State,
}

#[cfg(feature = "serde")]
impl Trace {
    /// Serializes the trace with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserializes a trace with `bincode`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
