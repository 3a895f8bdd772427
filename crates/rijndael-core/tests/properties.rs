//! Property-based checks for the round primitives and the field layer.

use proptest::prelude::*;
use rijndael_core::gf256::{byte_to_field, field_multiply, inverse, FIELD_CHAR, IRREDUCIBLE};
use rijndael_core::{
    add_round_key, encrypt, encrypt_traced, mix_columns, shift_rows, sub_byte, RoundEngine,
    KeySchedule, State, ROUNDS,
};

fn any_state() -> impl Strategy<Value = State> {
    any::<[u8; 16]>().prop_map(State::from_bytes)
}

proptest! {
    #[test]
    fn shift_rows_has_order_four(state in any_state()) {
        let mut shifted = state;
        for _ in 0..4 {
            shift_rows(&mut shifted);
        }
        prop_assert_eq!(shifted, state);
    }

    #[test]
    fn shift_rows_keeps_row_contents(state in any_state()) {
        let mut shifted = state;
        shift_rows(&mut shifted);
        prop_assert_eq!(shifted.row(0), state.row(0));
        for row in 1..4 {
            let mut before = state.row(row);
            let mut after = shifted.row(row);
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
        }
    }

    #[test]
    fn mix_columns_is_linear(a in any_state(), b in any_state()) {
        let mut sum = a;
        add_round_key(&mut sum, b.columns());
        let (mut ma, mut mb) = (a, b);
        mix_columns(&mut ma);
        mix_columns(&mut mb);
        mix_columns(&mut sum);
        add_round_key(&mut ma, mb.columns());
        prop_assert_eq!(sum, ma);
    }

    #[test]
    fn nonzero_bytes_have_inverses(byte in 1u8..=255) {
        let product = field_multiply(&byte_to_field(byte), &inverse(byte));
        prop_assert_eq!(product.rem(&IRREDUCIBLE, FIELD_CHAR), byte_to_field(1));
    }

    #[test]
    fn distinct_bytes_substitute_differently(a in any::<u8>(), b in any::<u8>()) {
        prop_assume!(a != b);
        prop_assert_ne!(sub_byte(a), sub_byte(b));
    }

    #[test]
    fn encryption_is_deterministic(message in any_state(), key in any_state()) {
        prop_assert_eq!(encrypt(&message, &key), encrypt(&message, &key));
        let trace = encrypt_traced(&message, &key);
        prop_assert_eq!(trace.rounds.len(), ROUNDS + 1);
        prop_assert_eq!(trace.ciphertext, encrypt(&message, &key));
    }

    #[test]
    fn engine_steps_match_collected_rounds(message in any_state(), key in any_state()) {
        let schedule = KeySchedule::expand(&key);
        let mut engine = RoundEngine::new(message, &schedule);
        let mut states = Vec::new();
        while let Some(record) = engine.step() {
            states.push(record.state);
        }
        let collected: Vec<State> = RoundEngine::new(message, &schedule)
            .map(|record| record.state)
            .collect();
        prop_assert_eq!(states, collected);
    }
}
