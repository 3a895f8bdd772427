//! Pinned regression vectors for the full cipher.

use rijndael_core::{encrypt, encrypt_traced, KeySchedule, State, ROUNDS};

const KEY_HEX: &str = "2b7e151628aed2a6abf7158809cf4f3c";

/// Column-major state after each round for sixteen `0xff` message bytes.
const GOLDEN_ROUNDS: [&str; ROUNDS + 1] = [
    "d481eae9d7512d595408ea77f630b0c3",
    "f1b700c53d16e54823d24e5797b097e6",
    "c312a465dee5d140163171301ab3933a",
    "3279766ebeac5098676cddbb48179339",
    "d214b8505cbcbc3fd201eaeb0731cadc",
    "0bba92c94bfeb6f7f0138d391995c0be",
    "1e8760a68c4ae3558198067b22e71904",
    "56d280deadf43485170e73017a0919a5",
    "c08a72d5ab2f1033930227927072f20f",
    "46ded013cef5c57fc88e6ba3f2fb71b7",
    "8af2860142f786f409307c1a3f7eaaac",
];

fn state(hex_str: &str) -> State {
    let bytes: [u8; 16] = hex::decode(hex_str)
        .expect("valid hex")
        .try_into()
        .expect("sixteen bytes");
    State::from_bytes(bytes)
}

#[test]
fn all_ones_message_round_sequence() {
    let message = State::from_bytes([0xff; 16]);
    let trace = encrypt_traced(&message, &state(KEY_HEX));

    assert_eq!(trace.rounds.len(), GOLDEN_ROUNDS.len());
    for (record, expected) in trace.rounds.iter().zip(GOLDEN_ROUNDS) {
        assert_eq!(
            hex::encode(record.state.to_bytes()),
            expected,
            "round {}",
            record.round
        );
    }
    assert_eq!(
        hex::encode(trace.ciphertext.to_bytes()),
        GOLDEN_ROUNDS[ROUNDS]
    );
}

#[test]
fn all_ones_message_is_stable_across_runs() {
    let message = State::from_bytes([0xff; 16]);
    let key = state(KEY_HEX);
    let first = encrypt_traced(&message, &key);
    for _ in 0..3 {
        assert_eq!(encrypt_traced(&message, &key), first);
    }
}

#[test]
fn all_ones_message_prints_like_the_round_log() {
    let message = State::from_bytes([0xff; 16]);
    let ciphertext = encrypt(&message, &state(KEY_HEX));
    assert_eq!(
        ciphertext.to_string(),
        "8a 42 09 3f\nf2 f7 30 7e\n86 86 7c aa\n01 f4 1a ac"
    );
}

#[test]
fn fips197_appendix_b() {
    let ct = encrypt(&state("3243f6a8885a308d313198a2e0370734"), &state(KEY_HEX));
    assert_eq!(hex::encode(ct.to_bytes()), "3925841d02dc09fbdc118597196a0b32");
}

#[test]
fn fips197_appendix_c1() {
    let ct = encrypt(
        &state("00112233445566778899aabbccddeeff"),
        &state("000102030405060708090a0b0c0d0e0f"),
    );
    assert_eq!(hex::encode(ct.to_bytes()), "69c4e0d86a7b0430d8cdb78070b4c55a");
}

#[test]
fn key_schedule_reference_words() {
    let schedule = KeySchedule::expand(&state(KEY_HEX));
    let words: Vec<String> = schedule.words().iter().map(hex::encode).collect();
    assert_eq!(&words[..4], ["2b7e1516", "28aed2a6", "abf71588", "09cf4f3c"]);
    assert_eq!(&words[4..8], ["a0fafe17", "88542cb1", "23a33939", "2a6c7605"]);
    assert_eq!(&words[40..], ["d014f9a8", "c9ee2589", "e13f0cc8", "b6630ca6"]);
}

#[test]
fn trace_round_keys_come_from_the_schedule() {
    let key = state(KEY_HEX);
    let schedule = KeySchedule::expand(&key);
    let trace = encrypt_traced(&State::from_bytes([0xff; 16]), &key);
    for record in &trace.rounds {
        assert_eq!(record.round_key, schedule.round_key(record.round));
    }
}
