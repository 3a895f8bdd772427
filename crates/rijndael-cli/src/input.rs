//! Parser for the plain-text message/key format.
//!
//! Sixteen 8-digit binary groups for the message, then sixteen 2-digit hex
//! bytes for the key, separated by any whitespace. Both fill their matrix
//! column by column.

use rijndael_core::State;
use thiserror::Error;

const BLOCK_TOKENS: usize = 16;

/// Rejected input text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The file does not hold exactly one message block and one key block.
    #[error("expected {expected} tokens (message then key), found {found}")]
    TokenCount { expected: usize, found: usize },
    /// A token is not a valid digit group in its radix.
    #[error("malformed {field} token {token:?} at position {position}: expected up to {digits} {radix} digits")]
    Malformed {
        field: &'static str,
        token: String,
        position: usize,
        digits: usize,
        radix: &'static str,
    },
}

/// Parsed message and key matrices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Input {
    pub message: State,
    pub key: State,
}

#[derive(Clone, Copy)]
enum Radix {
    Binary,
    Hex,
}

impl Radix {
    fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Hex => 16,
        }
    }

    fn max_digits(self) -> usize {
        match self {
            Radix::Binary => 8,
            Radix::Hex => 2,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Radix::Binary => "binary",
            Radix::Hex => "hex",
        }
    }
}

/// Parses the full input text.
pub fn parse_input(text: &str) -> Result<Input, InputError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != 2 * BLOCK_TOKENS {
        return Err(InputError::TokenCount {
            expected: 2 * BLOCK_TOKENS,
            found: tokens.len(),
        });
    }
    let (message, key) = tokens.split_at(BLOCK_TOKENS);
    Ok(Input {
        message: parse_block("message", message, 0, Radix::Binary)?,
        key: parse_block("key", key, BLOCK_TOKENS, Radix::Hex)?,
    })
}

fn parse_block(
    field: &'static str,
    tokens: &[&str],
    offset: usize,
    radix: Radix,
) -> Result<State, InputError> {
    let mut bytes = [0u8; BLOCK_TOKENS];
    for (i, (slot, token)) in bytes.iter_mut().zip(tokens).enumerate() {
        *slot = parse_token(token, radix).ok_or_else(|| InputError::Malformed {
            field,
            token: (*token).to_owned(),
            position: offset + i,
            digits: radix.max_digits(),
            radix: radix.name(),
        })?;
    }
    Ok(State::from_bytes(bytes))
}

fn parse_token(token: &str, radix: Radix) -> Option<u8> {
    if token.is_empty()
        || token.len() > radix.max_digits()
        || !token.chars().all(|c| c.is_digit(radix.base()))
    {
        return None;
    }
    u8::from_str_radix(token, radix.base()).ok()
}
