//! The 4×4 byte matrix transformed by the rounds.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One state column, or one key-schedule word.
pub type Word = [u8; 4];

/// 4×4 byte matrix stored column by column.
///
/// Sixteen input bytes fill the columns left to right, so byte `4 * c + r`
/// lands in row `r` of column `c`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State {
    columns: [Word; 4],
}

impl State {
    /// Builds a state from its four columns.
    pub const fn from_columns(columns: [Word; 4]) -> Self {
        Self { columns }
    }

    /// Fills the columns from sixteen bytes in order.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        let mut columns = [[0u8; 4]; 4];
        for (column, chunk) in columns.iter_mut().zip(bytes.chunks_exact(4)) {
            column.copy_from_slice(chunk);
        }
        Self { columns }
    }

    /// Column-major bytes, the inverse of [`State::from_bytes`].
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        for (chunk, column) in bytes.chunks_exact_mut(4).zip(self.columns.iter()) {
            chunk.copy_from_slice(column);
        }
        bytes
    }

    /// Byte at (`row`, `col`).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.columns[col][row]
    }

    /// All four columns.
    #[inline]
    pub fn columns(&self) -> &[Word; 4] {
        &self.columns
    }

    /// Mutable access to the columns.
    #[inline]
    pub fn columns_mut(&mut self) -> &mut [Word; 4] {
        &mut self.columns
    }

    /// Copies out row `row`.
    pub fn row(&self, row: usize) -> Word {
        [
            self.columns[0][row],
            self.columns[1][row],
            self.columns[2][row],
            self.columns[3][row],
        ]
    }

    /// Overwrites row `row`.
    pub fn set_row(&mut self, row: usize, values: Word) {
        for (column, value) in self.columns.iter_mut().zip(values) {
            column[row] = value;
        }
    }

    /// Iterates over every byte mutably, column by column.
    pub fn bytes_mut(&mut self) -> impl Iterator<Item = &mut u8> {
        self.columns.iter_mut().flatten()
    }
}

impl From<[u8; 16]> for State {
    fn from(value: [u8; 16]) -> Self {
        Self::from_bytes(value)
    }
}

/// Row-major grid, two lowercase hex digits per byte.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            if row > 0 {
                writeln!(f)?;
            }
            let [a, b, c, d] = self.row(row);
            write!(f, "{a:02x} {b:02x} {c:02x} {d:02x}")?;
        }
        Ok(())
    }
}

/// XORs `rhs` into `dst` byte by byte.
#[inline]
pub fn xor_in_place(dst: &mut Word, rhs: &Word) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
