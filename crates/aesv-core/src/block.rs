//! Block and state representations.

use tracing::debug;

use crate::error::{Error, Result};
use crate::variant::NB;

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// Copies a slice into a [`Block`], rejecting anything but exactly 16 bytes.
pub fn block_from_slice(bytes: &[u8]) -> Result<Block> {
    Block::try_from(bytes).map_err(|_| {
        debug!(len = bytes.len(), "rejecting block of wrong length");
        Error::InvalidBlockLength {
            expected: BLOCK_SIZE,
            actual: bytes.len(),
        }
    })
}

/// Working state: 4 rows by `Nb` columns, indexed `[row][col]`.
///
/// Loaded column-major, so `state[r][c] == block[r + 4 * c]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State(pub [[u8; NB]; 4]);

impl State {
    /// Loads a block into a fresh state.
    pub fn from_block(block: &Block) -> Self {
        let mut rows = [[0u8; NB]; 4];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, byte) in row.iter_mut().enumerate() {
                *byte = block[r + 4 * c];
            }
        }
        Self(rows)
    }

    /// Writes the state back out as a linear block.
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; BLOCK_SIZE];
        for (r, row) in self.0.iter().enumerate() {
            for (c, &byte) in row.iter().enumerate() {
                block[r + 4 * c] = byte;
            }
        }
        block
    }

    /// Returns column `c` top to bottom.
    #[inline]
    pub fn column(&self, c: usize) -> [u8; 4] {
        [self.0[0][c], self.0[1][c], self.0[2][c], self.0[3][c]]
    }

    /// Overwrites column `c` top to bottom.
    #[inline]
    pub fn set_column(&mut self, c: usize, column: [u8; 4]) {
        for (row, value) in self.0.iter_mut().zip(column) {
            row[c] = value;
        }
    }

    /// Mutable access to row `r`.
    #[inline]
    pub fn row_mut(&mut self, r: usize) -> &mut [u8; NB] {
        &mut self.0[r]
    }

    /// Iterates over every byte of the state.
    pub fn bytes_mut(&mut self) -> impl Iterator<Item = &mut u8> {
        self.0.iter_mut().flatten()
    }
}

impl From<&Block> for State {
    fn from(block: &Block) -> Self {
        Self::from_block(block)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.to_block()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_major_layout() {
        let block: Block = core::array::from_fn(|i| i as u8);
        let state = State::from_block(&block);
        assert_eq!(state.0[0], [0x00, 0x04, 0x08, 0x0c]);
        assert_eq!(state.0[3], [0x03, 0x07, 0x0b, 0x0f]);
        assert_eq!(state.column(2), [0x08, 0x09, 0x0a, 0x0b]);
        assert_eq!(state.to_block(), block);
    }

    #[test]
    fn set_column_writes_each_row() {
        let mut state = State::default();
        state.set_column(1, [1, 2, 3, 4]);
        assert_eq!(state.to_block()[4..8], [1, 2, 3, 4]);
    }

    #[test]
    fn slice_length_is_checked() {
        assert_eq!(block_from_slice(&[7u8; 16]), Ok([7u8; 16]));
        assert_eq!(
            block_from_slice(&[0u8; 15]),
            Err(Error::InvalidBlockLength {
                expected: 16,
                actual: 15
            })
        );
        assert!(block_from_slice(&[0u8; 17]).is_err());
    }
}
