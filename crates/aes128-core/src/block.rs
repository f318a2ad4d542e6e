//! Block and state representation helpers.

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// The 4x4 AES state, stored column-major (`index = row + 4 * col`).
///
/// Bytes are laid out exactly as in the input block, so loading and storing
/// a block is a plain copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State([u8; BLOCK_SIZE]);

impl State {
    /// Loads a block into a fresh state.
    #[inline]
    pub fn from_block(block: &Block) -> Self {
        Self(*block)
    }

    /// Serializes the state back into a block.
    #[inline]
    pub fn to_block(self) -> Block {
        self.0
    }

    /// Returns the byte at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[row + 4 * col]
    }

    /// Overwrites the byte at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.0[row + 4 * col] = value;
    }

    /// Copies out row `row`.
    pub fn row(&self, row: usize) -> [u8; 4] {
        core::array::from_fn(|col| self.get(row, col))
    }

    /// Replaces row `row`.
    pub fn set_row(&mut self, row: usize, values: [u8; 4]) {
        for (col, value) in values.into_iter().enumerate() {
            self.set(row, col, value);
        }
    }

    /// Copies out column `col`.
    pub fn column(&self, col: usize) -> [u8; 4] {
        core::array::from_fn(|row| self.get(row, col))
    }

    /// Replaces column `col`.
    pub fn set_column(&mut self, col: usize, values: [u8; 4]) {
        self.0[4 * col..4 * col + 4].copy_from_slice(&values);
    }

    /// Mutable access to all 16 bytes, in storage order.
    #[inline]
    pub fn bytes_mut(&mut self) -> &mut [u8; BLOCK_SIZE] {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential() -> Block {
        core::array::from_fn(|i| i as u8)
    }

    #[test]
    fn layout_is_column_major() {
        let state = State::from_block(&sequential());
        assert_eq!(state.get(0, 0), 0);
        assert_eq!(state.get(1, 0), 1);
        assert_eq!(state.get(0, 1), 4);
        assert_eq!(state.get(3, 3), 15);
        assert_eq!(state.row(1), [1, 5, 9, 13]);
        assert_eq!(state.column(2), [8, 9, 10, 11]);
    }

    #[test]
    fn setters_write_through_to_block() {
        let mut state = State::from_block(&[0u8; BLOCK_SIZE]);
        state.set_row(2, [1, 2, 3, 4]);
        state.set_column(3, [9, 9, 9, 9]);
        state.set(0, 0, 7);
        let block = state.to_block();
        assert_eq!(block[0], 7);
        assert_eq!(block[2], 1);
        assert_eq!(block[6], 2);
        assert_eq!(block[10], 3);
        assert_eq!(&block[12..], &[9, 9, 9, 9]);
    }
}
