use thiserror::Error;

use crate::{BLOCK_SIZE, KEY_SIZE};

/// An error returned when a caller-provided buffer has the
/// wrong length.
///
/// Only the slice-based entry points can fail. The fixed-size
/// API encodes both lengths in its types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The key was not [`KEY_SIZE`] bytes long.
    #[error("invalid key length: expected {} bytes, got {actual}", KEY_SIZE)]
    KeyLength {
        /// The length of the key that was provided.
        actual: usize,
    },
    /// The block was not [`BLOCK_SIZE`] bytes long.
    #[error("invalid block length: expected {} bytes, got {actual}", BLOCK_SIZE)]
    BlockLength {
        /// The length of the block that was provided.
        actual: usize,
    },
}
