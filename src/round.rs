//! AES round transforms.
//!
//! The state is a 4x4 matrix of bytes stored column-major: the
//! byte at index `i` lives in row `i % 4` and column `i / 4`.
//! Every transform mutates the state in place.

use crate::gf::{mul11, mul13, mul14, mul9, xtime};
use crate::tables::{inv_sbox, sbox};
use crate::Block;

/// `SubBytes`.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for b in state {
        *b = sbox(*b);
    }
}

/// Inverse of `SubBytes`.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for b in state {
        *b = inv_sbox(*b);
    }
}

/// `ShiftRows`.
///
/// Row `r` is rotated left by `r` positions.
#[inline]
#[allow(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    reason = "Both `i` and the source index are less than 16."
)]
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for (i, b) in state.iter_mut().enumerate() {
        let (row, col) = (i % 4, i / 4);
        *b = src[((col + row) % 4) * 4 + row];
    }
}

/// Inverse of `ShiftRows`.
///
/// Row `r` is rotated right by `r` positions.
#[inline]
#[allow(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    reason = "Both `i` and the source index are less than 16."
)]
pub fn inv_shift_rows(state: &mut Block) {
    let src = *state;
    for (i, b) in state.iter_mut().enumerate() {
        let (row, col) = (i % 4, i / 4);
        *b = src[((col + 4 - row) % 4) * 4 + row];
    }
}

/// `MixColumns` applied to a single column.
#[inline(always)]
pub const fn mix_column([a0, a1, a2, a3]: [u8; 4]) -> [u8; 4] {
    [
        xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3,
        a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3,
        a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3),
        (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3),
    ]
}

/// Inverse of `MixColumns` applied to a single column.
#[inline(always)]
pub const fn inv_mix_column([a0, a1, a2, a3]: [u8; 4]) -> [u8; 4] {
    [
        mul14(a0) ^ mul11(a1) ^ mul13(a2) ^ mul9(a3),
        mul9(a0) ^ mul14(a1) ^ mul11(a2) ^ mul13(a3),
        mul13(a0) ^ mul9(a1) ^ mul14(a2) ^ mul11(a3),
        mul11(a0) ^ mul13(a1) ^ mul9(a2) ^ mul14(a3),
    ]
}

/// `MixColumns`.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        if let [a0, a1, a2, a3] = col {
            [*a0, *a1, *a2, *a3] = mix_column([*a0, *a1, *a2, *a3]);
        }
    }
}

/// Inverse of `MixColumns`.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        if let [a0, a1, a2, a3] = col {
            [*a0, *a1, *a2, *a3] = inv_mix_column([*a0, *a1, *a2, *a3]);
        }
    }
}

/// `AddRoundKey`.
///
/// This is its own inverse.
#[inline]
pub fn add_round_key(state: &mut Block, rk: &Block) {
    for (s, k) in state.iter_mut().zip(rk) {
        *s ^= *k;
    }
}
