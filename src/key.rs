//! The AES-128 key schedule.

use core::fmt;

use crate::tables::{sbox, RCON};
use crate::{Block, Key, Zeroizing, BLOCK_SIZE, KEY_SIZE, ROUND_KEYS};

/// An expanded AES-128 key schedule: 11 round keys, 176 bytes
/// in total.
///
/// Round key 0 is the cipher key itself. With the `zeroize`
/// feature enabled, the schedule is wiped when dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct RoundKeys([Block; ROUND_KEYS]);

impl RoundKeys {
    /// Returns round key `round`.
    ///
    /// # Panics
    ///
    /// Panics if `round` is greater than 10.
    #[inline]
    #[allow(
        clippy::indexing_slicing,
        reason = "Out of bounds rounds are a caller bug."
    )]
    pub fn round_key(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Returns the schedule as 176 contiguous bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_flattened()
    }

    /// Returns an iterator over the round keys, in order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Block> {
        self.0.iter()
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundKeys").finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a RoundKeys {
    type Item = &'a Block;
    type IntoIter = core::slice::Iter<'a, Block>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::ZeroizeOnDrop for RoundKeys {}

impl Drop for RoundKeys {
    #[inline]
    fn drop(&mut self) {
        #[cfg(feature = "zeroize")]
        zeroize::Zeroize::zeroize(&mut self.0);
    }
}

/// Expands `key` into the 11 AES-128 round keys.
///
/// Each 4-byte word of the schedule is the XOR of the word 16
/// bytes earlier and the previous word. At every round key
/// boundary the previous word is first rotated, substituted
/// and mixed with the next round constant.
#[allow(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    reason = "`i` steps from 16 to 172 by 4, so every index is within the 176-byte schedule."
)]
pub fn expand_key(key: &Key) -> RoundKeys {
    let mut rk = RoundKeys([[0; BLOCK_SIZE]; ROUND_KEYS]);
    let w = rk.0.as_flattened_mut();
    w[..KEY_SIZE].copy_from_slice(key);

    let mut word = Zeroizing::new([0u8; 4]);
    for i in (KEY_SIZE..w.len()).step_by(4) {
        word.copy_from_slice(&w[i - 4..i]);
        if i % KEY_SIZE == 0 {
            rot_word(&mut word);
            sub_word(&mut word);
            word[0] ^= RCON[i / KEY_SIZE];
        }
        for (j, &t) in word.iter().enumerate() {
            w[i + j] = w[i + j - KEY_SIZE] ^ t;
        }
    }

    rk
}

/// Rotates a word left by one byte.
#[inline(always)]
fn rot_word(word: &mut [u8; 4]) {
    word.rotate_left(1);
}

/// Substitutes each byte of a word through the S-box.
#[inline(always)]
fn sub_word(word: &mut [u8; 4]) {
    for b in word {
        *b = sbox(*b);
    }
}
