//! Byte-oriented AES-128.
//!
//! Encrypts and decrypts a single 16-byte block under a single
//! 128-bit key, as specified in [FIPS-197].
//!
//! ```
//! use aes_block::{decrypt_block, encrypt_block};
//!
//! let key = [0u8; 16];
//! let pt = *b"sixteen byte msg";
//! let ct = encrypt_block(&pt, &key);
//! assert_eq!(decrypt_block(&ct, &key), pt);
//! ```
//!
//! The lower-level round transforms and the key schedule are
//! exported for composition by external code (modes of
//! operation, test harnesses, etc.).
//!
//! # Warning
//!
//! This is low-level cryptography. The S-box is a table lookup
//! indexed by secret data, so this implementation is NOT
//! constant time. It provides no mode of operation, padding or
//! authentication; those belong to higher-level constructions.
//!
//! [FIPS-197]: https://csrc.nist.gov/pubs/fips/197/final

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(test, doctest, feature = "std")), no_std)]
#![forbid(unsafe_code)]

pub mod cipher;
mod error;
pub mod gf;
pub mod key;
pub mod round;
pub mod tables;

pub use crate::cipher::{decrypt_block, encrypt_block, try_decrypt_block, try_encrypt_block};
pub use crate::error::Error;
pub use crate::key::{expand_key, RoundKeys};

/// The size in bytes of an AES block.
pub const BLOCK_SIZE: usize = 16;

/// The size in bytes of an AES-128 key.
pub const KEY_SIZE: usize = 16;

/// The number of AES-128 rounds.
pub const ROUNDS: usize = 10;

/// The number of round keys in an AES-128 schedule.
pub const ROUND_KEYS: usize = ROUNDS + 1;

/// The size in bytes of an expanded AES-128 schedule.
pub const SCHEDULE_SIZE: usize = ROUND_KEYS * BLOCK_SIZE;

/// An AES block.
pub type Block = [u8; BLOCK_SIZE];

/// An AES-128 key.
pub type Key = [u8; KEY_SIZE];

cfg_if::cfg_if! {
    if #[cfg(feature = "zeroize")] {
        pub(crate) use zeroize::Zeroizing;
    } else {
        pub(crate) struct Zeroizing<T>(core::marker::PhantomData<T>);
        impl<T> Zeroizing<T> {
            #[inline(always)]
            pub fn new(v: T) -> T {
                v
            }
        }
    }
}
