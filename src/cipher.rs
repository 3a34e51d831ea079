//! AES-128 single-block encryption and decryption.
//!
//! Each call expands its own key schedule and discards it
//! before returning; nothing is cached between calls, so the
//! functions may be called concurrently from any number of
//! threads.

use crate::key::expand_key;
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::{Block, Error, Key, Zeroizing, ROUNDS};

/// Encrypts one block.
#[inline]
pub fn encrypt_block(plaintext: &Block, key: &Key) -> Block {
    let rk = expand_key(key);
    let mut state = *plaintext;

    add_round_key(&mut state, rk.round_key(0));
    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, rk.round_key(round));
    }
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, rk.round_key(ROUNDS));

    state
}

/// Decrypts one block.
#[inline]
pub fn decrypt_block(ciphertext: &Block, key: &Key) -> Block {
    let rk = expand_key(key);
    let mut state = *ciphertext;

    add_round_key(&mut state, rk.round_key(ROUNDS));
    for round in (1..ROUNDS).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, rk.round_key(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, rk.round_key(0));

    state
}

/// Encrypts one block given as a slice.
///
/// Returns an error if `key` is not 16 bytes or `plaintext` is
/// not 16 bytes. The key is checked first.
pub fn try_encrypt_block(plaintext: &[u8], key: &[u8]) -> Result<Block, Error> {
    let key = Zeroizing::new(key_from_slice(key)?);
    let block = block_from_slice(plaintext)?;
    Ok(encrypt_block(&block, &key))
}

/// Decrypts one block given as a slice.
///
/// Returns an error if `key` is not 16 bytes or `ciphertext` is
/// not 16 bytes. The key is checked first.
pub fn try_decrypt_block(ciphertext: &[u8], key: &[u8]) -> Result<Block, Error> {
    let key = Zeroizing::new(key_from_slice(key)?);
    let block = block_from_slice(ciphertext)?;
    Ok(decrypt_block(&block, &key))
}

#[inline]
fn key_from_slice(key: &[u8]) -> Result<Key, Error> {
    Key::try_from(key).map_err(|_| Error::KeyLength { actual: key.len() })
}

#[inline]
fn block_from_slice(block: &[u8]) -> Result<Block, Error> {
    Block::try_from(block).map_err(|_| Error::BlockLength {
        actual: block.len(),
    })
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use rand::{Rng, RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    use super::*;
    use crate::tests::{AftVectors, AES_128_TESTS};
    use crate::{BLOCK_SIZE, KEY_SIZE};

    #[test]
    fn test_crypt_aes128() {
        for (i, &(key, pt, ct)) in AES_128_TESTS.iter().enumerate() {
            let got = encrypt_block(&pt, &key);
            assert_eq!(got, ct, "#{i}: `encrypt_block`");
            let got = decrypt_block(&got, &key);
            assert_eq!(got, pt, "#{i}: `decrypt_block`");
        }
    }

    #[test]
    fn test_zero_key_zero_block() {
        let ct = encrypt_block(&[0; BLOCK_SIZE], &[0; KEY_SIZE]);
        assert_ne!(ct, [0; BLOCK_SIZE]);
        assert_eq!(ct, hex!("66e94bd4ef8a2c3b884cfa59ca342b2e"));
        assert_eq!(encrypt_block(&[0; BLOCK_SIZE], &[0; KEY_SIZE]), ct);
    }

    #[test]
    fn test_aft_vectors() {
        let vectors = AftVectors::load();
        for group in vectors.test_groups {
            let encrypt = group.direction == "encrypt";
            for test in group.tests {
                let tc_id = test.tc_id;
                let key = Key::try_from(test.key.as_slice()).unwrap();
                let (input, want) = if encrypt {
                    (&test.pt, &test.ct)
                } else {
                    (&test.ct, &test.pt)
                };
                assert_eq!(input.len(), want.len(), "#{tc_id}");
                assert_eq!(input.len() % BLOCK_SIZE, 0, "#{tc_id}");

                let mut got = Vec::with_capacity(input.len());
                for block in input.chunks_exact(BLOCK_SIZE) {
                    let block = Block::try_from(block).unwrap();
                    let out = if encrypt {
                        encrypt_block(&block, &key)
                    } else {
                        decrypt_block(&block, &key)
                    };
                    got.extend_from_slice(&out);
                }
                assert_eq!(&got, want, "#{tc_id}");
            }
        }
    }

    #[test]
    fn test_round_trip_random() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        for _ in 0..1000 {
            let mut key = [0u8; KEY_SIZE];
            let mut pt = [0u8; BLOCK_SIZE];
            rng.fill_bytes(&mut key);
            rng.fill_bytes(&mut pt);
            let ct = encrypt_block(&pt, &key);
            assert_eq!(decrypt_block(&ct, &key), pt);
            assert_eq!(encrypt_block(&decrypt_block(&pt, &key), &key), pt);
        }
    }

    #[test]
    fn test_diffusion() {
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        let mut key = [0u8; KEY_SIZE];
        rng.fill_bytes(&mut key);

        let mut total = 0u64;
        let mut samples = 0u64;
        for _ in 0..32 {
            let mut pt = [0u8; BLOCK_SIZE];
            rng.fill_bytes(&mut pt);
            let ct = encrypt_block(&pt, &key);
            for bit in 0..BLOCK_SIZE * 8 {
                let mut flipped = pt;
                flipped[bit / 8] ^= 1 << (bit % 8);
                let changed: u32 = encrypt_block(&flipped, &key)
                    .iter()
                    .zip(&ct)
                    .map(|(a, b)| (a ^ b).count_ones())
                    .sum();
                assert!(changed > 0, "bit {bit} did not change the output");
                total += u64::from(changed);
                samples += 1;
            }
        }
        // 64 of 128 bits on average.
        let mean = total / samples;
        assert!((56..=72).contains(&mean), "mean bits changed: {mean}");
    }

    #[test]
    fn test_key_sensitivity() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let mut pt = [0u8; BLOCK_SIZE];
        rng.fill_bytes(&mut pt);
        let mut key = [0u8; KEY_SIZE];
        rng.fill_bytes(&mut key);
        let ct = encrypt_block(&pt, &key);
        for _ in 0..64 {
            let mut other = key;
            other[rng.gen_range(0..KEY_SIZE)] ^= 1 << rng.gen_range(0..8u32);
            assert_ne!(encrypt_block(&pt, &other), ct);
        }
    }

    #[test]
    fn test_concurrent_callers() {
        let want: Vec<Block> = AES_128_TESTS
            .iter()
            .map(|(key, pt, _)| encrypt_block(pt, key))
            .collect();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    s.spawn(|| {
                        AES_128_TESTS
                            .iter()
                            .map(|(key, pt, _)| encrypt_block(pt, key))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), want);
            }
        });
    }

    #[test]
    fn test_try_crypt() {
        let (key, pt, ct) = AES_128_TESTS[1];
        assert_eq!(try_encrypt_block(&pt, &key), Ok(ct));
        assert_eq!(try_decrypt_block(&ct, &key), Ok(pt));
    }

    #[test]
    fn test_try_crypt_invalid_length() {
        let (key, pt, ct) = AES_128_TESTS[1];

        assert_eq!(
            try_encrypt_block(&pt, &key[..15]),
            Err(Error::KeyLength { actual: 15 })
        );
        assert_eq!(
            try_encrypt_block(&pt, &[0; 32]),
            Err(Error::KeyLength { actual: 32 })
        );
        assert_eq!(
            try_encrypt_block(&pt[..8], &key),
            Err(Error::BlockLength { actual: 8 })
        );
        assert_eq!(
            try_decrypt_block(&[0; 17], &key),
            Err(Error::BlockLength { actual: 17 })
        );
        assert_eq!(
            try_decrypt_block(&ct, &[]),
            Err(Error::KeyLength { actual: 0 })
        );
        // Key length is reported before block length.
        assert_eq!(
            try_encrypt_block(&[], &[]),
            Err(Error::KeyLength { actual: 0 })
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::KeyLength { actual: 15 }.to_string(),
            "invalid key length: expected 16 bytes, got 15"
        );
        assert_eq!(
            Error::BlockLength { actual: 0 }.to_string(),
            "invalid block length: expected 16 bytes, got 0"
        );
    }
}
