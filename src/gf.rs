//! Arithmetic in GF(2^8) modulo the AES polynomial
//! x^8 + x^4 + x^3 + x + 1 (0x11B).
//!
//! Addition is XOR. Multiplication is exact; every pair of bytes
//! has a well-defined product.

/// The low byte of the AES reduction polynomial.
const REDUCTION: u8 = 0x1B;

/// Multiplies `x` by 2 (i.e., by the polynomial `x`).
#[inline(always)]
#[allow(
    clippy::arithmetic_side_effects,
    reason = "`x >> 7` is 0 or 1, so the product cannot overflow."
)]
pub const fn xtime(x: u8) -> u8 {
    (x << 1) ^ ((x >> 7) * REDUCTION)
}

/// Multiplies `x` and `y` using shift-and-add.
#[inline]
#[allow(
    clippy::arithmetic_side_effects,
    reason = "The loop counter never exceeds 8."
)]
pub const fn multiply(mut x: u8, mut y: u8) -> u8 {
    let mut product = 0;
    let mut i = 0;
    while i < 8 {
        if y & 1 != 0 {
            product ^= x;
        }
        x = xtime(x);
        y >>= 1;
        i += 1;
    }
    product
}

/// Multiplies `x` by 9 (`x^3 + 1`).
#[inline(always)]
pub const fn mul9(x: u8) -> u8 {
    xtime(xtime(xtime(x))) ^ x
}

/// Multiplies `x` by 11 (`x^3 + x + 1`).
#[inline(always)]
pub const fn mul11(x: u8) -> u8 {
    xtime(xtime(xtime(x)) ^ x) ^ x
}

/// Multiplies `x` by 13 (`x^3 + x^2 + 1`).
#[inline(always)]
pub const fn mul13(x: u8) -> u8 {
    xtime(xtime(xtime(x) ^ x)) ^ x
}

/// Multiplies `x` by 14 (`x^3 + x^2 + x`).
#[inline(always)]
pub const fn mul14(x: u8) -> u8 {
    xtime(xtime(xtime(x) ^ x) ^ x)
}
