//! Arithmetic in GF(2^8) modulo the AES polynomial `x^8 + x^4 + x^3 + x + 1`.

/// Low byte of the reduction polynomial.
const REDUCTION: u8 = 0x1b;

/// Multiplies `byte` by `{02}`.
#[inline]
pub fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies two field elements using double-and-add.
#[inline]
pub fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}
