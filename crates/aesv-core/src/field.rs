//! GF(2^8) arithmetic modulo `x^8 + x^4 + x^3 + x + 1`.

/// Low byte of the reduction polynomial `0x11b`.
const REDUCTION: u8 = 0x1b;

/// Multiplies `value` by `x` (`{02}`) in GF(2^8).
#[inline]
pub fn xtime(value: u8) -> u8 {
    let shifted = (value as u16) << 1;
    if shifted & 0x100 != 0 {
        (shifted as u8) ^ REDUCTION
    } else {
        shifted as u8
    }
}

/// Multiplies two field elements with the shift-and-add ("peasant") method.
pub fn gf_mult(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// Round constant word `[x^(i-1), 0, 0, 0]` for key-schedule step `i`.
///
/// `i` starts at 1. `rcon(0)` returns the same value as `rcon(1)`.
pub fn rcon(i: u32) -> u32 {
    let mut value = 0x01u8;
    for _ in 1..i {
        value = xtime(value);
    }
    u32::from(value) << 24
}
