//! # Word Primitives
//!
//! The 32-bit rotate and the six mixing functions built on it.

/// Rotate `x` right by `b` bits within a 32-bit word.
///
/// Bits shifted out on the right re-enter on the left. Callers keep `b`
/// in `0..32`.
#[inline(always)]
pub fn rotr(x: u32, b: u32) -> u32 {
    x.rotate_right(b)
}

/// Choose: each bit of `x` selects the matching bit of `y` (set) or `z` (clear).
#[inline(always)]
pub fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

/// Majority of the three input bits at each position.
#[inline(always)]
pub fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

/// Schedule extension mix for `W[i-15]`. The final term is a logical shift.
#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    rotr(x, 7) ^ rotr(x, 18) ^ (x >> 3)
}

/// Schedule extension mix for `W[i-2]`.
#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    rotr(x, 17) ^ rotr(x, 19) ^ (x >> 10)
}
