//! Bounded integer sampling
//!
//! Maps uniformly random raw words onto `[0, n)` without modulo bias and
//! without a division per call, following Stephen Canon's "optimal algorithm
//! for bounded random integers" (swift PR #39143).
//!
//! # Algorithm
//!
//! Treat the raw word `v` as a binary fraction `0.v` and multiply by `n`.
//! The high half of the double-width product is the candidate result and the
//! low half is the fractional remainder. When the remainder is below `n` the
//! next digit of the fraction can still carry into the result, so a second
//! word is multiplied in and its carry added.
//!
//! Both functions are pure: the caller supplies the raw words, which keeps
//! the arithmetic testable independent of any generator.

/// Split `n * v` into (high, low) 64-bit halves
#[inline]
fn mul_u64(n: u64, v: u64) -> (u64, u64) {
    let product = u128::from(n) * u128::from(v);
    ((product >> 64) as u64, product as u64)
}

/// Split `n * v` into (high, low) 32-bit halves
#[inline]
fn mul_u32(n: u32, v: u32) -> (u32, u32) {
    let product = u64::from(n) * u64::from(v);
    ((product >> 32) as u32, product as u32)
}

/// Carry out of `frac + high(n * digit)`
#[inline]
fn refine_carry_u32(n: u32, frac: u32, digit: u32) -> u32 {
    let (hi, _) = mul_u32(n, digit);
    let (_, carry) = frac.overflowing_add(hi);
    u32::from(carry)
}

/// Uniform value in `[0, n)` from a 64-bit bound
///
/// `v` is the first raw word; `refill` is only called when the refinement
/// digit is needed, so on average one word is consumed. `n == 0` yields 0.
///
/// # Example
/// ```
/// use sfc_rand::rng::bounded::uint64n;
///
/// // v = 2^63 is exactly one half, so the result is n / 2
/// assert_eq!(uint64n(10, 1 << 63, || 0), 5);
/// assert_eq!(uint64n(0, u64::MAX, || unreachable!()), 0);
/// ```
#[inline]
pub fn uint64n(n: u64, v: u64, refill: impl FnOnce() -> u64) -> u64 {
    let (res, frac) = mul_u64(n, v);
    if frac < n {
        let (hi, _) = mul_u64(n, refill());
        let (_, carry) = frac.overflowing_add(hi);
        return res + u64::from(carry);
    }
    res
}

/// Uniform value in `[0, n)` from a 32-bit bound
///
/// Narrow variant of [`uint64n`] that takes both 32-bit digits out of a
/// single raw word: the low half first, the high half as the refinement
/// digit. Never needs a second word. `n == 0` yields 0.
#[inline]
pub fn uint32n(n: u32, v: u64) -> u32 {
    let (res, frac) = mul_u32(n, v as u32);
    if frac < n {
        return res + refine_carry_u32(n, frac, (v >> 32) as u32);
    }
    res
}

/// High 32 bits of the two-digit narrow product, refinement always applied
///
/// Equal to the top of the 96-bit product `n * rotl(v, 32)`: the narrow
/// arithmetic in [`uint32n`] is the 64-bit algorithm restricted to 32-bit
/// bounds, with the digits of `v` taken low half first.
pub fn narrow_high_u32(n: u32, v: u64) -> u32 {
    let (res, frac) = mul_u32(n, v as u32);
    res + refine_carry_u32(n, frac, (v >> 32) as u32)
}
