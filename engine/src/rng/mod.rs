//! Deterministic bit-stream engine
//!
//! Uses the SFC64 ("Small Fast Counting") algorithm for fast, deterministic
//! random number generation, plus the stateless bounded-integer sampler that
//! turns raw 64-bit words into unbiased integers in `[0, n)`.
//!
//! CRITICAL: Every derived value in this crate is computed from words emitted
//! by [`Sfc64::next`]. Nothing else advances the state.

pub mod bounded;
mod sfc64;

pub use sfc64::Sfc64;
