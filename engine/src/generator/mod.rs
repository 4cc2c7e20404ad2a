//! Generator - the public random source
//!
//! [`Rand`] wraps the SFC64 engine together with the byte-stream cursor and
//! exposes every derived accessor: raw words, masked integers, bounded
//! integers, floats, bytes, permutations and samples.
//!
//! # Critical Invariants
//!
//! - **Determinism**: identical state produces identical future output
//! - **Cursor range**: seeding and reading keep the byte cursor in `[0, 8]`;
//!   any other value can only come from a decoded binary state
//! - **Single consumer**: every accessor advances the same engine; there is
//!   no other hidden state

mod distributions;
mod ordering;
mod read;

use crate::config::SeedConfig;
use crate::rng::{bounded, Sfc64};
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};
use thiserror::Error;

const INT24_MASK: u64 = (1 << 24) - 1;
const INT31_MASK: u64 = (1 << 31) - 1;
const INT53_MASK: u64 = (1 << 53) - 1;
const INT63_MASK: u64 = (1 << 63) - 1;
const INT_MASK: u64 = isize::MAX as u64;

/// 2^-24
const FLOAT32_SCALE: f32 = 1.0 / (1u32 << 24) as f32;

/// 2^-53
const FLOAT64_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// Errors raised by out-of-contract arguments
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RandError {
    #[error("invalid argument to {op}: {reason}")]
    InvalidArgument { op: &'static str, reason: String },
}

impl RandError {
    fn non_positive_bound(op: &'static str, n: i64) -> Self {
        RandError::InvalidArgument {
            op,
            reason: format!("bound must be positive, got {}", n),
        }
    }
}

/// Returns a non-deterministic seed value.
///
/// Drawn from the standard library's randomly keyed hasher, so every call in
/// every process yields a fresh value. Not suitable for cryptographic use.
pub fn random_seed() -> u64 {
    let mut hasher = RandomState::new().build_hasher();
    hasher.write_u64(0x9e37_79b9_7f4a_7c15);
    hasher.finish()
}

/// Deterministic pseudo-random number generator based on SFC64
///
/// A plain value: cloning forks the output trajectory, after which the two
/// generators evolve independently. Not synchronized; share across threads
/// through a lock or keep one generator per thread.
///
/// # Example
/// ```
/// use sfc_rand::Rand;
///
/// let mut rng = Rand::new(12345);
/// let raw = rng.uint64();
/// let die = rng.intn(6) + 1;
/// let p = rng.float64();
/// assert!((1..=6).contains(&die));
/// assert!((0.0..1.0).contains(&p));
/// # let _ = raw;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rand {
    engine: Sfc64,
    /// Pending word for the byte stream, drained low byte first
    read_val: u64,
    /// Unconsumed bytes left in `read_val`
    read_pos: i8,
}

impl Rand {
    /// Create a generator seeded with the given value
    pub fn new(seed: u64) -> Self {
        Self::with_engine(Sfc64::new(seed))
    }

    /// Create a generator from three independent seed words
    pub fn from_seeds(a: u64, b: u64, c: u64) -> Self {
        Self::with_engine(Sfc64::from_seeds(a, b, c))
    }

    /// Create a generator seeded from system entropy
    ///
    /// The resulting stream is not reproducible unless its state is captured
    /// with [`Rand::marshal_binary`] or [`Rand::snapshot`].
    pub fn from_entropy() -> Self {
        let (a, b, c) = (random_seed(), random_seed(), random_seed());
        tracing::debug!("seeding generator from entropy");
        Self::from_seeds(a, b, c)
    }

    /// Create a generator as described by a seed configuration
    pub fn from_config(config: &SeedConfig) -> Self {
        match *config {
            SeedConfig::Fixed { seed } => Self::new(seed),
            SeedConfig::Triple { a, b, c } => Self::from_seeds(a, b, c),
            SeedConfig::Entropy => Self::from_entropy(),
        }
    }

    fn with_engine(engine: Sfc64) -> Self {
        Self {
            engine,
            read_val: 0,
            read_pos: 0,
        }
    }

    pub(crate) fn from_raw_parts(engine: Sfc64, read_val: u64, read_pos: i8) -> Self {
        Self {
            engine,
            read_val,
            read_pos,
        }
    }

    pub(crate) fn engine(&self) -> &Sfc64 {
        &self.engine
    }

    pub(crate) fn read_state(&self) -> (u64, i8) {
        (self.read_val, self.read_pos)
    }

    /// Re-initialize the generator to the deterministic state for `seed`
    ///
    /// Overwrites everything, including any bytes left over from a previous
    /// [`Rand::fill_bytes`] call.
    pub fn seed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    #[inline]
    fn next(&mut self) -> u64 {
        self.engine.next()
    }

    /// Returns a pseudo-random 64-bit value
    #[inline]
    pub fn uint64(&mut self) -> u64 {
        self.next()
    }

    /// Returns a pseudo-random 32-bit value (low half of the raw word)
    #[inline]
    pub fn uint32(&mut self) -> u32 {
        self.next() as u32
    }

    /// Returns a non-negative pseudo-random 31-bit integer
    pub fn int31(&mut self) -> i32 {
        (self.next() & INT31_MASK) as i32
    }

    /// Returns a non-negative pseudo-random 63-bit integer
    pub fn int63(&mut self) -> i64 {
        (self.next() & INT63_MASK) as i64
    }

    /// Returns a non-negative pseudo-random platform-width integer
    pub fn int(&mut self) -> isize {
        (self.next() & INT_MASK) as isize
    }

    /// Returns a pseudo-random number in `[0, n)`; `uint64n(0)` returns 0
    #[inline]
    pub fn uint64n(&mut self, n: u64) -> u64 {
        let v = self.next();
        bounded::uint64n(n, v, || self.next())
    }

    /// Returns a pseudo-random number in `[0, n)`; `uint32n(0)` returns 0
    ///
    /// Always consumes exactly one raw word.
    #[inline]
    pub fn uint32n(&mut self, n: u32) -> u32 {
        bounded::uint32n(n, self.next())
    }

    /// Returns a pseudo-random number in `[0, n)`
    ///
    /// # Errors
    /// [`RandError::InvalidArgument`] if `n <= 0`.
    pub fn try_int31n(&mut self, n: i32) -> Result<i32, RandError> {
        if n <= 0 {
            return Err(RandError::non_positive_bound("int31n", i64::from(n)));
        }
        Ok(self.uint32n(n as u32) as i32)
    }

    /// Returns a pseudo-random number in `[0, n)`
    ///
    /// # Errors
    /// [`RandError::InvalidArgument`] if `n <= 0`.
    pub fn try_int63n(&mut self, n: i64) -> Result<i64, RandError> {
        if n <= 0 {
            return Err(RandError::non_positive_bound("int63n", n));
        }
        Ok(self.uint64n(n as u64) as i64)
    }

    /// Returns a pseudo-random number in `[0, n)`
    ///
    /// # Errors
    /// [`RandError::InvalidArgument`] if `n <= 0`.
    pub fn try_intn(&mut self, n: isize) -> Result<isize, RandError> {
        if n <= 0 {
            return Err(RandError::non_positive_bound("intn", n as i64));
        }
        Ok(self.uint64n(n as u64) as isize)
    }

    /// Returns a pseudo-random number in `[0, n)`
    ///
    /// # Panics
    /// Panics if `n <= 0`.
    pub fn int31n(&mut self, n: i32) -> i32 {
        match self.try_int31n(n) {
            Ok(v) => v,
            Err(err) => panic!("{}", err),
        }
    }

    /// Returns a pseudo-random number in `[0, n)`
    ///
    /// # Panics
    /// Panics if `n <= 0`.
    pub fn int63n(&mut self, n: i64) -> i64 {
        match self.try_int63n(n) {
            Ok(v) => v,
            Err(err) => panic!("{}", err),
        }
    }

    /// Returns a pseudo-random number in `[0, n)`
    ///
    /// # Panics
    /// Panics if `n <= 0`.
    ///
    /// # Example
    /// ```
    /// use sfc_rand::Rand;
    ///
    /// let mut rng = Rand::new(1);
    /// let roll = rng.intn(6);
    /// assert!((0..6).contains(&roll));
    /// ```
    pub fn intn(&mut self, n: isize) -> isize {
        match self.try_intn(n) {
            Ok(v) => v,
            Err(err) => panic!("{}", err),
        }
    }

    /// Returns a pseudo-random `f32` in `[0.0, 1.0)`
    ///
    /// Uses the low 24 bits of one raw word, so every result is an exact
    /// multiple of 2^-24 and 1.0 is unreachable.
    pub fn float32(&mut self) -> f32 {
        (self.next() & INT24_MASK) as f32 * FLOAT32_SCALE
    }

    /// Returns a pseudo-random `f64` in `[0.0, 1.0)`
    ///
    /// Uses the low 53 bits of one raw word, so every result is an exact
    /// multiple of 2^-53 and 1.0 is unreachable.
    pub fn float64(&mut self) -> f64 {
        (self.next() & INT53_MASK) as f64 * FLOAT64_SCALE
    }
}
