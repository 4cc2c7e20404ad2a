//! SFC Rand - Deterministic Random Number Engine
//!
//! Reproducible, statistically strong pseudo-random numbers from a 64-bit
//! seed, with unbiased bounded integers, floats, byte streams, permutations
//! and samples derived from a single SFC64 engine.
//!
//! # Architecture
//!
//! - **rng**: SFC64 bit-stream engine and the bounded integer sampler
//! - **generator**: `Rand`, the public accessor surface
//! - **checkpoint**: 41-byte binary state codec and validated JSON snapshots
//! - **config**: serde seed configuration
//!
//! # Critical Invariants
//!
//! 1. Same state → same future output, on every platform
//! 2. Bounded integers carry no modulo bias
//! 3. The binary state layout is fixed at 41 little-endian bytes
//!
//! Not cryptographically secure: the state can be recovered from output.

// Module declarations
pub mod checkpoint;
pub mod config;
pub mod generator;
pub mod rng;

// Re-exports for convenience
pub use checkpoint::{CheckpointError, StateSnapshot, STATE_SIZE};
pub use config::{ConfigError, SeedConfig};
pub use generator::{random_seed, Rand, RandError};
pub use rng::Sfc64;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn sfc_rand(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::rand::PyRand>()?;
    Ok(())
}
