//! Python bindings
//!
//! Exposes the generator to Python as `Rand`. Out-of-contract arguments
//! raise `ValueError`; truncated state raises `EOFError`.

pub mod rand;
