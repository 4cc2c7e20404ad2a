//! Checkpoint - Save/Load Generator State
//!
//! Two formats for the same state:
//!
//! - **Binary**: the fixed 41-byte little-endian layout, stable across
//!   implementations and process runs
//! - **Snapshot**: a serde view of the same fields plus a SHA256 digest of the
//!   binary encoding, for JSON checkpoints that can be validated on load
//!
//! # Binary Layout
//!
//! | Offset | Size | Field                          |
//! |--------|------|--------------------------------|
//! | 0      | 8    | register `a`                   |
//! | 8      | 8    | register `b`                   |
//! | 16     | 8    | register `c`                   |
//! | 24     | 8    | counter                        |
//! | 32     | 8    | pending byte-stream word       |
//! | 40     | 1    | byte cursor (signed 8-bit)     |
//!
//! # Critical Invariants
//!
//! - **Round trip**: restoring an encoding yields the same future output and
//!   the same re-encoding
//! - **No partial restore**: a failed decode leaves the target untouched

use crate::generator::Rand;
use crate::rng::Sfc64;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Size of the binary state encoding in bytes
pub const STATE_SIZE: usize = 8 * 4 + 8 + 1;

/// Errors that can occur while restoring generator state
#[derive(Debug, Error, PartialEq)]
pub enum CheckpointError {
    #[error("insufficient data: need {expected} bytes of generator state, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    #[error("byte cursor {0} outside [0, 8]")]
    InvalidCursor(i8),

    #[error("state digest mismatch: expected {expected}, computed {computed}")]
    DigestMismatch { expected: String, computed: String },

    #[error("snapshot serialization failed: {0}")]
    Serialization(String),
}

// ============================================================================
// Binary Codec
// ============================================================================

fn encode(words: [u64; 4], read_val: u64, read_pos: i8) -> [u8; STATE_SIZE] {
    let mut data = [0u8; STATE_SIZE];
    for (i, word) in words.iter().enumerate() {
        data[i * 8..(i + 1) * 8].copy_from_slice(&word.to_le_bytes());
    }
    data[32..40].copy_from_slice(&read_val.to_le_bytes());
    data[40] = read_pos as u8;
    data
}

fn read_u64(data: &[u8], offset: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&data[offset..offset + 8]);
    u64::from_le_bytes(word)
}

impl Rand {
    /// Encode the full generator state into its 41-byte binary form
    ///
    /// # Example
    /// ```
    /// use sfc_rand::Rand;
    ///
    /// let mut rng = Rand::new(42);
    /// let saved = rng.marshal_binary();
    /// let expected = rng.uint64();
    ///
    /// let mut restored = Rand::new(0);
    /// restored.unmarshal_binary(&saved).unwrap();
    /// assert_eq!(restored.uint64(), expected);
    /// ```
    pub fn marshal_binary(&self) -> [u8; STATE_SIZE] {
        let (read_val, read_pos) = self.read_state();
        encode(self.engine().parts(), read_val, read_pos)
    }

    /// Restore generator state from its binary form
    ///
    /// Bytes past the first [`STATE_SIZE`] are ignored.
    ///
    /// # Errors
    /// [`CheckpointError::InsufficientData`] if `data` is shorter than
    /// [`STATE_SIZE`]; `self` is not modified in that case.
    pub fn unmarshal_binary(&mut self, data: &[u8]) -> Result<(), CheckpointError> {
        *self = Self::from_binary(data)?;
        Ok(())
    }

    /// Build a new generator from its binary form
    ///
    /// # Errors
    /// [`CheckpointError::InsufficientData`] if `data` is shorter than
    /// [`STATE_SIZE`].
    pub fn from_binary(data: &[u8]) -> Result<Self, CheckpointError> {
        if data.len() < STATE_SIZE {
            tracing::trace!(len = data.len(), "rejecting truncated generator state");
            return Err(CheckpointError::InsufficientData {
                expected: STATE_SIZE,
                actual: data.len(),
            });
        }

        let engine = Sfc64::from_parts(
            read_u64(data, 0),
            read_u64(data, 8),
            read_u64(data, 16),
            read_u64(data, 24),
        );
        Ok(Self::from_raw_parts(
            engine,
            read_u64(data, 32),
            data[40] as i8,
        ))
    }

    /// Hex SHA256 of the binary encoding
    ///
    /// Identifies a position in the stream; two generators with the same
    /// digest produce the same future output.
    pub fn state_digest(&self) -> String {
        digest_of(&self.marshal_binary())
    }

    /// Capture the state as a serializable snapshot
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::from(self)
    }

    /// Restore a generator from a snapshot after validating it
    ///
    /// # Errors
    /// - [`CheckpointError::InvalidCursor`] if the cursor is outside `[0, 8]`
    /// - [`CheckpointError::DigestMismatch`] if the fields do not hash to the
    ///   recorded digest
    pub fn restore(snapshot: &StateSnapshot) -> Result<Self, CheckpointError> {
        validate_snapshot(snapshot)?;
        Ok(Self::from_raw_parts(
            Sfc64::from_parts(snapshot.a, snapshot.b, snapshot.c, snapshot.counter),
            snapshot.read_val,
            snapshot.read_pos,
        ))
    }
}

fn digest_of(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

// ============================================================================
// Snapshot Structures
// ============================================================================

/// Complete generator state snapshot
///
/// Field for field the same content as the binary encoding, plus the digest
/// used to detect hand-edited or corrupted checkpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub a: u64,
    pub b: u64,
    pub c: u64,

    /// Engine counter (never 0 for a freshly seeded generator)
    pub counter: u64,

    /// Pending byte-stream word
    pub read_val: u64,

    /// Unconsumed bytes in `read_val`
    pub read_pos: i8,

    /// SHA256 of the 41-byte binary encoding
    pub digest: String,
}

impl From<&Rand> for StateSnapshot {
    fn from(rng: &Rand) -> Self {
        let [a, b, c, counter] = rng.engine().parts();
        let (read_val, read_pos) = rng.read_state();
        StateSnapshot {
            a,
            b,
            c,
            counter,
            read_val,
            read_pos,
            digest: rng.state_digest(),
        }
    }
}

impl StateSnapshot {
    /// Binary encoding of the snapshot's fields
    pub fn to_binary(&self) -> [u8; STATE_SIZE] {
        encode(
            [self.a, self.b, self.c, self.counter],
            self.read_val,
            self.read_pos,
        )
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::Serialization(e.to_string()))
    }

    /// Parse from a JSON string (not validated; see [`Rand::restore`])
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::Serialization(e.to_string()))
    }
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Validate snapshot integrity
///
/// Checks the cursor range and that the recorded digest matches the fields.
pub fn validate_snapshot(snapshot: &StateSnapshot) -> Result<(), CheckpointError> {
    if !(0..=8).contains(&snapshot.read_pos) {
        tracing::debug!(read_pos = snapshot.read_pos, "snapshot cursor out of range");
        return Err(CheckpointError::InvalidCursor(snapshot.read_pos));
    }

    let computed = digest_of(&snapshot.to_binary());
    if computed != snapshot.digest {
        tracing::debug!(expected = %snapshot.digest, %computed, "snapshot digest mismatch");
        return Err(CheckpointError::DigestMismatch {
            expected: snapshot.digest.clone(),
            computed,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_size_is_41() {
        assert_eq!(STATE_SIZE, 41);
        assert_eq!(Rand::new(42).marshal_binary().len(), 41);
    }

    #[test]
    fn test_seed_42_golden_encoding() {
        let data = Rand::new(42).marshal_binary();
        assert_eq!(read_u64(&data, 0), 0x25fd_2595_e35a_6071);
        assert_eq!(read_u64(&data, 8), 0x5f26_c275_afba_c491);
        assert_eq!(read_u64(&data, 16), 0x7387_1d4b_f4f7_a915);
        assert_eq!(read_u64(&data, 24), 13);
        assert_eq!(&data[32..], &[0u8; 9]);
    }

    #[test]
    fn test_cursor_encoded_in_last_byte() {
        let mut rng = Rand::new(1);
        let mut buf = [0u8; 3];
        rng.fill_bytes(&mut buf);

        let data = rng.marshal_binary();
        assert_eq!(data[40], 5);
        // Remaining bytes of the first word: 0x3f7fcc2e95d8fb8b >> 24
        assert_eq!(read_u64(&data, 32), 0x3f_7fcc_2e95);
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let rng = Rand::new(3);
        let mut data = rng.marshal_binary().to_vec();
        data.extend_from_slice(&[0xff; 16]);

        assert_eq!(Rand::from_binary(&data).unwrap(), rng);
    }

    #[test]
    fn test_truncated_state_rejected_without_mutation() {
        let mut target = Rand::new(7);
        target.uint64();
        let before = target.clone();

        let data = Rand::new(42).marshal_binary();
        let err = target.unmarshal_binary(&data[..40]).unwrap_err();

        assert_eq!(
            err,
            CheckpointError::InsufficientData {
                expected: 41,
                actual: 40
            }
        );
        assert_eq!(target, before);
    }

    #[test]
    fn test_snapshot_digest_matches_binary() {
        let rng = Rand::new(10);
        let snapshot = rng.snapshot();
        assert_eq!(snapshot.to_binary(), rng.marshal_binary());
        assert_eq!(snapshot.digest, rng.state_digest());
        assert_eq!(snapshot.digest.len(), 64);
    }

    #[test]
    fn test_tampered_snapshot_rejected() {
        let mut snapshot = Rand::new(10).snapshot();
        snapshot.counter += 1;

        assert!(matches!(
            Rand::restore(&snapshot),
            Err(CheckpointError::DigestMismatch { .. })
        ));
    }

    #[test]
    fn test_out_of_range_cursor_rejected() {
        let mut snapshot = Rand::new(10).snapshot();
        snapshot.read_pos = 9;
        assert_eq!(
            Rand::restore(&snapshot),
            Err(CheckpointError::InvalidCursor(9))
        );
    }
}
