//! Byte-stream reader
//!
//! Raw words are drained low byte first. Whatever is left of the last word
//! stays pending in the generator, so splitting one read into several never
//! changes the bytes produced.

use super::Rand;
use std::io;

const WORD_BYTES: i8 = 8;

impl Rand {
    /// Fill `buf` with pseudo-random bytes
    ///
    /// A cursor outside `[0, 8]` (only reachable by decoding a hand-made
    /// binary state) counts down with 8-bit wraparound until it reaches 0,
    /// emitting the shifted-out pending word as zero bytes meanwhile.
    ///
    /// # Example
    /// ```
    /// use sfc_rand::Rand;
    ///
    /// let mut whole = [0u8; 12];
    /// Rand::new(1).fill_bytes(&mut whole);
    ///
    /// let mut split = [0u8; 12];
    /// let mut rng = Rand::new(1);
    /// rng.fill_bytes(&mut split[..5]);
    /// rng.fill_bytes(&mut split[5..]);
    ///
    /// assert_eq!(whole, split);
    /// ```
    pub fn fill_bytes(&mut self, buf: &mut [u8]) {
        let mut pos = self.read_pos;
        let mut val = self.read_val;
        for byte in buf.iter_mut() {
            if pos == 0 {
                val = self.next();
                pos = WORD_BYTES;
            }
            *byte = val as u8;
            val >>= 8;
            // Decoded states may carry any cursor byte; wrap like an 8-bit counter
            pos = pos.wrapping_sub(1);
        }
        self.read_pos = pos;
        self.read_val = val;
    }
}

/// Never fails and always fills the whole buffer.
impl io::Read for Rand {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.fill_bytes(buf);
        Ok(buf.len())
    }
}
