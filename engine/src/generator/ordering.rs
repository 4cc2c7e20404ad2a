//! Ordering algorithms
//!
//! Permutations, shuffles and samples without replacement, all Fisher-Yates
//! variants drawing their indices from [`Rand::uint64n`].

use super::{Rand, RandError};
use std::collections::HashMap;

impl Rand {
    /// Returns a pseudo-random permutation of the integers in `[0, n)`
    ///
    /// Inside-out Fisher-Yates: one bounded draw per element after the first.
    ///
    /// # Example
    /// ```
    /// use sfc_rand::Rand;
    ///
    /// let mut p = Rand::new(1).perm(5);
    /// p.sort_unstable();
    /// assert_eq!(p, vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn perm(&mut self, n: usize) -> Vec<usize> {
        let mut p = vec![0; n];
        for i in 1..n {
            let j = self.uint64n(i as u64 + 1) as usize;
            p[i] = p[j];
            p[j] = i;
        }
        p
    }

    /// Pseudo-randomize the order of `n` externally owned elements
    ///
    /// `swap(i, j)` must exchange the elements at indexes `i` and `j`.
    pub fn shuffle<F>(&mut self, n: usize, mut swap: F)
    where
        F: FnMut(usize, usize),
    {
        for i in (1..n).rev() {
            let j = self.uint64n(i as u64 + 1) as usize;
            swap(i, j);
        }
    }

    /// Shuffle a slice in place
    ///
    /// Same draws as [`Rand::shuffle`] with `n = items.len()`.
    pub fn shuffle_slice<T>(&mut self, items: &mut [T]) {
        self.shuffle(items.len(), |i, j| items.swap(i, j));
    }

    /// Returns `k` distinct integers from `[0, n)` in random order
    ///
    /// A partial Fisher-Yates over a virtual identity array. Only displaced
    /// positions are stored, so both engine calls and memory are O(k)
    /// regardless of `n`.
    ///
    /// # Errors
    /// [`RandError::InvalidArgument`] if `k > n`.
    pub fn try_sample(&mut self, k: usize, n: usize) -> Result<Vec<usize>, RandError> {
        if k > n {
            return Err(RandError::InvalidArgument {
                op: "sample",
                reason: format!("k = {} exceeds n = {}", k, n),
            });
        }

        let mut displaced: HashMap<usize, usize> = HashMap::with_capacity(k);
        let mut out = Vec::with_capacity(k);
        for i in 0..k {
            let j = i + self.uint64n((n - i) as u64) as usize;
            let at_i = displaced.get(&i).copied().unwrap_or(i);
            let at_j = displaced.get(&j).copied().unwrap_or(j);
            displaced.insert(j, at_i);
            out.push(at_j);
        }
        Ok(out)
    }

    /// Returns `k` distinct integers from `[0, n)` in random order
    ///
    /// # Panics
    /// Panics if `k > n`.
    ///
    /// # Example
    /// ```
    /// use sfc_rand::Rand;
    ///
    /// let hand = Rand::new(7).sample(5, 52);
    /// assert_eq!(hand.len(), 5);
    /// assert!(hand.iter().all(|&card| card < 52));
    /// ```
    pub fn sample(&mut self, k: usize, n: usize) -> Vec<usize> {
        match self.try_sample(k, n) {
            Ok(v) => v,
            Err(err) => panic!("{}", err),
        }
    }
}
