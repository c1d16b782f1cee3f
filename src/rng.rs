// Copyright 2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A stateful generator on top of Philox2x64-7.

use core::fmt;

use rand_core::impls::fill_bytes_via_next;
use rand_core::{Error, RngCore, SeedableRng};
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::permute::permute_in_place;
use crate::rounds::Rounds;
use crate::variant::Philox2x64;

// Hexadecimal digits of pi.
pub(crate) const DEFAULT_COUNTER: [u64; 2] = [0x243f6a8885a308d3, 0x13198a2e03707344];
pub(crate) const DEFAULT_KEY: u64 = 0xa4093822299f31d0;

/// A Philox2x64-7 random number generator.
///
/// Each permutation of the 128-bit counter yields two 64-bit outputs: first
/// the second counter word, then the first. Only after both have been
/// consumed is the first counter word incremented (wrapping, with no carry
/// into the second word) and the permutation run again on the previous
/// output.
///
/// The key schedule is carried across permutations: each permutation leaves
/// the key bumped six times (once between each of its 7 rounds), and the
/// next permutation starts from that key. [`key`](Self::key) reports the
/// advanced key.
///
/// The generator is a plain value: clone it to fork the stream, and wrap it
/// in a lock to share it between threads.
///
/// ```
/// use rand_philox::Philox2x64Rng;
///
/// let mut rng = Philox2x64Rng::new(42);
/// let x = rng.random();
/// assert!((0.0..1.0).contains(&x));
/// ```
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Philox2x64Rng {
    counter: [u64; 2],
    key: [u64; 1],
    pending: bool,
}

impl Philox2x64Rng {
    /// Rounds per permutation.
    pub const ROUNDS: Rounds = Rounds(7);

    /// Create a generator with the given key and the default counter.
    pub const fn new(key: u64) -> Self {
        Self::from_parts(DEFAULT_COUNTER, key)
    }

    /// Create a generator with an explicit counter and key.
    ///
    /// Nothing is pending, so the first output triggers a permutation.
    pub const fn from_parts(counter: [u64; 2], key: u64) -> Self {
        Philox2x64Rng {
            counter,
            key: [key],
            pending: false,
        }
    }

    /// Replace the key.
    ///
    /// The next permutation starts its key schedule from `value`. The counter and any pending half-result are kept, so the stream is
    /// re-keyed mid-way rather than restarted. Construct a new generator to
    /// restart it.
    pub fn seed(&mut self, value: u64) {
        self.key[0] = value;
    }

    /// Next raw 64-bit output.
    #[inline]
    pub fn next_word(&mut self) -> u64 {
        if self.pending {
            self.pending = false;
            return self.counter[0];
        }
        self.counter[0] = self.counter[0].wrapping_add(1);
        permute_in_place::<Philox2x64>(&mut self.counter, &mut self.key, Self::ROUNDS);
        self.pending = true;
        self.counter[1]
    }

    /// Next sample, uniform in the half-open interval `[0, 1)`.
    ///
    /// Uses the 53 most significant bits of [`next_word`](Self::next_word),
    /// so every output is a multiple of 2<sup>-53</sup> and `1.0` is never
    /// returned.
    #[inline]
    pub fn random(&mut self) -> f64 {
        unit_f64(self.next_word())
    }

    /// Current counter.
    pub fn counter(&self) -> [u64; 2] {
        self.counter
    }

    /// Current key, including the bumps of all permutations so far.
    pub fn key(&self) -> u64 {
        self.key[0]
    }

    /// Whether the second output of the last permutation is still unused.
    pub fn has_pending(&self) -> bool {
        self.pending
    }
}

/// Map a word to `[0, 1)` by its 53 high bits.
#[inline(always)]
pub(crate) fn unit_f64(word: u64) -> f64 {
    const SCALE: f64 = 1.0 / (1u64 << 53) as f64;
    (word >> 11) as f64 * SCALE
}

impl Default for Philox2x64Rng {
    /// The generator in its reference start state.
    fn default() -> Self {
        Self::new(DEFAULT_KEY)
    }
}

// Custom Debug implementation that does not expose the internal state
impl fmt::Debug for Philox2x64Rng {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Philox2x64Rng {{}}")
    }
}

impl RngCore for Philox2x64Rng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_word() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.next_word()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Philox2x64Rng {
    type Seed = [u8; 8];

    /// The seed is the key, read little-endian; the counter starts at its
    /// default.
    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    /// Use `state` directly as the key.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
