// Copyright 2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Philox round function and key schedule.
//!
//! A variant is described by three traits: [`Variant`] fixes the word type
//! and the counter and key shapes, [`RoundStep`] mixes the counter once under
//! the current key, and [`KeyBump`] advances the key between rounds. The
//! [`permute`](crate::permute) driver is generic over any type implementing
//! both steps.

use core::fmt;

use crate::word::Word;

/// Word type and array shapes of a Philox variant.
pub trait Variant {
    /// Word the counter and key are made of.
    type Word: Word;

    /// Counter block, `[Self::Word; N]`.
    type Counter: Copy
        + Default
        + Eq
        + fmt::Debug
        + AsRef<[Self::Word]>
        + AsMut<[Self::Word]>;

    /// Key, `[Self::Word; N / 2]`.
    type Key: Copy + Default + Eq + fmt::Debug + AsRef<[Self::Word]> + AsMut<[Self::Word]>;
}

/// One application of the mixing function to a counter.
pub trait RoundStep: Variant {
    /// Per-lane odd multipliers.
    const MULTIPLIERS: Self::Key;

    /// Mix `counter` in place under `key`. The key is not modified.
    fn round(counter: &mut Self::Counter, key: &Self::Key);
}

/// The key schedule applied between two rounds.
pub trait KeyBump: Variant {
    /// Per-lane additive round constants.
    const ROUND_CONSTANTS: Self::Key;

    /// Add the round constants to `key`, modulo 2<sup>W</sup>.
    fn bump(key: &mut Self::Key);
}

/// Two-word round: `[c0, c1] -> [hi(m0·c0) ^ c1 ^ k0, lo(m0·c0)]`.
#[inline(always)]
pub(crate) fn round2<W: Word>(counter: &mut [W; 2], key: &[W; 1], m: &[W; 1]) {
    let (hi, lo) = m[0].mul_hi_lo(counter[0]);
    *counter = [hi ^ counter[1] ^ key[0], lo];
}

/// Four-word round. Lane 0 takes the high half of the lane-2 product and
/// lane 2 the high half of the lane-0 product.
#[inline(always)]
pub(crate) fn round4<W: Word>(counter: &mut [W; 4], key: &[W; 2], m: &[W; 2]) {
    let (hi0, lo0) = m[0].mul_hi_lo(counter[0]);
    let (hi1, lo1) = m[1].mul_hi_lo(counter[2]);
    *counter = [
        hi1 ^ counter[1] ^ key[0],
        lo1,
        hi0 ^ counter[3] ^ key[1],
        lo0,
    ];
}

#[inline(always)]
pub(crate) fn bump<W: Word, const K: usize>(key: &mut [W; K], w: &[W; K]) {
    for (k, &c) in key.iter_mut().zip(w.iter()) {
        *k = k.add_mod(c);
    }
}
