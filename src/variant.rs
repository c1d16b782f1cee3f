// Copyright 2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The four Philox variants.
//!
//! Each variant is a zero-sized type implementing [`RoundStep`] and
//! [`KeyBump`] with its own constant table; [`VariantKind`] names the same
//! four shapes at runtime.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::permute::permute;
use crate::round::{bump, round2, round4, KeyBump, RoundStep, Variant};
use crate::rounds::Rounds;
use crate::word::Word;
use crate::Error;

// Multipliers
const PHILOX_M2X32: [u32; 1] = [0xD256D193];
const PHILOX_M4X32: [u32; 2] = [0xD2511F53, 0xCD9E8D57];
const PHILOX_M2X64: [u64; 1] = [0xD2B74407B1CE6E93];
const PHILOX_M4X64: [u64; 2] = [0xD2E7470EE14C6C93, 0xCA5A826395121157];

// Weyl constants: golden ratio and sqrt(3) - 1
const PHILOX_W32: [u32; 2] = [0x9E3779B9, 0xBB67AE85];
const PHILOX_W64: [u64; 2] = [0x9E3779B97F4A7C15, 0xBB67AE8584CAA73B];

macro_rules! philox_variant {
    ($(#[$meta:meta])* $name:ident, $word:ty, $n:expr, $round:ident,
     $mult:expr, $weyl:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name;

        impl Variant for $name {
            type Word = $word;
            type Counter = [$word; $n];
            type Key = [$word; $n / 2];
        }

        impl RoundStep for $name {
            const MULTIPLIERS: [$word; $n / 2] = $mult;

            #[inline(always)]
            fn round(counter: &mut [$word; $n], key: &[$word; $n / 2]) {
                $round(counter, key, &Self::MULTIPLIERS)
            }
        }

        impl KeyBump for $name {
            const ROUND_CONSTANTS: [$word; $n / 2] = $weyl;

            #[inline(always)]
            fn bump(key: &mut [$word; $n / 2]) {
                bump(key, &Self::ROUND_CONSTANTS)
            }
        }
    };
}

philox_variant!(
    /// Philox with a 2 × 32-bit counter and a 32-bit key.
    Philox2x32, u32, 2, round2, PHILOX_M2X32, [PHILOX_W32[0]]
);
philox_variant!(
    /// Philox with a 2 × 64-bit counter and a 64-bit key.
    Philox2x64, u64, 2, round2, PHILOX_M2X64, [PHILOX_W64[0]]
);
philox_variant!(
    /// Philox with a 4 × 32-bit counter and a 2 × 32-bit key.
    Philox4x32, u32, 4, round4, PHILOX_M4X32, PHILOX_W32
);
philox_variant!(
    /// Philox with a 4 × 64-bit counter and a 2 × 64-bit key.
    Philox4x64, u64, 4, round4, PHILOX_M4X64, PHILOX_W64
);

macro_rules! entry_points {
    ($variant:ident, $word:ty, $n:expr, $name:ident, $name10:ident) => {
        #[doc = concat!("Apply `", stringify!($name), "` with the given number of rounds.")]
        ///
        /// Fails with [`Error::InvalidRoundCount`] unless `rounds` is in
        /// `1..=16`.
        #[inline]
        pub fn $name(
            counter: [$word; $n],
            key: [$word; $n / 2],
            rounds: u8,
        ) -> Result<[$word; $n], Error> {
            Ok(permute::<$variant>(counter, key, Rounds::new(rounds)?))
        }

        #[doc = concat!("Apply `", stringify!($name), "` with the default 10 rounds.")]
        #[inline]
        pub fn $name10(counter: [$word; $n], key: [$word; $n / 2]) -> [$word; $n] {
            permute::<$variant>(counter, key, Rounds::DEFAULT)
        }
    };
}

entry_points!(Philox2x32, u32, 2, philox2x32, philox2x32_10);
entry_points!(Philox2x64, u64, 2, philox2x64, philox2x64_10);
entry_points!(Philox4x32, u32, 4, philox4x32, philox4x32_10);
entry_points!(Philox4x64, u64, 4, philox4x64, philox4x64_10);

/// Runtime name of one of the four Philox variants.
///
/// Used where the shape is only known at runtime, e.g. when reading
/// known-answer tables. Words are passed as `u64` regardless of width.
///
/// ```
/// use rand_philox::VariantKind;
///
/// let kind: VariantKind = "philox4x32".parse().unwrap();
/// let mut counter = [0xffffffff; 4];
/// kind.permute_words(&mut counter, &[0xffffffff; 2], 7).unwrap();
/// assert_eq!(counter, [0x5207ddc2, 0x45165e59, 0x4d8ee751, 0x8c52f662]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub enum VariantKind {
    /// [`Philox2x32`]
    Philox2x32,
    /// [`Philox2x64`]
    Philox2x64,
    /// [`Philox4x32`]
    Philox4x32,
    /// [`Philox4x64`]
    Philox4x64,
}

impl VariantKind {
    /// All variants, in table order.
    pub const ALL: [VariantKind; 4] = [
        VariantKind::Philox2x32,
        VariantKind::Philox2x64,
        VariantKind::Philox4x32,
        VariantKind::Philox4x64,
    ];

    /// Name as used in known-answer tables, e.g. `"philox4x64"`.
    pub const fn name(self) -> &'static str {
        match self {
            VariantKind::Philox2x32 => "philox2x32",
            VariantKind::Philox2x64 => "philox2x64",
            VariantKind::Philox4x32 => "philox4x32",
            VariantKind::Philox4x64 => "philox4x64",
        }
    }

    /// Number of counter words, N.
    pub const fn counter_words(self) -> usize {
        match self {
            VariantKind::Philox2x32 | VariantKind::Philox2x64 => 2,
            VariantKind::Philox4x32 | VariantKind::Philox4x64 => 4,
        }
    }

    /// Number of key words, N / 2.
    pub const fn key_words(self) -> usize {
        self.counter_words() / 2
    }

    /// Word width in bits.
    pub const fn word_bits(self) -> u32 {
        match self {
            VariantKind::Philox2x32 | VariantKind::Philox4x32 => 32,
            VariantKind::Philox2x64 | VariantKind::Philox4x64 => 64,
        }
    }

    /// Permute `counter` in place under `key` with `rounds` rounds.
    ///
    /// The round count, slice lengths and word widths are all validated
    /// before `counter` is written; on error it is left unchanged.
    pub fn permute_words(self, counter: &mut [u64], key: &[u64], rounds: u8) -> Result<(), Error> {
        let rounds = Rounds::new(rounds)?;
        if counter.len() != self.counter_words() || key.len() != self.key_words() {
            return Err(Error::InvalidShape {
                kind: self,
                counter_words: counter.len(),
                key_words: key.len(),
            });
        }
        match self {
            VariantKind::Philox2x32 => permute_as::<Philox2x32>(counter, key, rounds),
            VariantKind::Philox2x64 => permute_as::<Philox2x64>(counter, key, rounds),
            VariantKind::Philox4x32 => permute_as::<Philox4x32>(counter, key, rounds),
            VariantKind::Philox4x64 => permute_as::<Philox4x64>(counter, key, rounds),
        }
    }
}

fn permute_as<V>(counter: &mut [u64], key: &[u64], rounds: Rounds) -> Result<(), Error>
where
    V: RoundStep + KeyBump,
{
    let mut ctr = V::Counter::default();
    narrow(counter, ctr.as_mut())?;
    let mut k = V::Key::default();
    narrow(key, k.as_mut())?;

    let out = permute::<V>(ctr, k, rounds);
    for (dst, word) in counter.iter_mut().zip(out.as_ref()) {
        *dst = word.to_u64();
    }
    Ok(())
}

fn narrow<W: Word>(src: &[u64], dst: &mut [W]) -> Result<(), Error> {
    for (d, &value) in dst.iter_mut().zip(src) {
        *d = W::from_u64(value).ok_or(Error::WordOutOfRange { bits: W::BITS, value })?;
    }
    Ok(())
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VariantKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        VariantKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or(Error::UnknownVariant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(Philox2x32::MULTIPLIERS, [0xD256D193]);
        assert_eq!(Philox2x32::ROUND_CONSTANTS, [0x9E3779B9]);
        assert_eq!(Philox2x64::ROUND_CONSTANTS, [0x9E3779B97F4A7C15]);
        assert_eq!(Philox4x32::ROUND_CONSTANTS, [0x9E3779B9, 0xBB67AE85]);
        assert_eq!(
            Philox4x64::MULTIPLIERS,
            [0xD2E7470EE14C6C93, 0xCA5A826395121157]
        );
        for m in Philox4x32::MULTIPLIERS.iter().chain(&Philox2x32::MULTIPLIERS) {
            assert_eq!(m & 1, 1);
        }
    }

    #[test]
    fn entry_points_validate_rounds() {
        assert_eq!(philox2x32([0, 0], [0], 0), Err(Error::InvalidRoundCount(0)));
        assert_eq!(philox4x64([0; 4], [0; 2], 17), Err(Error::InvalidRoundCount(17)));
        assert_eq!(philox2x32([0, 0], [0], 10), Ok([0xff1dae59, 0x6cd10df2]));
        assert_eq!(philox2x32_10([0, 0], [0]), [0xff1dae59, 0x6cd10df2]);
    }

    #[test]
    fn shape_and_names() {
        for kind in VariantKind::ALL {
            assert_eq!(kind.key_words() * 2, kind.counter_words());
            assert_eq!(kind.name().parse::<VariantKind>(), Ok(kind));
        }
        assert_eq!(VariantKind::Philox2x64.word_bits(), 64);
        assert_eq!("philox8x32".parse::<VariantKind>(), Err(Error::UnknownVariant));
        assert_eq!("Philox2x32".parse::<VariantKind>(), Err(Error::UnknownVariant));
    }

    #[test]
    fn permute_words_matches_typed() {
        let mut counter = [0x243f6a8885a308d3, 0x13198a2e03707344];
        VariantKind::Philox2x64
            .permute_words(&mut counter, &[0xa4093822299f31d0], 10)
            .unwrap();
        assert_eq!(
            counter,
            philox2x64_10([0x243f6a8885a308d3, 0x13198a2e03707344], [0xa4093822299f31d0])
        );
    }

    #[test]
    fn permute_words_rejects_without_mutation() {
        let original = [1u64, 2, 3, 4];

        let mut counter = original;
        let err = VariantKind::Philox2x32.permute_words(&mut counter, &[0], 10);
        assert_eq!(
            err,
            Err(Error::InvalidShape {
                kind: VariantKind::Philox2x32,
                counter_words: 4,
                key_words: 1,
            })
        );
        assert_eq!(counter, original);

        let err = VariantKind::Philox4x32.permute_words(&mut counter, &[0, 1 << 32], 10);
        assert_eq!(err, Err(Error::WordOutOfRange { bits: 32, value: 1 << 32 }));
        assert_eq!(counter, original);

        let err = VariantKind::Philox4x64.permute_words(&mut counter, &[0, 0], 0);
        assert_eq!(err, Err(Error::InvalidRoundCount(0)));
        assert_eq!(counter, original);

        let mut counter = [0, u64::MAX];
        let err = VariantKind::Philox2x32.permute_words(&mut counter, &[0], 10);
        assert_eq!(err, Err(Error::WordOutOfRange { bits: 32, value: u64::MAX }));
        assert_eq!(counter, [0, u64::MAX]);
    }
}
