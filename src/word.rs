// Copyright 2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fixed-width word arithmetic used by the Philox rounds.

use core::fmt;
use core::ops::BitXor;

/// An unsigned machine word a Philox variant operates on.
///
/// Implemented for `u32` and `u64`. All arithmetic is modulo 2<sup>W</sup>
/// where W is [`Word::BITS`]; no operation can fail.
pub trait Word:
    Copy + Default + Eq + BitXor<Output = Self> + fmt::Debug + fmt::LowerHex
{
    /// Width of the word in bits.
    const BITS: u32;

    /// All-ones mask, i.e. 2<sup>W</sup> − 1.
    const MASK: Self;

    /// Exact `self * other`, split into its `(high, low)` halves.
    ///
    /// The product is computed in a type twice as wide as `Self`, so
    /// `low = product mod 2^W` and `high = product >> W`.
    fn mul_hi_lo(self, other: Self) -> (Self, Self);

    /// `(self + other) mod 2^W`.
    fn add_mod(self, other: Self) -> Self;

    /// Narrow a `u64` to this width, or `None` if it does not fit.
    fn from_u64(value: u64) -> Option<Self>;

    /// Widen to `u64`.
    fn to_u64(self) -> u64;
}

macro_rules! impl_word {
    ($ty:ty, $wide:ty) => {
        impl Word for $ty {
            const BITS: u32 = <$ty>::BITS;
            const MASK: Self = <$ty>::MAX;

            #[inline(always)]
            fn mul_hi_lo(self, other: Self) -> (Self, Self) {
                let product = <$wide>::from(self) * <$wide>::from(other);
                ((product >> Self::BITS) as $ty, product as $ty)
            }

            #[inline(always)]
            fn add_mod(self, other: Self) -> Self {
                self.wrapping_add(other)
            }

            #[inline]
            fn from_u64(value: u64) -> Option<Self> {
                <$ty>::try_from(value).ok()
            }

            #[inline]
            fn to_u64(self) -> u64 {
                u64::from(self)
            }
        }
    };
}

impl_word!(u32, u64);
impl_word!(u64, u128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_hi_lo_u32() {
        assert_eq!(3u32.mul_hi_lo(0xCD9E8D57), (2, 0x68DBA805));
        assert_eq!(u32::MAX.mul_hi_lo(u32::MAX), (0xFFFF_FFFE, 1));
        assert_eq!(0u32.mul_hi_lo(u32::MAX), (0, 0));
    }

    #[test]
    fn mul_hi_lo_u64() {
        assert_eq!(u64::MAX.mul_hi_lo(u64::MAX), (0xFFFF_FFFF_FFFF_FFFE, 1));
        assert_eq!(1u64.mul_hi_lo(0xD2B74407B1CE6E93), (0, 0xD2B74407B1CE6E93));
        assert_eq!((1u64 << 63).mul_hi_lo(4), (2, 0));
    }

    #[test]
    fn add_mod_wraps() {
        assert_eq!(u32::MAX.add_mod(0x9E3779B9), 0x9E3779B8);
        assert_eq!(0xFFFF_FFFF_FFFF_FFFFu64.add_mod(2), 1);
    }

    #[test]
    fn narrowing() {
        assert_eq!(u32::from_u64(0xFFFF_FFFF), Some(u32::MAX));
        assert_eq!(u32::from_u64(0x1_0000_0000), None);
        assert_eq!(u64::from_u64(u64::MAX), Some(u64::MAX));
        assert_eq!(<u32 as Word>::MASK.to_u64(), 0xFFFF_FFFF);
    }
}
