// Copyright 2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// A validated Philox round count in `1..=16`.
///
/// Zero rounds would leave the counter untouched and more than 16 rounds are
/// not defined for the family, so neither can be expressed.
///
/// ```
/// use rand_philox::Rounds;
///
/// assert_eq!(Rounds::default().get(), 10);
/// assert!(Rounds::new(0).is_err());
/// assert!(Rounds::new(16).is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(try_from = "u8", into = "u8"))]
pub struct Rounds(pub(crate) u8);

impl Rounds {
    /// Smallest accepted round count.
    pub const MIN: u8 = 1;
    /// Largest accepted round count.
    pub const MAX: u8 = 16;
    /// The customary 10 rounds.
    pub const DEFAULT: Rounds = Rounds(10);

    /// Validate a round count.
    pub const fn new(rounds: u8) -> Result<Self, Error> {
        if rounds < Self::MIN || rounds > Self::MAX {
            return Err(Error::InvalidRoundCount(rounds));
        }
        Ok(Rounds(rounds))
    }

    /// The number of rounds.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Rounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Rounds {
    type Error = Error;

    fn try_from(rounds: u8) -> Result<Self, Error> {
        Rounds::new(rounds)
    }
}

impl From<Rounds> for u8 {
    fn from(rounds: Rounds) -> u8 {
        rounds.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(Rounds::new(0), Err(Error::InvalidRoundCount(0)));
        assert_eq!(Rounds::new(17), Err(Error::InvalidRoundCount(17)));
        assert_eq!(Rounds::new(255), Err(Error::InvalidRoundCount(255)));
        for r in Rounds::MIN..=Rounds::MAX {
            assert_eq!(Rounds::new(r).map(Rounds::get), Ok(r));
        }
    }

    #[test]
    fn conversions() {
        assert_eq!(Rounds::try_from(7), Ok(Rounds(7)));
        assert_eq!(u8::from(Rounds::DEFAULT), 10);
        assert_eq!(Rounds::default(), Rounds::DEFAULT);
    }
}
