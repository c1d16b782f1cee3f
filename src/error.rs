// Copyright 2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types

use core::fmt;

use crate::rounds::Rounds;
use crate::variant::VariantKind;

/// Error type of the Philox functions.
///
/// Every check happens before any counter or key word is touched, so a
/// returned error means no state was modified. None of these errors is
/// transient: the caller must supply corrected input.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Error {
    /// The requested number of rounds is outside
    /// [`Rounds::MIN`]..=[`Rounds::MAX`].
    InvalidRoundCount(u8),
    /// Counter or key slice length does not match the variant.
    InvalidShape {
        /// The variant the words were meant for.
        kind: VariantKind,
        /// Number of counter words supplied.
        counter_words: usize,
        /// Number of key words supplied.
        key_words: usize,
    },
    /// A word does not fit in the variant's word width.
    WordOutOfRange {
        /// Word width of the variant, in bits.
        bits: u32,
        /// The offending value.
        value: u64,
    },
    /// The name does not denote one of the four variants.
    UnknownVariant,
    /// A known-answer line could not be parsed (1-based line number).
    MalformedVector {
        /// Line number within the table.
        line: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidRoundCount(rounds) => write!(
                f,
                "round count {} is outside {}..={}",
                rounds,
                Rounds::MIN,
                Rounds::MAX
            ),
            Error::InvalidShape { kind, counter_words, key_words } => write!(
                f,
                "{} expects {} counter and {} key words, got {} and {}",
                kind,
                kind.counter_words(),
                kind.key_words(),
                counter_words,
                key_words
            ),
            Error::WordOutOfRange { bits, value } => {
                write!(f, "word {:#x} does not fit in {} bits", value, bits)
            }
            Error::UnknownVariant => write!(f, "unknown Philox variant"),
            Error::MalformedVector { line } => {
                write!(f, "malformed known-answer vector on line {}", line)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
