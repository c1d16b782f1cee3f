// Copyright 2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Known-answer vectors.
//!
//! The table format is one case per line,
//!
//! ```text
//! philox2x32 7 00000000 00000000 00000000   257a3673 cd26be2a
//! ```
//!
//! giving the variant name, the round count and then the counter, key and
//! expected output words in hexadecimal. Lines starting with `#` and blank
//! lines are ignored.

use crate::rounds::Rounds;
use crate::variant::VariantKind;
use crate::Error;

/// The reference table of 24 cases (all four variants, 7 and 10 rounds).
pub const KAT_VECTORS: &str = include_str!("../data/kat_vectors.txt");

/// A single known-answer case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnownAnswer {
    /// Variant under test.
    pub kind: VariantKind,
    /// Number of rounds.
    pub rounds: Rounds,
    /// Input counter words.
    pub counter: Vec<u64>,
    /// Key words.
    pub key: Vec<u64>,
    /// Expected output words.
    pub expected: Vec<u64>,
}

impl KnownAnswer {
    /// Parse one table line. `line_no` is only used for error reporting.
    ///
    /// Returns `Ok(None)` for comments and blank lines.
    pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Self>, Error> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let malformed = Error::MalformedVector { line: line_no };

        let mut fields = line.split_whitespace();
        let kind: VariantKind = fields.next().ok_or(malformed)?.parse()?;
        let rounds: u8 = fields
            .next()
            .and_then(|r| r.parse().ok())
            .ok_or(malformed)?;
        let rounds = Rounds::new(rounds)?;

        let words = fields
            .map(|w| u64::from_str_radix(w, 16).map_err(|_| malformed))
            .collect::<Result<Vec<u64>, Error>>()?;
        let (n, k) = (kind.counter_words(), kind.key_words());
        if words.len() != 2 * n + k {
            return Err(malformed);
        }

        Ok(Some(KnownAnswer {
            kind,
            rounds,
            counter: words[..n].to_vec(),
            key: words[n..n + k].to_vec(),
            expected: words[n + k..].to_vec(),
        }))
    }

    /// Run the permutation on this case's input.
    pub fn run(&self) -> Result<Vec<u64>, Error> {
        let mut counter = self.counter.clone();
        self.kind
            .permute_words(&mut counter, &self.key, self.rounds.get())?;
        Ok(counter)
    }

    /// Whether the permutation reproduces the expected output.
    pub fn check(&self) -> Result<bool, Error> {
        let out = self.run()?;
        if out != self.expected {
            debug!(
                "{}-{}: got {:x?}, expected {:x?}",
                self.kind,
                self.rounds.get(),
                out,
                self.expected
            );
            return Ok(false);
        }
        Ok(true)
    }
}

/// Parse every case of a table.
pub fn parse(table: &str) -> Result<Vec<KnownAnswer>, Error> {
    let mut cases = Vec::new();
    for (i, line) in table.lines().enumerate() {
        if let Some(case) = KnownAnswer::parse_line(line, i + 1)? {
            cases.push(case);
        }
    }
    Ok(cases)
}

/// The parsed [`KAT_VECTORS`] table.
pub fn reference_vectors() -> Result<Vec<KnownAnswer>, Error> {
    parse(KAT_VECTORS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_four_word_line() {
        let line = "philox4x32 7 ffffffff ffffffff ffffffff ffffffff ffffffff ffffffff   \
                    5207ddc2 45165e59 4d8ee751 8c52f662";
        let case = KnownAnswer::parse_line(line, 1).unwrap().unwrap();
        assert_eq!(case.kind, VariantKind::Philox4x32);
        assert_eq!(case.rounds.get(), 7);
        assert_eq!(case.counter, vec![0xffffffff; 4]);
        assert_eq!(case.key, vec![0xffffffff; 2]);
        assert_eq!(case.expected, vec![0x5207ddc2, 0x45165e59, 0x4d8ee751, 0x8c52f662]);
        assert_eq!(case.check(), Ok(true));
    }

    #[test]
    fn skips_comments() {
        assert_eq!(KnownAnswer::parse_line("#nameNxW  R  CTR", 1), Ok(None));
        assert_eq!(KnownAnswer::parse_line("   ", 2), Ok(None));
        assert_eq!(parse("#\n\n#\n").map(|c| c.len()), Ok(0));
    }

    #[test]
    fn malformed_lines() {
        let bad = Error::MalformedVector { line: 4 };
        assert_eq!(KnownAnswer::parse_line("philox2x32", 4), Err(bad));
        assert_eq!(KnownAnswer::parse_line("philox2x32 x 0 0 0 0 0", 4), Err(bad));
        assert_eq!(KnownAnswer::parse_line("philox2x32 7 0 0 0 0", 4), Err(bad));
        assert_eq!(KnownAnswer::parse_line("philox2x32 7 0 0 0 0 zz", 4), Err(bad));
        assert_eq!(
            KnownAnswer::parse_line("philox3x32 7 0 0 0 0 0", 4),
            Err(Error::UnknownVariant)
        );
        assert_eq!(
            KnownAnswer::parse_line("philox2x32 0 0 0 0 0 0", 4),
            Err(Error::InvalidRoundCount(0))
        );
    }

    #[test]
    fn wrong_answer_is_reported() {
        let case = KnownAnswer::parse_line("philox2x32 10 0 0 0   ff1dae59 6cd10df3", 1)
            .unwrap()
            .unwrap();
        assert_eq!(case.run(), Ok(vec![0xff1dae59, 0x6cd10df2]));
        assert_eq!(case.check(), Ok(false));
    }

    #[test]
    fn oversized_word_for_32_bit_variant() {
        let case = KnownAnswer::parse_line("philox2x32 10 100000000 0 0   0 0", 1)
            .unwrap()
            .unwrap();
        assert_eq!(
            case.run(),
            Err(Error::WordOutOfRange { bits: 32, value: 0x1_0000_0000 })
        );
    }
}
