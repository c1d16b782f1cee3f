// Copyright 2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::round::{KeyBump, RoundStep};
use crate::rounds::Rounds;

/// Apply the Philox permutation of variant `V` to `counter` under `key`.
///
/// Rounds and key bumps alternate, starting and ending with a round: round
/// `i` sees the key after `i - 1` bumps and the key is never bumped after the
/// last round. The caller's key is not modified; the schedule is always
/// derived afresh from it, so splitting `r + s` rounds over two calls does
/// *not* give the same result as one call with `r + s` rounds.
///
/// ```
/// use rand_philox::{permute, Philox2x32, Rounds};
///
/// let out = permute::<Philox2x32>([0, 0], [0], Rounds::DEFAULT);
/// assert_eq!(out, [0xff1dae59, 0x6cd10df2]);
/// ```
#[inline]
pub fn permute<V>(mut counter: V::Counter, mut key: V::Key, rounds: Rounds) -> V::Counter
where
    V: RoundStep + KeyBump,
{
    permute_in_place::<V>(&mut counter, &mut key, rounds);
    counter
}

/// Like [`permute`], but works on the caller's buffers.
///
/// On return `counter` holds the output and `key` has been bumped
/// `rounds - 1` times, i.e. it is the key the last round used.
#[inline]
pub fn permute_in_place<V>(counter: &mut V::Counter, key: &mut V::Key, rounds: Rounds)
where
    V: RoundStep + KeyBump,
{
    for _ in 1..rounds.get() {
        V::round(counter, key);
        V::bump(key);
    }
    V::round(counter, key);
}
