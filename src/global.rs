// Copyright 2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A process-wide convenience generator.
//!
//! [`seed`] and [`random`] operate on one shared [`Philox2x64Rng`] that
//! starts in the reference state ([`Philox2x64Rng::default`]) and is guarded
//! by a mutex, so concurrent callers are serialised. Calls from different
//! threads interleave in an unspecified order; code that needs a
//! reproducible sequence should own its own [`Philox2x64Rng`].

use std::sync::{Mutex, MutexGuard};

use crate::rng::{Philox2x64Rng, DEFAULT_KEY};

static GLOBAL: Mutex<Philox2x64Rng> = Mutex::new(Philox2x64Rng::new(DEFAULT_KEY));

fn lock() -> MutexGuard<'static, Philox2x64Rng> {
    // The generator is valid between any two calls, so a panic while the
    // lock was held cannot leave it inconsistent.
    GLOBAL.lock().unwrap_or_else(|poisoned| {
        warn!("Philox2x64Rng: recovering poisoned global generator");
        poisoned.into_inner()
    })
}

/// Replace the key of the global generator.
///
/// As with [`Philox2x64Rng::seed`], the counter and any pending output are
/// kept.
pub fn seed(value: u64) {
    trace!("Philox2x64Rng: reseeding global generator");
    lock().seed(value);
}

/// Next sample from the global generator, uniform in `[0, 1)`.
pub fn random() -> f64 {
    lock().random()
}

/// Next raw 64-bit output of the global generator.
pub fn next_word() -> u64 {
    lock().next_word()
}
