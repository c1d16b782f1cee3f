// Copyright 2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Philox counter-based random number generators.
//!
//! Philox, from Salmon et al., ["Parallel Random Numbers: As Easy as 1, 2,
//! 3"][paper], is a keyed permutation of a small counter block. The same
//! `(counter, key)` pair always maps to the same output, so independent
//! streams are obtained by partitioning the counter space rather than by
//! carrying generator state around. Philox is a statistical generator; it
//! makes no cryptographic claims.
//!
//! ## Permutations
//!
//! Four variants are provided, for 2- or 4-word counters of 32- or 64-bit
//! words: [`Philox2x32`], [`Philox2x64`], [`Philox4x32`] and [`Philox4x64`].
//! Each comes with a pair of functions, one taking an explicit round count
//! in `1..=16` and one using the customary 10 rounds:
//!
//! ```
//! use rand_philox::{philox4x64, philox4x64_10};
//!
//! let counter = [0x243f6a8885a308d3, 0x13198a2e03707344,
//!                0xa4093822299f31d0, 0x082efa98ec4e6c89];
//! let key = [0x452821e638d01377, 0xbe5466cf34e90c6c];
//! let out = philox4x64_10(counter, key);
//! assert_eq!(out, [0xa528f45403e61d95, 0x38c72dbd566e9788,
//!                  0xa5a1610e72fd18b5, 0x57bd43b5e52b7fe6]);
//! assert_eq!(philox4x64(counter, key, 10), Ok(out));
//! assert!(philox4x64(counter, key, 0).is_err());
//! ```
//!
//! The generic [`permute`] driver works with any type implementing
//! [`RoundStep`] and [`KeyBump`], and [`VariantKind`] selects a variant at
//! runtime.
//!
//! ## Generation
//!
//! [`Philox2x64Rng`] turns Philox2x64-7 into a conventional generator
//! implementing [`RngCore`] and [`SeedableRng`]:
//!
//! ```
//! use rand_core::{RngCore, SeedableRng};
//! use rand_philox::Philox2x64Rng;
//!
//! let mut rng = Philox2x64Rng::seed_from_u64(42);
//! let x: f64 = rng.random();
//! let y = rng.next_u64();
//! # let _ = (x, y);
//! ```
//!
//! With the `std` feature, [`seed`] and [`random`] give access to a shared
//! default instance.
//!
//! ## Crate features
//!
//! - `std` (default): `std::error::Error` for [`Error`], the shared generator
//!   and the [`kat`] module.
//! - `serde1`: serialization of [`Philox2x64Rng`], [`Rounds`] and
//!   [`VariantKind`].
//! - `log`: diagnostic logging through the `log` crate.
//!
//! [paper]: https://www.thesalmons.org/john/random123/papers/random123sc11.pdf
//! [`RngCore`]: rand_core::RngCore
//! [`SeedableRng`]: rand_core::SeedableRng

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico",
    html_root_url = "https://rust-random.github.io/rand/"
)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![allow(clippy::unreadable_literal)]
#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
mod log_macros;

mod error;
mod permute;
mod rng;
mod round;
mod rounds;
mod variant;
pub mod word;

#[cfg(feature = "std")]
mod global;
#[cfg(feature = "std")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "std")))]
pub mod kat;

pub use rand_core;

pub use self::error::Error;
pub use self::permute::{permute, permute_in_place};
pub use self::rng::Philox2x64Rng;
pub use self::round::{KeyBump, RoundStep, Variant};
pub use self::rounds::Rounds;
pub use self::variant::{
    philox2x32, philox2x32_10, philox2x64, philox2x64_10, philox4x32, philox4x32_10, philox4x64,
    philox4x64_10, Philox2x32, Philox2x64, Philox4x32, Philox4x64, VariantKind,
};

#[cfg(feature = "std")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "std")))]
pub use self::global::{next_word, random, seed};
