// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Random sources for die values.
//!
//! The simulator never reaches for a global generator. Callers hand it
//! anything implementing [DieSource], which makes it possible to replay a
//! run from its seed or to script the exact faces a test needs.

use chrono::Utc;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of faces on each die.
pub const FACES: u8 = 6;

/// Something that can produce the face of a single six-sided die.
pub trait DieSource {
    /// Returns a value in `1..=6`.
    fn roll_die(&mut self) -> u8;
}

/// Seeded generator used for real runs.
///
/// Wraps [ChaCha8Rng] so a given seed always produces the same sequence of
/// faces on every platform.
#[derive(Debug, Clone)]
pub struct DiceRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a generator seeded from the current wall clock.
    pub fn from_time() -> Self {
        let now = Utc::now();
        let seed = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp()) as u64;
        Self::new(seed)
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DieSource for DiceRng {
    fn roll_die(&mut self) -> u8 {
        self.rng.gen_range(1..=FACES)
    }
}
