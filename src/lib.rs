// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Two-Die Roll Simulator
//!
//! This crate simulates repeated throws of two six-sided dice and tabulates
//! how often each total (2 through 12) comes up.
//!
//! # Overview
//!
//! A run reads a roll count, throws the dice that many times, prints every
//! throw, and finishes with a frequency report:
//!
//! ```text
//! Enter number of rolls: 
//! 2
//! Roll 1 is 7 (3+4)
//!
//! Roll 2 is 4 (1+3)
//!
//!
//! Dice roll statistics: 
//! 2's: 0
//! 3's: 0
//! 4's: 1
//! ...
//! ```
//!
//! # Quick Start
//!
//! ```
//! use dicestats::{display, rng::DiceRng, sim, RollCount};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut rng = DiceRng::new(2025);
//!     let mut out = Vec::new();
//!     let count = RollCount::new(100)?;
//!     let table = sim::simulate(count, &mut rng, &mut out, &display::Options::default())?;
//!     assert_eq!(table.total(), 100);
//!     Ok(())
//! }
//! ```

use std::fmt;

use crate::error::SimulationError;
use crate::rng::FACES;

pub mod display;
pub mod error;
pub mod io;
pub mod rng;
pub mod sim;

/// The smallest possible total of two dice.
pub const MIN_TOTAL: u8 = 2;

/// The largest possible total of two dice.
pub const MAX_TOTAL: u8 = 2 * FACES;

/// Number of distinct totals, and so the number of counters in a
/// [FrequencyTable].
pub const TOTALS: usize = (MAX_TOTAL - MIN_TOTAL + 1) as usize;

/// The number of rolls to simulate. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RollCount(u64);

impl RollCount {
    /// Validates a user supplied count. Anything below one is rejected
    /// with [SimulationError::InvalidRollCount].
    ///
    /// ```
    /// use dicestats::RollCount;
    /// assert!(RollCount::new(0).is_err());
    /// assert_eq!(RollCount::new(3).map(|c| c.get()), Ok(3));
    /// ```
    pub fn new(count: i64) -> Result<Self, SimulationError> {
        if count < 1 {
            return Err(SimulationError::InvalidRollCount(count));
        }
        Ok(Self(count as u64))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RollCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single throw of two dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roll {
    die1: u8,
    die2: u8,
}

impl Roll {
    /// Creates a roll from two faces. Returns `None` if either face is
    /// outside `1..=6`.
    pub fn new(die1: u8, die2: u8) -> Option<Self> {
        let faces = 1..=FACES;
        if faces.contains(&die1) && faces.contains(&die2) {
            Some(Self { die1, die2 })
        } else {
            None
        }
    }

    pub fn die1(&self) -> u8 {
        self.die1
    }

    pub fn die2(&self) -> u8 {
        self.die2
    }

    /// The sum of both faces, in `2..=12`.
    pub fn total(&self) -> u8 {
        self.die1 + self.die2
    }
}

/// `<total> (<die1>+<die2>)`
impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({}+{})", self.total(), self.die1, self.die2)
    }
}

/// Counts of how many rolls produced each total.
///
/// | Index | Total |
/// |-------|-------|
/// |   0   |   2   |
/// |   1   |   3   |
/// |  ...  |  ...  |
/// |  10   |  12   |
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; TOTALS],
}

impl FrequencyTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tallies a roll.
    pub fn record(&mut self, roll: &Roll) {
        self.counts[(roll.total() - MIN_TOTAL) as usize] += 1;
    }

    /// How many rolls came up `total`. Totals no pair of dice can produce
    /// are always zero.
    pub fn count(&self, total: u8) -> u64 {
        if (MIN_TOTAL..=MAX_TOTAL).contains(&total) {
            self.counts[(total - MIN_TOTAL) as usize]
        } else {
            0
        }
    }

    /// The raw counters, indexed by `total - 2`.
    pub fn counts(&self) -> &[u64; TOTALS] {
        &self.counts
    }

    /// The number of rolls recorded.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(total, count)` pairs from 2 through 12.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        (MIN_TOTAL..=MAX_TOTAL).zip(self.counts.iter().copied())
    }

    /// The statistics report for this table.
    pub fn report(&self, options: display::Options) -> display::Report<'_> {
        display::Report::new(self, options)
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.report(display::Options::default()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_roll_count() {
        assert_eq!(RollCount::new(1).expect("count").get(), 1);
        assert_eq!(RollCount::new(500).expect("count").get(), 500);
        assert_eq!(
            RollCount::new(0),
            Err(SimulationError::InvalidRollCount(0))
        );
        assert_eq!(
            RollCount::new(-4),
            Err(SimulationError::InvalidRollCount(-4))
        );
    }

    #[test]
    fn test_roll() {
        let roll = Roll::new(3, 4).expect("roll");
        assert_eq!(roll.total(), 7);
        assert_eq!(roll.die1(), 3);
        assert_eq!(roll.die2(), 4);
        assert_eq!(format!("{roll}"), "7 (3+4)");

        assert_eq!(Roll::new(1, 1).expect("roll").total(), MIN_TOTAL);
        assert_eq!(Roll::new(6, 6).expect("roll").total(), MAX_TOTAL);

        assert!(Roll::new(0, 3).is_none());
        assert!(Roll::new(3, 7).is_none());
    }

    #[test]
    fn test_frequency_table_record() {
        let mut table = FrequencyTable::new();
        assert_eq!(table.total(), 0);

        table.record(&Roll::new(3, 4).expect("roll"));
        assert_eq!(table.counts()[5], 1);
        assert_eq!(table.count(7), 1);

        table.record(&Roll::new(1, 1).expect("roll"));
        table.record(&Roll::new(6, 6).expect("roll"));
        table.record(&Roll::new(6, 6).expect("roll"));
        assert_eq!(table.counts()[0], 1);
        assert_eq!(table.counts()[10], 2);
        assert_eq!(table.total(), 4);

        // impossible totals
        assert_eq!(table.count(0), 0);
        assert_eq!(table.count(1), 0);
        assert_eq!(table.count(13), 0);
    }

    #[test]
    fn test_frequency_table_iter() {
        let mut table = FrequencyTable::new();
        table.record(&Roll::new(2, 4).expect("roll"));
        let pairs: Vec<(u8, u64)> = table.iter().collect();
        assert_eq!(pairs.len(), TOTALS);
        assert_eq!(pairs[0], (2, 0));
        assert_eq!(pairs[4], (6, 1));
        assert_eq!(pairs[10], (12, 0));
    }

    #[test]
    fn test_frequency_table_display() {
        let mut table = FrequencyTable::new();
        table.record(&Roll::new(5, 6).expect("roll"));

        let expected = "\
            Dice roll statistics: \n\
            2's: 0\n\
            3's: 0\n\
            4's: 0\n\
            5's: 0\n\
            6's: 0\n\
            7's: 0\n\
            8's: 0\n\
            9's: 0\n\
            10's: 0\n\
            11's: 1\n\
            12's: 0\n";
        assert_eq!(format!("{table}"), expected);
    }

    #[test]
    fn test_frequency_table_display_offset() {
        let mut table = FrequencyTable::new();
        table.record(&Roll::new(1, 1).expect("roll"));

        let options = display::Options::with_count_offset(2);
        let output = format!("{}", table.report(options));
        assert!(output.contains("2's: 3\n"));
        assert!(output.contains("12's: 2\n"));
        // the table is untouched
        assert_eq!(table.count(2), 1);
    }
}
