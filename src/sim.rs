// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::io::{BufRead, Write};

use anyhow::Result;
use log::{debug, info, trace};

use crate::error::SimulationError;
use crate::rng::{DieSource, FACES};
use crate::{display, io, FrequencyTable, Roll, RollCount};

/// Throws two dice, first `die1` then `die2`. Fails with
/// [SimulationError::InvalidFace] if the source produces a face outside
/// `1..=6`.
pub fn roll<S: DieSource>(source: &mut S) -> Result<Roll, SimulationError> {
    let die1 = source.roll_die();
    let die2 = source.roll_die();
    Roll::new(die1, die2).ok_or_else(|| {
        let face = if (1..=FACES).contains(&die1) { die2 } else { die1 };
        SimulationError::InvalidFace(face)
    })
}

/// Throws the dice `count` times, writing each throw and then the
/// frequency report to `out`.
pub fn simulate<S: DieSource, W: Write>(
    count: RollCount,
    source: &mut S,
    out: &mut W,
    options: &display::Options,
) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::new();

    for index in 1..=count.get() {
        let roll = roll(source)?;
        trace!("roll {index}: {roll}");
        table.record(&roll);
        io::write_roll(out, index, &roll)?;
    }

    io::write_report(out, &table, options)?;
    info!("simulated {count} rolls");
    Ok(table)
}

/// Prompts for a roll count on `out`, reads it from `input`, and runs the
/// simulation. Returns `None` if the count was rejected, after telling the
/// user so.
pub fn run<R: BufRead, W: Write, S: DieSource>(
    input: &mut R,
    out: &mut W,
    source: &mut S,
    options: &display::Options,
) -> Result<Option<FrequencyTable>> {
    io::write_prompt(out)?;
    out.flush()?;
    let requested = io::read_roll_count(input)?;
    run_with_count(requested, out, source, options)
}

/// Like [run] for a count that was already read, e.g. from the command
/// line. The prompt and echo are still written.
pub fn run_with_count<W: Write, S: DieSource>(
    requested: i64,
    out: &mut W,
    source: &mut S,
    options: &display::Options,
) -> Result<Option<FrequencyTable>> {
    io::write_echo(out, requested)?;
    debug!("requested {requested} rolls");

    match RollCount::new(requested) {
        Ok(count) => Ok(Some(simulate(count, source, out, options)?)),
        Err(e) => {
            io::write_invalid(out, &e)?;
            Ok(None)
        }
    }
}
