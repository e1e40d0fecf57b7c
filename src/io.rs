// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::io::{BufRead, Write};

use anyhow::Result;
use log::warn;

use crate::display;
use crate::error::SimulationError;
use crate::{FrequencyTable, Roll};

/// Text asking the user how many rolls to make.
pub const PROMPT: &str = "Enter number of rolls: ";

/// Writes the prompt followed by a newline.
pub fn write_prompt<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{PROMPT}")?;
    Ok(())
}

/// Echoes the count that was read. No newline is written, matching the
/// layout of the rest of the output where every line *starts* with one.
pub fn write_echo<W: Write>(out: &mut W, count: i64) -> Result<()> {
    write!(out, "{count}")?;
    Ok(())
}

/// Writes `Roll <index> is <total> (<die1>+<die2>)` preceded by a blank line.
pub fn write_roll<W: Write>(out: &mut W, index: u64, roll: &Roll) -> Result<()> {
    write!(out, "\nRoll {index} is {roll}\n")?;
    Ok(())
}

/// Writes the frequency report.
pub fn write_report<W: Write>(
    out: &mut W,
    table: &FrequencyTable,
    options: &display::Options,
) -> Result<()> {
    write!(out, "\n\n{}", table.report(*options))?;
    Ok(())
}

/// Writes the message for a rejected roll count.
pub fn write_invalid<W: Write>(out: &mut W, err: &SimulationError) -> Result<()> {
    writeln!(out, "{err}")?;
    Ok(())
}

/// Longest roll count token that is read. Anything past it is left in the
/// reader.
pub const MAX_TOKEN_LEN: usize = 32;

/// Reads a roll count from `input`.
///
/// The first whitespace delimited token is used, skipping blank lines, and
/// reading stops right after it. A token that does not start with an
/// integer, one that is not valid UTF-8, or input that ends before any
/// token is found, reads as `0`.
pub fn read_roll_count<R: BufRead>(input: &mut R) -> Result<i64> {
    let mut token = Vec::new();
    loop {
        let buf = input.fill_buf()?;
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        let mut done = false;
        for &b in buf {
            if b.is_ascii_whitespace() {
                if !token.is_empty() {
                    done = true;
                    break;
                }
            } else if token.len() < MAX_TOKEN_LEN {
                token.push(b);
            } else {
                done = true;
                break;
            }
            used += 1;
        }
        input.consume(used);

        if done {
            break;
        }
    }

    if token.is_empty() {
        warn!("no roll count before end of input");
        return Ok(0);
    }
    Ok(parse_roll_count(&String::from_utf8_lossy(&token)))
}

/// Parses the leading integer of `token`, ignoring anything after it.
/// `"12"` and `"12abc"` are both `12`; `"abc"` is `0`.
pub fn parse_roll_count(token: &str) -> i64 {
    let unsigned = token.trim_start_matches(['-', '+']);
    let sign_len = token.len() - unsigned.len();
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();

    if sign_len > 1 || digits == 0 {
        warn!("roll count {token:?} is not a number");
        return 0;
    }

    let number = &token[..sign_len + digits];
    match number.parse::<i64>() {
        Ok(count) => {
            if number.len() != token.len() {
                warn!("ignoring trailing input after roll count in {token:?}");
            }
            count
        }
        Err(e) => {
            warn!("roll count {token:?} is out of range: {e}");
            0
        }
    }
}
