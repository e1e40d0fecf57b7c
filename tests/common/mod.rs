// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use assert_cmd::Command;

use assert_cmd::cargo;

#[inline]
pub fn dicestats() -> Command {
    Command::new(cargo::cargo_bin!("dicestats"))
}

/// Pulls the `(total, count)` pairs out of a statistics report.
pub fn report_counts(output: &str) -> Vec<(u8, u64)> {
    output
        .lines()
        .skip_while(|l| !l.starts_with("Dice roll statistics:"))
        .skip(1)
        .map(|l| {
            let (total, count) = l.split_once("'s: ").expect("report line");
            (
                total.parse().expect("total"),
                count.parse().expect("count"),
            )
        })
        .collect()
}

/// Pulls the `(index, total, die1, die2)` tuples out of the roll lines.
pub fn roll_lines(output: &str) -> Vec<(u64, u8, u8, u8)> {
    output
        .lines()
        .filter_map(|l| l.strip_prefix("Roll "))
        .map(|l| {
            let (index, rest) = l.split_once(" is ").expect("roll index");
            let (total, dice) = rest.split_once(" (").expect("roll total");
            let (die1, die2) = dice
                .trim_end_matches(')')
                .split_once('+')
                .expect("roll dice");
            (
                index.parse().expect("index"),
                total.parse().expect("total"),
                die1.parse().expect("die1"),
                die2.parse().expect("die2"),
            )
        })
        .collect()
}
