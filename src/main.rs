// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::{ArgAction, Parser};
use log::{debug, LevelFilter};

use dicestats::display;
use dicestats::rng::DiceRng;
use dicestats::sim::{run, run_with_count};

/// Roll two dice many times and report how often each total came up.
#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_CRATE_NAME"), version)]
#[command(version, about, long_about = None)]
pub struct App {
    /// seed for the dice, defaults to the current time
    #[clap(long)]
    seed: Option<u64>,

    /// number of rolls, read from standard input when omitted
    #[clap(long, allow_negative_numbers = true)]
    rolls: Option<i64>,

    /// constant added to every count in the statistics
    #[clap(long, default_value_t = 0)]
    offset: u64,

    /// log more detail to stderr, may be repeated
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = App::parse();

    init_logger(args.verbose);

    let mut rng = match args.seed {
        Some(seed) => DiceRng::new(seed),
        None => DiceRng::from_time(),
    };
    debug!("seed {}", rng.seed());

    let options = display::Options::with_count_offset(args.offset);
    let mut out = BufWriter::new(io::stdout().lock());

    match args.rolls {
        Some(rolls) => {
            dicestats::io::write_prompt(&mut out)?;
            run_with_count(rolls, &mut out, &mut rng, &options)?
        }
        None => run(&mut io::stdin().lock(), &mut out, &mut rng, &options)?,
    };

    out.flush()?;
    Ok(())
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
