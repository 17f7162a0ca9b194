//! `urlfp` command-line entry point.
//!
//! Thin wrapper around the library: parses arguments, sets up logging,
//! opens the input and hands it to [`urlfp::run::run`].

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;

use urlfp::config::{init_logger, Config};
use urlfp::run::run;

fn main() -> Result<()> {
    let config = Config::parse();

    init_logger(config.log_level.clone().into()).context("Failed to initialize logger")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match config.input() {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            run(&config, BufReader::new(file), &mut out)?;
        }
        None => {
            run(&config, io::stdin().lock(), &mut out)?;
        }
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}
