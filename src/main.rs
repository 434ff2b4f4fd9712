// src/main.rs

//! `ledstrip` maps HTML hex color codes onto the 256-color xterm palette
//! and renders them as terminal swatches.
//!
//! On startup it dumps the full palette and a small quantization report,
//! then streams color codes from stdin (or from file arguments) as an
//! in-place-refreshing "LED strip" of background swatches.

mod color;
mod config;
mod display;
mod palette;

use crate::config::Config;

use anyhow::Context;
use log::info;
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};

fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let palette = palette::xterm256();
    let config = Config::default();
    info!(
        "xterm256 palette ready ({} entries), refreshing every {} lines",
        palette.entries().len(),
        config.nr_leds
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    display::print_palette(&mut out, palette).context("printing the palette dump")?;
    display::print_samples(&mut out, palette).context("printing the sample report")?;
    writeln!(out, "{}", "-".repeat(80))?;

    let paths: Vec<String> = env::args().skip(1).collect();
    let input = open_input(&paths)?;
    display::run_led_strip(input, &mut out, palette, &config)?;

    info!("input exhausted, done");
    Ok(())
}

/// Opens the line input stream: the given file paths chained in order,
/// or stdin when no paths were given.
fn open_input(paths: &[String]) -> anyhow::Result<Box<dyn BufRead>> {
    if paths.is_empty() {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let mut reader: Box<dyn Read> = Box::new(io::empty());
    for path in paths {
        let file = File::open(path).with_context(|| format!("opening input file {path}"))?;
        reader = Box::new(reader.chain(file));
    }
    Ok(Box::new(BufReader::new(reader)))
}
