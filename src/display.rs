// src/display.rs

//! Escape-sequence output: the palette dump, the sample quantization
//! report, and the LED-strip streaming loop.
//!
//! Every routine writes to an injected `io::Write` sink so tests can
//! capture the exact bytes into a `Vec<u8>`.

use crate::color::{quantize, MalformedColorError, Rgb};
use crate::config::Config;
use crate::palette::Palette;
use anyhow::Context;
use log::debug;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

/// Literal sample inputs quantized by the startup demo.
const SAMPLE_COLORS: [&str; 5] = ["eeeeee", "#eeeeee", "#121212", "#801cee", "ff87d7"];

/// Prints every palette entry as one line: the index rendered in its own
/// foreground color, the hex form, and the decimal triple.
pub fn print_palette(out: &mut impl Write, palette: &Palette) -> io::Result<()> {
    for (idx, &rgb) in palette.entries().iter().enumerate() {
        writeln!(out, "\x1b[38;5;{idx}m{idx}\x1b[0m {} {}", rgb.to_html(), rgb)?;
    }
    Ok(())
}

/// Quantizes the five literal sample inputs and prints one report line
/// per sample. Unlike the streaming path, a parse failure here is fatal.
pub fn print_samples(out: &mut impl Write, palette: &Palette) -> anyhow::Result<()> {
    for sample in SAMPLE_COLORS {
        let rgb = Rgb::from_html(sample).with_context(|| format!("demo sample {sample:?}"))?;
        let quantized = quantize(rgb);
        let idx = palette.resolve(quantized);
        writeln!(out, "{sample} => {quantized} {} {idx}", quantized.to_html())?;
    }
    Ok(())
}

/// Streams color codes from `input` to `out` as an in-place-refreshing
/// LED strip.
///
/// Each trimmed line is parsed, quantized, and rendered as a background
/// swatch followed by the line and its resolution. Lines that fail to
/// parse are passed through verbatim with no diagnostic; this is a
/// deliberate best-effort policy, not missing validation. Bad lines
/// still advance the line counter, but the cursor-up refresh fires only
/// when a valid line lands on a multiple of `nr_leds`.
///
/// A final reset sequence is emitted when the input is exhausted.
pub fn run_led_strip(
    input: impl BufRead,
    out: &mut impl Write,
    palette: &Palette,
    config: &Config,
) -> anyhow::Result<()> {
    let delay = Duration::from_millis(config.frame_delay_ms);
    let mut line_no: usize = 0;
    for line in input.lines() {
        let line = line.context("reading input line")?;
        let line = line.trim();
        line_no += 1;
        match resolve_line(line, palette) {
            Ok((rgb, idx)) => {
                if line_no % config.nr_leds == 0 {
                    write!(out, "\x1b[{}A", config.nr_leds)?;
                }
                writeln!(
                    out,
                    "\x1b[48;5;{idx}m  \x1b[0m {line} => {rgb} {} {idx}",
                    rgb.to_html()
                )?;
            }
            Err(err) => {
                debug!("passing line through unquantized: {err}");
                writeln!(out, "{line}")?;
            }
        }
        out.flush()?;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    writeln!(out, "\x1b[0m")?;
    Ok(())
}

fn resolve_line(line: &str, palette: &Palette) -> Result<(Rgb, u8), MalformedColorError> {
    let rgb = quantize(Rgb::from_html(line)?);
    Ok((rgb, palette.resolve(rgb)))
}
