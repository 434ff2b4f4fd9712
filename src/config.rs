// src/config.rs

//! Display pacing configuration.
//!
//! There is deliberately no configuration file, flag, or environment
//! surface; callers use `Config::default()`. The struct gives the pacing
//! knobs a single home and lets tests inject a zero delay.

use serde::{Deserialize, Serialize};

/// Settings for the LED-strip display loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of rows in the in-place-refreshing LED block.
    pub nr_leds: usize,
    /// Delay inserted after each streamed line, in milliseconds.
    pub frame_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            nr_leds: 25,
            frame_delay_ms: 20,
        }
    }
}
