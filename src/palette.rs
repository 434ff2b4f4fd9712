// src/palette.rs

//! Builds the fixed 256-entry xterm palette and its RGB-to-index
//! reverse map.
//!
//! The palette is constructed once per process via a `Lazy` static and
//! is read-only afterwards; consumers receive it as `&Palette` so tests
//! can build their own instances.

use crate::color::{Rgb, SHADES};
use once_cell::sync::Lazy;
use std::collections::HashMap;

const PALETTE_SIZE: usize = 256;
const CUBE_OFFSET: usize = 16;
const GRAYSCALE_OFFSET: usize = 232;
const GRAYSCALE_LEVELS: u8 = 24;
const GRAYSCALE_START: u8 = 8;
const GRAYSCALE_STEP: u8 = 10;

/// The 16 fixed system colors at indices 0-15, per the reference xterm
/// table. This literal table is the only place these constants live.
const SYSTEM_COLORS: [Rgb; 16] = [
    Rgb::new(0, 0, 0),       // black
    Rgb::new(128, 0, 0),     // red
    Rgb::new(0, 128, 0),     // green
    Rgb::new(128, 128, 0),   // yellow
    Rgb::new(0, 0, 128),     // blue
    Rgb::new(128, 0, 128),   // magenta
    Rgb::new(0, 128, 128),   // cyan
    Rgb::new(192, 192, 192), // light gray
    Rgb::new(128, 128, 128), // dark gray
    Rgb::new(255, 0, 0),     // bright red
    Rgb::new(0, 255, 0),     // bright green
    Rgb::new(255, 255, 0),   // bright yellow
    Rgb::new(0, 0, 255),     // bright blue
    Rgb::new(255, 0, 255),   // bright magenta
    Rgb::new(0, 255, 255),   // bright cyan
    Rgb::new(255, 255, 255), // white
];

/// The ordered xterm256 palette plus its reverse lookup map.
///
/// Some RGB values occur at more than one index (the cube corners repeat
/// the bright system colors, and the ramp repeats dark gray), so the
/// reverse map resolves those to the highest index holding the value.
#[derive(Debug)]
pub struct Palette {
    entries: [Rgb; PALETTE_SIZE],
    reverse: HashMap<Rgb, u8>,
}

impl Palette {
    /// Constructs the standard xterm256 palette: 16 system colors, the
    /// 216-entry 6x6x6 cube over [`SHADES`] (r outermost, b innermost),
    /// and the 24-step grayscale ramp `8, 18, .., 238`.
    ///
    /// Deterministic and total; no failure modes.
    pub fn xterm256() -> Self {
        let mut entries = [Rgb::new(0, 0, 0); PALETTE_SIZE];
        entries[..CUBE_OFFSET].copy_from_slice(&SYSTEM_COLORS);

        let mut i = CUBE_OFFSET;
        for &r in SHADES.iter() {
            for &g in SHADES.iter() {
                for &b in SHADES.iter() {
                    entries[i] = Rgb::new(r, g, b);
                    i += 1;
                }
            }
        }
        debug_assert_eq!(i, GRAYSCALE_OFFSET);

        for level in 0..GRAYSCALE_LEVELS {
            let x = GRAYSCALE_START + level * GRAYSCALE_STEP;
            entries[i] = Rgb::new(x, x, x);
            i += 1;
        }
        debug_assert_eq!(i, PALETTE_SIZE);

        // Insertion order makes the later index win for duplicated values.
        let mut reverse = HashMap::with_capacity(PALETTE_SIZE);
        for (idx, &rgb) in entries.iter().enumerate() {
            reverse.insert(rgb, idx as u8);
        }

        Palette { entries, reverse }
    }

    /// All 256 entries in index order.
    pub fn entries(&self) -> &[Rgb] {
        &self.entries
    }

    /// Exact reverse lookup of a palette entry.
    pub fn index_of(&self, rgb: Rgb) -> Option<u8> {
        self.reverse.get(&rgb).copied()
    }

    /// Reverse lookup that must not miss.
    ///
    /// # Panics
    /// Panics if `rgb` is not a palette entry. Callers only pass outputs
    /// of [`crate::color::quantize`], which are always present, so a
    /// panic here means the palette construction itself is broken.
    pub fn resolve(&self, rgb: Rgb) -> u8 {
        match self.index_of(rgb) {
            Some(idx) => idx,
            None => panic!("quantized color {rgb} missing from the xterm256 palette"),
        }
    }
}

static PALETTE: Lazy<Palette> = Lazy::new(Palette::xterm256);

/// The process-wide immutable palette, built on first use.
pub fn xterm256() -> &'static Palette {
    &PALETTE
}
