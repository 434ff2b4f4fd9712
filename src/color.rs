// src/color.rs

//! Defines the `Rgb` value type, the color-cube shade set, the quantizer,
//! and HTML hex color code parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// The six reference channel values of the 6x6x6 cube region of the
/// xterm256 palette.
pub const SHADES: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Top gray level of the grayscale ramp (palette index 255 holds it).
const GRAYSCALE_MAX: u16 = 238;

/// An exact 24-bit RGB color.
///
/// Equality and hashing are structural over the three channels, so `Rgb`
/// works as a `HashMap` key for the palette reverse map. The `Display`
/// impl renders the human-readable triple with aligned channel columns;
/// [`Rgb::to_html`] renders the `#rrggbb` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Renders the HTML hex form, lowercase and zero-padded: `#rrggbb`.
    pub fn to_html(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses an HTML color code (`rrggbb` or `#rrggbb`).
    ///
    /// Parsing is exact; no quantization happens here. Fails unless the
    /// string, after stripping one optional leading `#`, is exactly six
    /// hexadecimal digits (either case).
    pub fn from_html(s: &str) -> Result<Self, MalformedColorError> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(MalformedColorError::new(s));
        }
        let channel = |range: Range<usize>| -> Result<u8, MalformedColorError> {
            u8::from_str_radix(&hex[range], 16).map_err(|_| MalformedColorError::new(s))
        };
        Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:>3}, {:>3}, {:>3})", self.r, self.g, self.b)
    }
}

/// Error for a string that is not a valid 6-digit HTML color code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedColorError {
    /// The offending input, verbatim.
    pub input: String,
}

impl MalformedColorError {
    fn new(input: &str) -> Self {
        MalformedColorError {
            input: input.to_string(),
        }
    }
}

impl fmt::Display for MalformedColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bad html color code: {}", self.input)
    }
}

impl std::error::Error for MalformedColorError {}

/// Selects the member of [`SHADES`] nearest to `x`.
///
/// Ascending scan with a strict less-than comparison, so when `x` sits
/// exactly between two shades the lower one wins (155 -> 135). The tie
/// direction is an artifact of the scan order; it is kept as-is for
/// output compatibility.
pub fn closest_shade(x: u8) -> u8 {
    let mut delta_min = u16::MAX;
    let mut closest = 0u8;
    for &shade in SHADES.iter() {
        let delta = u16::from(shade.abs_diff(x));
        if delta < delta_min {
            delta_min = delta;
            closest = shade;
        }
    }
    closest
}

/// Projects an arbitrary color onto the palette's quantization space.
///
/// Pure grays (r == g == b) map onto the grayscale ramp: the channel is
/// floored to the nearest `10k + 8` level. The ramp tops out at 238, so
/// grays that would round above it collapse to pure white instead.
/// Every other color gets each channel snapped independently to the
/// nearest cube shade via [`closest_shade`].
///
/// Total over all inputs; the result is always present in the palette
/// reverse map. Note it is not a fixed-point projection: a near-gray
/// input can snap to an all-equal cube point that a second pass would
/// pull onto the ramp.
pub fn quantize(rgb: Rgb) -> Rgb {
    if rgb.r == rgb.g && rgb.g == rgb.b {
        // Widened to u16: 250/10*10 + 8 would overflow a u8.
        let x = u16::from(rgb.r) / 10 * 10 + 8;
        let x = if x > GRAYSCALE_MAX { 255 } else { x as u8 };
        Rgb::new(x, x, x)
    } else {
        Rgb::new(
            closest_shade(rgb.r),
            closest_shade(rgb.g),
            closest_shade(rgb.b),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_html_with_and_without_hash() {
        assert_eq!(Rgb::from_html("ff87d7").unwrap(), Rgb::new(255, 135, 215));
        assert_eq!(Rgb::from_html("#ff87d7").unwrap(), Rgb::new(255, 135, 215));
    }

    #[test]
    fn test_from_html_accepts_uppercase_digits() {
        assert_eq!(Rgb::from_html("FF87D7").unwrap(), Rgb::new(255, 135, 215));
    }

    #[test]
    fn test_from_html_is_exact() {
        // Parsing never quantizes; the round trip preserves the input.
        assert_eq!(Rgb::from_html("ff87d7").unwrap().to_html(), "#ff87d7");
        assert_eq!(Rgb::from_html("#121212").unwrap(), Rgb::new(18, 18, 18));
    }

    #[test]
    fn test_from_html_rejects_malformed_input() {
        for bad in ["not-a-color", "", "12345", "1234567", "#ggg000", "#12345", "# 12345"] {
            let err = Rgb::from_html(bad).unwrap_err();
            assert_eq!(err.input, bad);
        }
    }

    #[test]
    fn test_malformed_error_display_names_the_input() {
        let err = Rgb::from_html("not-a-color").unwrap_err();
        assert_eq!(err.to_string(), "bad html color code: not-a-color");
    }

    #[test]
    fn test_display_aligns_channel_columns() {
        assert_eq!(Rgb::new(255, 135, 95).to_string(), "(255, 135,  95)");
        assert_eq!(Rgb::new(0, 0, 0).to_string(), "(  0,   0,   0)");
    }

    #[test]
    fn test_closest_shade_exact_member_is_zero_distance() {
        for &shade in SHADES.iter() {
            assert_eq!(closest_shade(shade), shade);
        }
    }

    #[test]
    fn test_closest_shade_tie_resolves_to_lower_shade() {
        // 155 is 20 away from both 135 and 175; the ascending scan with a
        // strict less-than keeps the first minimum.
        assert_eq!(closest_shade(155), 135);
        // 115 ties 95 and 135, and 195/235 tie the upper pairs, the same way.
        assert_eq!(closest_shade(115), 95);
        assert_eq!(closest_shade(195), 175);
        assert_eq!(closest_shade(235), 215);
    }

    #[test]
    fn test_closest_shade_rounds_to_nearest() {
        assert_eq!(closest_shade(47), 0);
        assert_eq!(closest_shade(48), 95);
        assert_eq!(closest_shade(114), 95);
        assert_eq!(closest_shade(116), 135);
        // 165 is not a tie: 10 from 175 versus 30 from 135.
        assert_eq!(closest_shade(165), 175);
        assert_eq!(closest_shade(240), 255);
    }

    #[test]
    fn test_quantize_gray_on_ramp_is_fixed_point() {
        assert_eq!(quantize(Rgb::new(238, 238, 238)), Rgb::new(238, 238, 238));
        assert_eq!(quantize(Rgb::new(18, 18, 18)), Rgb::new(18, 18, 18));
    }

    #[test]
    fn test_quantize_gray_rounds_down_to_ramp_level() {
        assert_eq!(quantize(Rgb::new(123, 123, 123)), Rgb::new(128, 128, 128));
        assert_eq!(quantize(Rgb::new(0, 0, 0)), Rgb::new(8, 8, 8));
    }

    #[test]
    fn test_quantize_gray_above_ramp_collapses_to_white() {
        assert_eq!(quantize(Rgb::new(240, 240, 240)), Rgb::new(255, 255, 255));
        assert_eq!(quantize(Rgb::new(250, 250, 250)), Rgb::new(255, 255, 255));
        assert_eq!(quantize(Rgb::new(255, 255, 255)), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_quantize_non_gray_snaps_each_channel() {
        // 0x801cee: 128 -> 135, 28 -> 0, 238 -> 255.
        assert_eq!(quantize(Rgb::new(128, 28, 238)), Rgb::new(135, 0, 255));
    }

    #[test]
    fn test_quantize_settles_cube_and_ramp_results() {
        for rgb in [
            Rgb::new(128, 28, 238),
            Rgb::new(123, 123, 123),
            Rgb::new(250, 250, 250),
        ] {
            let once = quantize(rgb);
            assert_eq!(quantize(once), once);
        }
    }

    #[test]
    fn test_quantize_near_gray_output_is_not_a_fixed_point() {
        // (1, 2, 3) snaps every channel to shade 0, producing a pure gray
        // that a second pass pulls onto the ramp. quantize guarantees a
        // palette member, not a fixed point.
        assert_eq!(quantize(Rgb::new(1, 2, 3)), Rgb::new(0, 0, 0));
        assert_eq!(quantize(Rgb::new(0, 0, 0)), Rgb::new(8, 8, 8));
    }
}
