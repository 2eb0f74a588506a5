use crate::config::Notation;
use crate::gradient::RAINBOW;
use crate::models::{Rgb, ValueRange, rgb_to_hex};

/// Uppercase `#RRGGBB`, interpolated directly on 8-bit channels.
pub fn value_to_color_hex(value: f64, range: ValueRange) -> String {
    RAINBOW.map_rgb8(value, range).to_hex_upper()
}

/// Normalized RGB.
pub fn value_to_rainbow_rgb(value: f64, range: ValueRange) -> Rgb {
    RAINBOW.map(value, range)
}

/// Lowercase `#rrggbb`, derived from [`value_to_rainbow_rgb`].
pub fn value_to_rainbow_hex(value: f64, range: ValueRange) -> String {
    rgb_to_hex(value_to_rainbow_rgb(value, range))
}

/// Maps `value` and renders it in the requested notation.
pub fn map_value(value: f64, range: ValueRange, notation: Notation) -> String {
    match notation {
        Notation::Hex => value_to_color_hex(value, range),
        Notation::HexLower => value_to_rainbow_hex(value, range),
        Notation::Rgb => value_to_rainbow_rgb(value, range).to_string(),
        Notation::Rgb8 => {
            let c = RAINBOW.map_rgb8(value, range);
            format!("({}, {}, {})", c.red, c.green, c.blue)
        }
    }
}
