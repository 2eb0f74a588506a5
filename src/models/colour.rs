use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Colour with every channel normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

/// Colour with 8-bit channels, printed as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Rounds each channel to the nearest 8-bit value, clamped to `[0, 255]`.
    pub fn to_rgb8(self) -> Rgb8 {
        Rgb8::new(
            to_channel(self.red),
            to_channel(self.green),
            to_channel(self.blue),
        )
    }

    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        Rgb {
            red: self.red + (other.red - self.red) * t,
            green: self.green + (other.green - self.green) * t,
            blue: self.blue + (other.blue - self.blue) * t,
        }
    }
}

fn to_channel(c: f64) -> u8 {
    // NaN saturates to 0 in the cast
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

impl Rgb8 {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn to_rgb(self) -> Rgb {
        Rgb::new(
            self.red as f64 / 255.0,
            self.green as f64 / 255.0,
            self.blue as f64 / 255.0,
        )
    }

    /// `#RRGGBB`
    pub fn to_hex_upper(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// `#rrggbb`
    pub fn to_hex_lower(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Interpolates in 0-255 space and rounds once at the end.
    pub fn lerp(self, other: Rgb8, t: f64) -> Rgb8 {
        let mix = |a: u8, b: u8| {
            let a = a as f64;
            (a + (b as f64 - a) * t).round().clamp(0.0, 255.0) as u8
        };
        Rgb8::new(
            mix(self.red, other.red),
            mix(self.green, other.green),
            mix(self.blue, other.blue),
        )
    }

    pub fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_upper())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb8 {
    type Err = Error;

    /// Accepts `#RRGGBB` or `RRGGBB`, either case.
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        // from_str_radix would also take a leading '+'
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| Error::InvalidHex(s.to_string()))
        };
        Ok(Rgb8::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl From<Rgb8> for Rgb {
    fn from(c: Rgb8) -> Self {
        c.to_rgb()
    }
}

impl From<Rgb> for (f64, f64, f64) {
    fn from(c: Rgb) -> Self {
        (c.red, c.green, c.blue)
    }
}

impl From<(f64, f64, f64)> for Rgb {
    fn from((red, green, blue): (f64, f64, f64)) -> Self {
        Rgb::new(red, green, blue)
    }
}

/// Parses `#RRGGBB` into normalized channels.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    Ok(hex.parse::<Rgb8>()?.to_rgb())
}

/// Formats normalized channels as lowercase `#rrggbb`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_rgb8().to_hex_lower()
}
