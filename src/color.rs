//! The [`Color`] value type and hex notation parsing.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::rgb::Rgb;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all derived quantities are computed as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all derived quantities are computed as.
pub type Component = f64;

/// The input string was not a valid 3- or 6-digit hex color. Carries the
/// offending input for diagnostics.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid color format: {0:?}")]
pub struct InvalidColorFormat(pub String);

/// A color in canonical hex notation.
///
/// Parsed from `#RRGGBB` or shorthand `#RGB` (case-insensitive, `#`
/// optional) and normalized to uppercase 6-digit form. A `Color` has no
/// identity beyond its value: two colors with equal normalized hex are
/// interchangeable.
///
/// ```rust
/// use palette_lab::Color;
/// let c: Color = "#ff8000".parse().unwrap();
/// assert_eq!(c.to_string(), "#FF8000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    channels: [u8; 3],
}

impl Color {
    /// Parse a hex color string. Shorthand `#RGB` is expanded to `#RRGGBB`
    /// before any computation. Anything that is not exactly 3 or 6 hex
    /// digits after stripping an optional leading `#` is rejected, never
    /// clamped or defaulted.
    pub fn parse(input: &str) -> Result<Self, InvalidColorFormat> {
        let digits = input.strip_prefix('#').unwrap_or(input).as_bytes();

        let err = || InvalidColorFormat(input.to_string());

        let channels = match digits.len() {
            3 => {
                let mut channels = [0; 3];
                for (channel, &digit) in channels.iter_mut().zip(digits) {
                    let value = hex_value(digit).ok_or_else(err)?;
                    *channel = value * 16 + value;
                }
                channels
            }
            6 => {
                let mut channels = [0; 3];
                for (channel, pair) in channels.iter_mut().zip(digits.chunks_exact(2)) {
                    let hi = hex_value(pair[0]).ok_or_else(err)?;
                    let lo = hex_value(pair[1]).ok_or_else(err)?;
                    *channel = hi * 16 + lo;
                }
                channels
            }
            _ => return Err(err()),
        };

        Ok(Self { channels })
    }

    /// Return the color's RGB channels.
    pub const fn rgb(&self) -> Rgb {
        Rgb::new(self.channels[0], self.channels[1], self.channels[2])
    }

    /// Return the canonical uppercase `#RRGGBB` form.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self {
            channels: [value.red, value.green, value.blue],
        }
    }
}

impl FromStr for Color {
    type Err = InvalidColorFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}",
            self.channels[0], self.channels[1], self.channels[2]
        )
    }
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Parse a slice of hex color strings, failing on the first malformed entry.
pub(crate) fn parse_all(colors: &[impl AsRef<str>]) -> Result<Vec<Color>, InvalidColorFormat> {
    colors.iter().map(|c| Color::parse(c.as_ref())).collect()
}
