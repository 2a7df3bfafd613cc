// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type with hex parsing and formatting.
//!
//! The light panel keeps two equivalent representations of the lamp color:
//! the channel triple driven by the sliders and the `#RRGGBB` string shown in
//! the hex label and the native color picker. [`RgbColor`] converts between
//! the two.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// RGB color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use espanel_lib::types::RgbColor;
///
/// let color = RgbColor::new(255, 128, 0);
/// assert_eq!(color.to_hex_with_hash(), "#FF8000");
///
/// let short = RgbColor::from_hex("#ABC").unwrap();
/// assert_eq!(short, RgbColor::new(0xAA, 0xBB, 0xCC));
///
/// // Malformed input silently falls back to black
/// assert_eq!(RgbColor::from_hex_lossy("xyz"), RgbColor::black());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses an RGB color from a hex string.
    ///
    /// Accepts exactly the forms a color picker produces: `#RRGGBB` and the
    /// short `#RGB`, where each digit is doubled. Digits are case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHexColor` if the `#` prefix is missing, the
    /// length is neither 4 nor 7, or a digit is not hexadecimal.
    ///
    /// # Examples
    ///
    /// ```
    /// use espanel_lib::types::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF5733").unwrap();
    /// assert_eq!(color.red(), 255);
    /// assert_eq!(color.green(), 87);
    /// assert_eq!(color.blue(), 51);
    ///
    /// assert!(RgbColor::from_hex("FF5733").is_err());
    /// assert!(RgbColor::from_hex("#12").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ValueError> {
        let invalid = || ValueError::InvalidHexColor(hex.to_string());

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            3 => {
                let r = parse_hex_pair(&digits[0..1].repeat(2))?;
                let g = parse_hex_pair(&digits[1..2].repeat(2))?;
                let b = parse_hex_pair(&digits[2..3].repeat(2))?;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = parse_hex_pair(&digits[0..2])?;
                let g = parse_hex_pair(&digits[2..4])?;
                let b = parse_hex_pair(&digits[4..6])?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(invalid()),
        }
    }

    /// Parses a hex string, falling back to black on any malformed input.
    ///
    /// This is the conversion the light panel applies to color picker input:
    /// no error is ever surfaced to the user.
    ///
    /// The whole string is rejected on a single bad digit, so `#1Z2233` is
    /// black rather than a partially parsed color. Native color pickers never
    /// produce such input.
    #[must_use]
    pub fn from_hex_lossy(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "Falling back to black");
            Self::black()
        })
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the value of a single channel.
    #[must_use]
    pub const fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Returns a copy with one channel replaced.
    #[must_use]
    pub const fn with_channel(mut self, channel: Channel, value: u8) -> Self {
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
        self
    }

    /// Returns the color as an uppercase hex string with the hash prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use espanel_lib::types::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(0, 15, 255).to_hex_with_hash(), "#000FFF");
    /// ```
    #[must_use]
    pub fn to_hex_with_hash(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Returns the CSS `rgb()` form used for the swatch background.
    #[must_use]
    pub fn to_css_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.red, self.green, self.blue)
    }

    /// Returns the CSS box shadow used for the swatch glow.
    #[must_use]
    pub fn to_css_glow(&self) -> String {
        format!(
            "0 0 30px rgba({},{},{},0.7)",
            self.red, self.green, self.blue
        )
    }

    /// Creates a black color (all channels off).
    #[must_use]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_with_hash())
    }
}

impl FromStr for RgbColor {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<RgbColor> for (u8, u8, u8) {
    fn from(color: RgbColor) -> Self {
        (color.red, color.green, color.blue)
    }
}

/// One of the three color channels driven by a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red channel.
    Red,
    /// Green channel.
    Green,
    /// Blue channel.
    Blue,
}

impl Channel {
    /// All channels in slider order.
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Returns the query parameter name used by the `/set` endpoint.
    #[must_use]
    pub const fn query_key(&self) -> &'static str {
        match self {
            Self::Red => "r",
            Self::Green => "g",
            Self::Blue => "b",
        }
    }
}

fn parse_hex_pair(s: &str) -> Result<u8, ValueError> {
    u8::from_str_radix(s, 16).map_err(|_| ValueError::InvalidHexColor(s.to_string()))
}
