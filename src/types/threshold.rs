// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature thresholds and the indicator colors derived from them.
//!
//! The thermostat drives five indicator LEDs, one per threshold. The LED that
//! lights up is the one belonging to the highest threshold the temperature
//! meets or exceeds. The panel mirrors that choice when coloring the current
//! temperature reading.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Number of thresholds a thermostat carries.
pub const THRESHOLD_COUNT: usize = 5;

/// Ordered set of five temperature thresholds in degrees Celsius.
///
/// Thresholds increase from index 0 to 4 by convention. The device does not
/// enforce the ordering, and neither does this type.
///
/// # Examples
///
/// ```
/// use espanel_lib::types::{LedColor, ThresholdSet};
///
/// let limits = ThresholdSet::new([10.0, 20.0, 30.0, 40.0, 50.0]);
/// assert_eq!(limits.active_index(35.0), Some(3));
/// assert_eq!(limits.active_led(35.0), Some(LedColor::Orange));
/// assert_eq!(limits.active_index(5.0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThresholdSet([f64; THRESHOLD_COUNT]);

impl ThresholdSet {
    /// Factory thresholds shipped with the thermostat firmware.
    pub const FACTORY: Self = Self([20.0, 22.0, 25.0, 28.0, 32.0]);

    /// Creates a threshold set from five values.
    #[must_use]
    pub const fn new(values: [f64; THRESHOLD_COUNT]) -> Self {
        Self(values)
    }

    /// Returns the threshold at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::ThresholdIndex` if `index` is not in 0-4.
    pub fn get(&self, index: usize) -> Result<f64, ValueError> {
        self.0
            .get(index)
            .copied()
            .ok_or(ValueError::ThresholdIndex(index))
    }

    /// Returns all thresholds in index order.
    #[must_use]
    pub const fn values(&self) -> &[f64; THRESHOLD_COUNT] {
        &self.0
    }

    /// Returns the index of the highest threshold that `temp` meets or
    /// exceeds, scanning from index 4 down to 0.
    #[must_use]
    pub fn active_index(&self, temp: f64) -> Option<usize> {
        (0..THRESHOLD_COUNT).rev().find(|&i| temp >= self.0[i])
    }

    /// Returns the indicator LED lit for `temp`, if any.
    #[must_use]
    pub fn active_led(&self, temp: f64) -> Option<LedColor> {
        self.active_index(temp).map(LedColor::for_index)
    }

    /// Returns `true` if every threshold is strictly greater than the one
    /// before it.
    #[must_use]
    pub fn is_ascending(&self) -> bool {
        self.0.windows(2).all(|pair| pair[0] < pair[1])
    }
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self::FACTORY
    }
}

impl From<[f64; THRESHOLD_COUNT]> for ThresholdSet {
    fn from(values: [f64; THRESHOLD_COUNT]) -> Self {
        Self::new(values)
    }
}

/// Indicator LED attached to a threshold, in firmware wiring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedColor {
    /// Threshold 0.
    Blue,
    /// Threshold 1.
    Green,
    /// Threshold 2.
    Yellow,
    /// Threshold 3.
    Orange,
    /// Threshold 4.
    Red,
}

impl LedColor {
    /// All LEDs in threshold order.
    pub const ALL: [Self; THRESHOLD_COUNT] =
        [Self::Blue, Self::Green, Self::Yellow, Self::Orange, Self::Red];

    /// Returns the LED for a threshold index, saturating at the last LED.
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        match index {
            0 => Self::Blue,
            1 => Self::Green,
            2 => Self::Yellow,
            3 => Self::Orange,
            _ => Self::Red,
        }
    }

    /// Returns the CSS color of the LED indicator next to the threshold field.
    #[must_use]
    pub const fn css(&self) -> &'static str {
        match self {
            Self::Blue => "#2196F3",
            Self::Green => "#4CAF50",
            Self::Yellow => "#FFEB3B",
            Self::Orange => "#FF9800",
            Self::Red => "#F44336",
        }
    }
}

/// Color used to render the current temperature reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayColor {
    /// The color of the active indicator LED.
    Led(LedColor),
    /// No threshold reached.
    Accent,
}

impl DisplayColor {
    /// Accent color used when the temperature is below every threshold.
    pub const ACCENT_CSS: &'static str = "#03dac6";

    /// Chooses the display color for `temp`.
    ///
    /// Scans from the highest threshold downwards and picks the first one the
    /// temperature meets or exceeds.
    #[must_use]
    pub fn for_temperature(thresholds: &ThresholdSet, temp: f64) -> Self {
        thresholds
            .active_led(temp)
            .map_or(Self::Accent, Self::Led)
    }

    /// Returns the CSS color string.
    #[must_use]
    pub const fn css(&self) -> &'static str {
        match self {
            Self::Led(led) => led.css(),
            Self::Accent => Self::ACCENT_CSS,
        }
    }
}

impl fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css())
    }
}

/// Formats a temperature reading for the display element (`"25.0 °C"`).
#[must_use]
pub fn format_celsius(temp: f64) -> String {
    format!("{} °C", one_decimal(temp))
}

/// Formats a threshold for an input field with one decimal (`"25.0"`).
///
/// Exact halfway values round away from zero, as in a browser's
/// `toFixed(1)`:
///
/// ```
/// use espanel_lib::types::format_threshold;
///
/// assert_eq!(format_threshold(22.25), "22.3");
/// assert_eq!(format_threshold(-2.25), "-2.3");
/// assert_eq!(format_threshold(25.0), "25.0");
/// ```
#[must_use]
pub fn format_threshold(value: f64) -> String {
    one_decimal(value)
}

fn one_decimal(value: f64) -> String {
    // A binary float sits exactly between two tenths only at .25 and .75,
    // where `{:.1}` would round to even.
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let tenths = (value * 10.0).round();
        return format!("{:.1}", tenths / 10.0);
    }
    format!("{value:.1}")
}

/// Parses threshold field text the way a browser's `parseFloat` does.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"21.5abc"` parses as `21.5`. Text without a numeric prefix yields `NaN`.
///
/// # Examples
///
/// ```
/// use espanel_lib::types::parse_lenient;
///
/// assert_eq!(parse_lenient(" 21.5 °C"), 21.5);
/// assert_eq!(parse_lenient("-3e1x"), -30.0);
/// assert!(parse_lenient("abc").is_nan());
/// assert!(parse_lenient("").is_nan());
/// ```
#[must_use]
pub fn parse_lenient(text: &str) -> f64 {
    let s = text.trim_start();
    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    let sign_len = s.len() - body.len();

    if body.starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let bytes = body.as_bytes();
    let digit_run = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = digit_run(0);
    let mut digits = end;
    if bytes.get(end) == Some(&b'.') {
        let fraction = digit_run(end + 1);
        digits += fraction;
        end += 1 + fraction;
    }
    if digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digit_run(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..sign_len + end].parse().unwrap_or(f64::NAN)
}
