// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lamp color response parsing.

use serde_json::Value;

use crate::error::ParseError;
use crate::types::RgbColor;

/// Response from the `/get` endpoint.
///
/// The device answers `{"r": 255, "g": 128, "b": 0}`. Parsing is lenient:
/// any JSON object is accepted, and [`channels`](Self::channels) only yields a
/// color when all three fields are numbers. A panel falls back to its current
/// sliders otherwise.
///
/// # Examples
///
/// ```
/// use espanel_lib::response::ColorResponse;
/// use espanel_lib::types::RgbColor;
///
/// let response = ColorResponse::from_json(r#"{"r": 255, "g": 128, "b": 0}"#).unwrap();
/// assert_eq!(response.channels(), Some(RgbColor::new(255, 128, 0)));
///
/// let response = ColorResponse::from_json(r#"{"r": "red"}"#).unwrap();
/// assert_eq!(response.channels(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColorResponse {
    r: Option<Value>,
    g: Option<Value>,
    b: Option<Value>,
}

impl ColorResponse {
    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body is not JSON, and
    /// `ParseError::UnexpectedFormat` if it is JSON `null`.
    pub fn from_json(body: &str) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    /// Builds a response from an already parsed JSON value.
    ///
    /// Non-object values other than `null` carry no channel fields.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` for JSON `null`.
    pub fn from_value(value: Value) -> Result<Self, ParseError> {
        match value {
            Value::Null => Err(ParseError::UnexpectedFormat(
                "color response is null".to_string(),
            )),
            Value::Object(mut map) => Ok(Self {
                r: map.remove("r"),
                g: map.remove("g"),
                b: map.remove("b"),
            }),
            _ => Ok(Self::default()),
        }
    }

    /// Returns the color if all three channels are numbers.
    ///
    /// Values are rounded and clamped to 0-255, the way a range slider
    /// clamps an assigned value.
    #[must_use]
    pub fn channels(&self) -> Option<RgbColor> {
        let r = numeric_channel(self.r.as_ref())?;
        let g = numeric_channel(self.g.as_ref())?;
        let b = numeric_channel(self.b.as_ref())?;
        Some(RgbColor::new(r, g, b))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn numeric_channel(value: Option<&Value>) -> Option<u8> {
    let number = value?.as_f64()?;
    Some(number.round().clamp(0.0, 255.0) as u8)
}

/// Plain text reply from the `/set` endpoint.
///
/// The firmware replies `OK R=255 G=128 B=0` with the clamped values it
/// applied.
///
/// # Examples
///
/// ```
/// use espanel_lib::response::SetColorResponse;
/// use espanel_lib::types::RgbColor;
///
/// let response = SetColorResponse::new("OK R=255 G=128 B=0\n");
/// assert_eq!(response.status_text(), "OK R=255 G=128 B=0");
/// assert_eq!(response.applied_color(), Some(RgbColor::new(255, 128, 0)));
///
/// assert_eq!(SetColorResponse::new("  ").status_text(), "OK");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetColorResponse {
    body: String,
}

impl SetColorResponse {
    /// Wraps a raw response body.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Returns the trimmed body, or `"OK"` if it is empty.
    #[must_use]
    pub fn status_text(&self) -> &str {
        let text = self.body.trim();
        if text.is_empty() { "OK" } else { text }
    }

    /// Returns the color echoed back by the firmware, if the body has the
    /// `OK R=.. G=.. B=..` shape.
    #[must_use]
    pub fn applied_color(&self) -> Option<RgbColor> {
        let mut parts = self.body.split_whitespace();
        if parts.next()? != "OK" {
            return None;
        }
        let mut channel =
            |prefix: &str| -> Option<u8> { parts.next()?.strip_prefix(prefix)?.parse().ok() };
        let r = channel("R=")?;
        let g = channel("G=")?;
        let b = channel("B=")?;
        Some(RgbColor::new(r, g, b))
    }
}
