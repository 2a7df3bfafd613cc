// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat data response parsing.

use serde::Deserialize;

use crate::types::{DisplayColor, ThresholdSet, format_celsius};

/// Response from the `/api/data` endpoint.
///
/// The device reports the latest sensor reading together with the
/// thresholds it currently applies:
///
/// ```json
/// {"temp": 23.81, "limits": [20.0, 22.0, 25.0, 28.0, 32.0]}
/// ```
///
/// The `limits` array must hold exactly five numbers.
///
/// # Examples
///
/// ```
/// use espanel_lib::response::DataResponse;
///
/// let json = r#"{"temp": 23.81, "limits": [20, 22, 25, 28, 32]}"#;
/// let response: DataResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(response.temperature_text(), "23.8 °C");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DataResponse {
    temp: f64,
    limits: ThresholdSet,
}

impl DataResponse {
    /// Creates a response from its parts.
    #[must_use]
    pub const fn new(temp: f64, limits: ThresholdSet) -> Self {
        Self { temp, limits }
    }

    /// Returns the current temperature in degrees Celsius.
    #[must_use]
    pub const fn temperature(&self) -> f64 {
        self.temp
    }

    /// Returns the thresholds applied by the device.
    #[must_use]
    pub const fn limits(&self) -> &ThresholdSet {
        &self.limits
    }

    /// Returns the display text for the temperature reading.
    #[must_use]
    pub fn temperature_text(&self) -> String {
        format_celsius(self.temp)
    }

    /// Returns the display color for the temperature reading.
    #[must_use]
    pub fn display_color(&self) -> DisplayColor {
        DisplayColor::for_temperature(&self.limits, self.temp)
    }
}
