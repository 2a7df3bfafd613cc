// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for panel state.
//!
//! # Types
//!
//! - [`RgbColor`] - Lamp color as a channel triple, convertible to/from hex
//! - [`Channel`] - One slider channel of an [`RgbColor`]
//! - [`ThresholdSet`] - The five thermostat breakpoints (°C)
//! - [`LedColor`] - Indicator LED attached to each threshold
//! - [`DisplayColor`] - Color chosen for the current temperature reading

mod rgb_color;
mod threshold;

pub use rgb_color::{Channel, RgbColor};
pub use threshold::{
    DisplayColor, LedColor, THRESHOLD_COUNT, ThresholdSet, format_celsius, format_threshold,
    parse_lenient,
};
