// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! A state change is one write to one UI element. State objects emit them,
//! views render them. Nothing is emitted for a value that did not change
//! where the panel promises non-redundant updates (hex label and color
//! picker).

use crate::types::{Channel, DisplayColor, RgbColor};
use crate::view::ElementId;

/// A single projected change to a panel element.
#[derive(Debug, Clone, PartialEq)]
pub enum StateChange {
    /// New temperature reading text and its display color.
    Temperature {
        /// Reading formatted with one decimal and unit (`"23.8 °C"`).
        text: String,
        /// Color chosen from the thresholds.
        color: DisplayColor,
    },

    /// A threshold input field was (re)populated.
    ThresholdField {
        /// Field index (0-4).
        index: usize,
        /// Field text with one decimal (`"25.0"`).
        text: String,
    },

    /// A slider position was set programmatically.
    Slider {
        /// The slider's channel.
        channel: Channel,
        /// New slider value.
        value: u8,
    },

    /// The numeric label next to a slider changed.
    ChannelLabel {
        /// The label's channel.
        channel: Channel,
        /// Displayed value.
        value: u8,
    },

    /// The swatch background and glow changed.
    Preview(RgbColor),

    /// The hex label text changed.
    HexLabel(String),

    /// The native color picker value changed.
    Picker(String),

    /// The light panel status line changed.
    Status(String),
}

impl StateChange {
    /// Returns the element this change is written to.
    #[must_use]
    pub fn element(&self) -> ElementId {
        match self {
            Self::Temperature { .. } => ElementId::CurrentTemperature,
            Self::ThresholdField { index, .. } => ElementId::Threshold(*index),
            Self::Slider { channel, .. } => ElementId::Slider(*channel),
            Self::ChannelLabel { channel, .. } => ElementId::ChannelLabel(*channel),
            Self::Preview(_) => ElementId::Preview,
            Self::HexLabel(_) => ElementId::Hex,
            Self::Picker(_) => ElementId::ColorPicker,
            Self::Status(_) => ElementId::Status,
        }
    }
}
