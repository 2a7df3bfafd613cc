// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light panel state.

use crate::types::{Channel, RgbColor};

use super::StateChange;

/// Tracked state of the light panel.
///
/// The sliders are the canonical representation. Every other element (channel
/// labels, swatch, hex label, color picker) is derived from them by
/// [`render_from_sliders`](Self::render_from_sliders). Picker input re-enters
/// through the sliders so all representations stay consistent.
///
/// # Examples
///
/// ```
/// use espanel_lib::state::{LightState, StateChange};
/// use espanel_lib::types::RgbColor;
///
/// let mut state = LightState::new();
/// state.picker_input("#ABC");
/// assert_eq!(state.sliders(), RgbColor::new(0xAA, 0xBB, 0xCC));
/// assert_eq!(state.hex_label(), "#AABBCC");
/// assert_eq!(state.picker(), "#AABBCC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightState {
    sliders: RgbColor,
    hex_label: String,
    picker: String,
    status: String,
}

impl LightState {
    /// Value a native color input starts with.
    pub const PICKER_DEFAULT: &'static str = "#000000";

    /// Creates a state with all sliders at zero and nothing rendered yet.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sliders(RgbColor::black())
    }

    /// Creates a state with the sliders at an initial position.
    #[must_use]
    pub fn with_sliders(sliders: RgbColor) -> Self {
        Self {
            sliders,
            hex_label: String::new(),
            picker: Self::PICKER_DEFAULT.to_string(),
            status: String::new(),
        }
    }

    /// Returns the slider channels.
    #[must_use]
    pub fn sliders(&self) -> RgbColor {
        self.sliders
    }

    /// Returns the hex label text.
    #[must_use]
    pub fn hex_label(&self) -> &str {
        &self.hex_label
    }

    /// Returns the color picker value.
    #[must_use]
    pub fn picker(&self) -> &str {
        &self.picker
    }

    /// Returns the status line.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Handles the user dragging a slider.
    pub fn slider_input(&mut self, channel: Channel, value: u8) -> Vec<StateChange> {
        self.sliders = self.sliders.with_channel(channel, value);
        self.render_from_sliders()
    }

    /// Handles the user choosing a color in the picker.
    ///
    /// Malformed input resolves to black.
    pub fn picker_input(&mut self, hex: &str) -> Vec<StateChange> {
        self.picker = hex.to_string();
        self.set_sliders(RgbColor::from_hex_lossy(hex))
    }

    /// Moves all sliders programmatically and re-renders.
    pub fn set_sliders(&mut self, color: RgbColor) -> Vec<StateChange> {
        self.sliders = color;
        let mut changes: Vec<StateChange> = Channel::ALL
            .iter()
            .map(|&channel| StateChange::Slider {
                channel,
                value: color.channel(channel),
            })
            .collect();
        changes.extend(self.render_from_sliders());
        changes
    }

    /// Derives every other representation from the sliders.
    ///
    /// The hex label and picker are only written when their value actually
    /// differs. The picker comparison ignores case, since pickers may report
    /// lowercase digits.
    pub fn render_from_sliders(&mut self) -> Vec<StateChange> {
        let color = self.sliders;
        let mut changes: Vec<StateChange> = Channel::ALL
            .iter()
            .map(|&channel| StateChange::ChannelLabel {
                channel,
                value: color.channel(channel),
            })
            .collect();
        changes.push(StateChange::Preview(color));

        let hex = color.to_hex_with_hash();
        if self.hex_label != hex {
            self.hex_label.clone_from(&hex);
            changes.push(StateChange::HexLabel(hex.clone()));
        }
        if !self.picker.eq_ignore_ascii_case(&hex) {
            self.picker.clone_from(&hex);
            changes.push(StateChange::Picker(hex));
        }

        changes
    }

    /// Replaces the status line.
    pub fn set_status(&mut self, text: impl Into<String>) -> StateChange {
        self.status = text.into();
        StateChange::Status(self.status.clone())
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}
