// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! View binding layer.
//!
//! Panels never touch UI controls directly. They project [`StateChange`]s and
//! [`Notice`]s onto a [`View`], which a front end implements (a web page via
//! bindings, a terminal UI, or the in-memory [`MemoryView`]).
//!
//! The page markup addresses its controls by DOM id. [`ElementId`] is the
//! contract between those ids and the panels: a front end that renames an
//! element must update the mapping in lockstep.

mod memory;

pub use memory::MemoryView;

use std::fmt;

use crate::state::StateChange;
use crate::types::{Channel, THRESHOLD_COUNT};

/// A bound UI element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    /// Current temperature display (`currTemp`).
    CurrentTemperature,
    /// Threshold input field (`t0`..`t4`).
    Threshold(usize),
    /// Channel slider (`r`, `g`, `b`).
    Slider(Channel),
    /// Numeric channel label (`val-r`, `val-g`, `val-b`).
    ChannelLabel(Channel),
    /// Hex label (`hex`).
    Hex,
    /// Color swatch (`preview`).
    Preview,
    /// Native color picker (`colorPicker`).
    ColorPicker,
    /// Light panel status line (`status`).
    Status,
    /// Apply button (`apply`).
    Apply,
    /// Off button (`off`).
    Off,
}

impl ElementId {
    /// Returns the DOM id of this element.
    #[must_use]
    pub fn dom_id(&self) -> String {
        match self {
            Self::CurrentTemperature => "currTemp".to_string(),
            Self::Threshold(index) => format!("t{index}"),
            Self::Slider(channel) => channel.query_key().to_string(),
            Self::ChannelLabel(channel) => format!("val-{}", channel.query_key()),
            Self::Hex => "hex".to_string(),
            Self::Preview => "preview".to_string(),
            Self::ColorPicker => "colorPicker".to_string(),
            Self::Status => "status".to_string(),
            Self::Apply => "apply".to_string(),
            Self::Off => "off".to_string(),
        }
    }

    /// Resolves a DOM id back to an element.
    ///
    /// # Examples
    ///
    /// ```
    /// use espanel_lib::types::Channel;
    /// use espanel_lib::view::ElementId;
    ///
    /// assert_eq!(ElementId::from_dom_id("t3"), Some(ElementId::Threshold(3)));
    /// assert_eq!(
    ///     ElementId::from_dom_id("val-b"),
    ///     Some(ElementId::ChannelLabel(Channel::Blue))
    /// );
    /// assert_eq!(ElementId::from_dom_id("t5"), None);
    /// ```
    #[must_use]
    pub fn from_dom_id(id: &str) -> Option<Self> {
        let channel = |key: &str| Channel::ALL.into_iter().find(|c| c.query_key() == key);

        match id {
            "currTemp" => Some(Self::CurrentTemperature),
            "hex" => Some(Self::Hex),
            "preview" => Some(Self::Preview),
            "colorPicker" => Some(Self::ColorPicker),
            "status" => Some(Self::Status),
            "apply" => Some(Self::Apply),
            "off" => Some(Self::Off),
            _ => {
                if let Some(key) = id.strip_prefix("val-") {
                    return channel(key).map(Self::ChannelLabel);
                }
                if let Some(index) = id.strip_prefix('t') {
                    return index
                        .parse::<usize>()
                        .ok()
                        .filter(|i| *i < THRESHOLD_COUNT)
                        .map(Self::Threshold);
                }
                channel(id).map(Self::Slider)
            }
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dom_id())
    }
}

/// User-facing outcome of a thermostat save.
///
/// The `Display` texts are this library's own English wording. Front ends
/// that need another language can match on the variant instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The device accepted the new thresholds.
    Saved,
    /// The device rejected the request with an HTTP status.
    ServerError(u16),
    /// The request never reached the device.
    ConnectionError,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Saved => f.write_str("Settings saved!"),
            Self::ServerError(code) => write!(f, "Server error! Code: {code}"),
            Self::ConnectionError => f.write_str("Connection error!"),
        }
    }
}

/// Projection target for panel state.
///
/// Views are write-only from the panel's point of view: all state lives in
/// the panel's state object.
pub trait View {
    /// Writes one state change to its element.
    fn render(&mut self, change: &StateChange);

    /// Presents a notice to the user.
    fn notify(&mut self, notice: &Notice);

    /// Writes a batch of changes in order.
    fn render_all(&mut self, changes: &[StateChange]) {
        for change in changes {
            self.render(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_ids_match_markup() {
        assert_eq!(ElementId::CurrentTemperature.dom_id(), "currTemp");
        assert_eq!(ElementId::Threshold(0).dom_id(), "t0");
        assert_eq!(ElementId::Slider(Channel::Red).dom_id(), "r");
        assert_eq!(ElementId::ChannelLabel(Channel::Green).dom_id(), "val-g");
        assert_eq!(ElementId::ColorPicker.to_string(), "colorPicker");
    }

    #[test]
    fn dom_ids_roundtrip() {
        let mut ids = vec![
            ElementId::CurrentTemperature,
            ElementId::Hex,
            ElementId::Preview,
            ElementId::ColorPicker,
            ElementId::Status,
            ElementId::Apply,
            ElementId::Off,
        ];
        ids.extend((0..THRESHOLD_COUNT).map(ElementId::Threshold));
        ids.extend(Channel::ALL.map(ElementId::Slider));
        ids.extend(Channel::ALL.map(ElementId::ChannelLabel));

        for id in ids {
            assert_eq!(ElementId::from_dom_id(&id.dom_id()), Some(id));
        }
        assert_eq!(ElementId::from_dom_id("val-x"), None);
        assert_eq!(ElementId::from_dom_id("nope"), None);
    }

    #[test]
    fn notice_messages() {
        assert_eq!(Notice::Saved.to_string(), "Settings saved!");
        assert_eq!(Notice::ServerError(500).to_string(), "Server error! Code: 500");
        assert_eq!(Notice::ConnectionError.to_string(), "Connection error!");
    }
}
