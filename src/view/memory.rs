// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory page.

use std::collections::HashMap;

use crate::state::StateChange;
use crate::types::{DisplayColor, RgbColor};

use super::{ElementId, Notice, View};

/// A headless [`View`] that records element contents and write counts.
///
/// # Examples
///
/// ```
/// use espanel_lib::state::StateChange;
/// use espanel_lib::view::{ElementId, MemoryView, View};
///
/// let mut view = MemoryView::new();
/// view.render(&StateChange::HexLabel("#FF0000".to_string()));
/// assert_eq!(view.text(ElementId::Hex), Some("#FF0000"));
/// assert_eq!(view.write_count(ElementId::Hex), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    text: HashMap<ElementId, String>,
    writes: HashMap<ElementId, usize>,
    temperature_color: Option<DisplayColor>,
    preview: Option<RgbColor>,
    notices: Vec<Notice>,
}

impl MemoryView {
    /// Creates an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current text or value of an element.
    #[must_use]
    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.text.get(&id).map(String::as_str)
    }

    /// Returns how many times an element was written.
    #[must_use]
    pub fn write_count(&self, id: ElementId) -> usize {
        self.writes.get(&id).copied().unwrap_or(0)
    }

    /// Returns the color of the temperature display.
    #[must_use]
    pub fn temperature_color(&self) -> Option<DisplayColor> {
        self.temperature_color
    }

    /// Returns the swatch color.
    #[must_use]
    pub fn preview(&self) -> Option<RgbColor> {
        self.preview
    }

    /// Returns every notice shown so far.
    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Returns the most recent notice.
    #[must_use]
    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }

    fn write(&mut self, id: ElementId, text: String) {
        self.text.insert(id, text);
        *self.writes.entry(id).or_insert(0) += 1;
    }
}

impl View for MemoryView {
    fn render(&mut self, change: &StateChange) {
        let id = change.element();
        match change {
            StateChange::Temperature { text, color } => {
                self.temperature_color = Some(*color);
                self.write(id, text.clone());
            }
            StateChange::ThresholdField { text, .. }
            | StateChange::HexLabel(text)
            | StateChange::Picker(text)
            | StateChange::Status(text) => self.write(id, text.clone()),
            StateChange::Slider { value, .. } | StateChange::ChannelLabel { value, .. } => {
                self.write(id, value.to_string());
            }
            StateChange::Preview(color) => {
                self.preview = Some(*color);
                self.write(id, color.to_css_rgb());
            }
        }
    }

    fn notify(&mut self, notice: &Notice) {
        tracing::info!(%notice, "Panel notice");
        self.notices.push(*notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Channel, LedColor};

    #[test]
    fn records_temperature_and_color() {
        let mut view = MemoryView::new();
        view.render(&StateChange::Temperature {
            text: "35.0 °C".to_string(),
            color: DisplayColor::Led(LedColor::Orange),
        });
        assert_eq!(view.text(ElementId::CurrentTemperature), Some("35.0 °C"));
        assert_eq!(
            view.temperature_color(),
            Some(DisplayColor::Led(LedColor::Orange))
        );
    }

    #[test]
    fn counts_writes_per_element() {
        let mut view = MemoryView::new();
        let change = StateChange::Slider {
            channel: Channel::Blue,
            value: 12,
        };
        view.render_all(&[change.clone(), change]);
        assert_eq!(view.text(ElementId::Slider(Channel::Blue)), Some("12"));
        assert_eq!(view.write_count(ElementId::Slider(Channel::Blue)), 2);
        assert_eq!(view.write_count(ElementId::Hex), 0);
    }

    #[test]
    fn records_preview_and_notices() {
        let mut view = MemoryView::new();
        view.render(&StateChange::Preview(RgbColor::new(1, 2, 3)));
        view.notify(&Notice::ServerError(500));

        assert_eq!(view.preview(), Some(RgbColor::new(1, 2, 3)));
        assert_eq!(view.text(ElementId::Preview), Some("rgb(1, 2, 3)"));
        assert_eq!(view.last_notice(), Some(&Notice::ServerError(500)));
        assert_eq!(view.notices().len(), 1);
    }
}
