// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light panel: slider/picker color sync and lamp commands.

use parking_lot::Mutex;

use crate::command::{ColorQuery, Command, SetColorCommand};
use crate::protocol::Protocol;
use crate::response::{ColorResponse, SetColorResponse};
use crate::state::{LightState, StateChange};
use crate::types::{Channel, RgbColor};
use crate::view::View;

/// Controller for the RGB light panel.
///
/// The sliders are the canonical color. Picker input and device state both
/// enter through them, so the labels, swatch, hex label and picker always
/// agree.
///
/// # Examples
///
/// ```no_run
/// use espanel_lib::panel::PanelBuilder;
/// use espanel_lib::types::Channel;
/// use espanel_lib::view::MemoryView;
///
/// # async fn example() -> espanel_lib::Result<()> {
/// let panel = PanelBuilder::http("192.168.4.1").light(MemoryView::new())?;
///
/// panel.load_initial().await?;
/// panel.slider_input(Channel::Red, 200);
/// panel.picker_input("#00FF88");
/// panel.apply().await?;
/// panel.off().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct LightPanel<P, V> {
    protocol: P,
    state: Mutex<LightState>,
    view: Mutex<V>,
}

impl<P: Protocol, V: View> LightPanel<P, V> {
    /// Status shown while a color is being sent.
    pub const STATUS_SENDING: &'static str = "Sending...";
    /// Status shown when the lamp cannot be reached.
    pub const STATUS_CONNECTION_ERROR: &'static str = "Connection error";
    /// Status shown when the initial color cannot be read.
    pub const STATUS_LOAD_FAILED: &'static str = "Failed to retrieve state";

    /// Creates a panel with the sliders at zero.
    pub fn new(protocol: P, view: V) -> Self {
        Self::with_state(protocol, view, LightState::new())
    }

    /// Creates a panel from an existing state, e.g. sliders restored by the
    /// front end.
    pub fn with_state(protocol: P, view: V, state: LightState) -> Self {
        Self {
            protocol,
            state: Mutex::new(state),
            view: Mutex::new(view),
        }
    }

    /// Returns a snapshot of the panel state.
    #[must_use]
    pub fn state(&self) -> LightState {
        self.state.lock().clone()
    }

    /// Runs `f` with the view borrowed.
    pub fn with_view<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.view.lock())
    }

    fn project(&self, changes: &[StateChange]) {
        self.view.lock().render_all(changes);
    }

    fn set_status(&self, text: &str) {
        let change = self.state.lock().set_status(text);
        self.project(&[change]);
    }

    /// Handles the user dragging a slider.
    pub fn slider_input(&self, channel: Channel, value: u8) {
        let changes = self.state.lock().slider_input(channel, value);
        self.project(&changes);
    }

    /// Handles the user choosing a color in the picker.
    ///
    /// Malformed values resolve to black without surfacing an error.
    pub fn picker_input(&self, hex: &str) {
        let changes = self.state.lock().picker_input(hex);
        self.project(&changes);
    }

    /// Moves the sliders to `color` and re-renders every representation.
    pub fn show_color(&self, color: RgbColor) {
        let changes = self.state.lock().set_sliders(color);
        self.project(&changes);
    }

    /// Sends the current slider color to the lamp.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp cannot be reached.
    pub async fn apply(&self) -> crate::Result<SetColorResponse> {
        let color = self.state.lock().sliders();
        self.send_color(color).await
    }

    /// Turns the lamp off: shows black and sends it.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp cannot be reached.
    pub async fn off(&self) -> crate::Result<SetColorResponse> {
        self.show_color(RgbColor::black());
        self.send_color(RgbColor::black()).await
    }

    /// Sends a color to the lamp and shows the device's reply as status.
    ///
    /// Any HTTP status counts as a reply: the trimmed body (or `"OK"` when
    /// empty) becomes the status line.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp cannot be reached.
    pub async fn send_color(&self, color: RgbColor) -> crate::Result<SetColorResponse> {
        self.set_status(Self::STATUS_SENDING);

        let command = SetColorCommand::new(color);
        match self.protocol.execute(&command.to_request()).await {
            Ok(response) => {
                let reply = SetColorResponse::new(response.body());
                if let Some(applied) = reply.applied_color().filter(|c| *c != color) {
                    tracing::debug!(sent = %color, %applied, "Lamp adjusted the requested color");
                }
                self.set_status(reply.status_text());
                Ok(reply)
            }
            Err(err) => {
                tracing::error!(error = %err, %color, "Failed to send color");
                self.set_status(Self::STATUS_CONNECTION_ERROR);
                Err(err.into())
            }
        }
    }

    /// Reads the lamp's stored color and syncs the sliders from it.
    ///
    /// If the reply lacks numeric `r`, `g` and `b` fields, the current
    /// sliders are rendered instead. Returns the color adopted from the
    /// device, if any.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp cannot be reached or the reply is not JSON.
    pub async fn load_initial(&self) -> crate::Result<Option<RgbColor>> {
        let loaded = match self.protocol.execute(&ColorQuery.to_request()).await {
            Ok(response) => ColorResponse::from_json(response.body()).map_err(Into::into),
            Err(err) => Err(crate::Error::from(err)),
        };

        match loaded {
            Ok(reply) => {
                let color = reply.channels();
                let changes = {
                    let mut state = self.state.lock();
                    match color {
                        Some(color) => state.set_sliders(color),
                        None => state.render_from_sliders(),
                    }
                };
                self.project(&changes);
                Ok(color)
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to load lamp color");
                self.set_status(Self::STATUS_LOAD_FAILED);
                Err(err)
            }
        }
    }
}
