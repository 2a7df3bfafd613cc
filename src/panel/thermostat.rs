// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat panel: threshold poller and settings editor.

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use crate::command::{Command, DataQuery, SettingsCommand};
use crate::error::{Error, ProtocolError};
use crate::protocol::Protocol;
use crate::response::DataResponse;
use crate::state::{RequestSequencer, ThermostatState};
use crate::types::ThresholdSet;
use crate::view::{Notice, View};

use super::PanelConfig;

/// Result of a successful poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The reading was applied to the panel.
    Applied,
    /// A newer poll had already been applied; the reading was discarded.
    Stale,
}

/// Controller for the temperature threshold panel.
///
/// The poller refreshes the temperature display on every call and fills the
/// threshold form only while the configured
/// [`GuardPolicy`](crate::state::GuardPolicy) allows it. The editor sends the
/// form to the device and refreshes immediately on success.
///
/// # Examples
///
/// ```no_run
/// use espanel_lib::panel::PanelBuilder;
/// use espanel_lib::view::{ElementId, MemoryView};
///
/// # async fn example() -> espanel_lib::Result<()> {
/// let panel = PanelBuilder::http("192.168.4.1").thermostat(MemoryView::new())?;
///
/// panel.poll().await?;
/// panel.edit_threshold(4, "35")?;
/// panel.save().await?;
///
/// panel.with_view(|view| {
///     println!("{:?}", view.text(ElementId::CurrentTemperature));
/// });
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ThermostatPanel<P, V> {
    protocol: P,
    config: PanelConfig,
    state: Mutex<ThermostatState>,
    view: Mutex<V>,
    sequencer: RequestSequencer,
}

impl<P: Protocol, V: View> ThermostatPanel<P, V> {
    /// Creates a panel with an empty form.
    pub fn new(protocol: P, view: V, config: PanelConfig) -> Self {
        Self {
            protocol,
            config,
            state: Mutex::new(ThermostatState::new(config.guard_policy())),
            view: Mutex::new(view),
            sequencer: RequestSequencer::new(),
        }
    }

    /// Returns the panel configuration.
    #[must_use]
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Returns a snapshot of the panel state.
    #[must_use]
    pub fn state(&self) -> ThermostatState {
        self.state.lock().clone()
    }

    /// Runs `f` with the view borrowed.
    pub fn with_view<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.view.lock())
    }

    /// Records user input into a threshold field.
    ///
    /// The view already shows what the user typed, so nothing is projected.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::ThresholdIndex` if `index` is not in 0-4.
    pub fn edit_threshold(&self, index: usize, text: impl Into<String>) -> crate::Result<()> {
        self.state.lock().edit_field(index, text)?;
        Ok(())
    }

    /// Reads device state and projects it.
    ///
    /// On failure the error is logged and the panel keeps showing its last
    /// state.
    ///
    /// # Errors
    ///
    /// Returns error if the device is unreachable, answers with a non-2xx
    /// status, or sends a malformed payload.
    pub async fn poll(&self) -> crate::Result<PollOutcome> {
        let ticket = self.sequencer.issue();

        let reading = match self.fetch_reading().await {
            Ok(reading) => reading,
            Err(err) => {
                tracing::error!(error = %err, ticket = ticket.value(), "Failed to poll device state");
                return Err(err);
            }
        };

        if !self.sequencer.try_apply(ticket) {
            tracing::debug!(
                ticket = ticket.value(),
                latest = self.sequencer.latest_issued().map(|t| t.value()),
                "Discarding stale poll result"
            );
            return Ok(PollOutcome::Stale);
        }

        let changes = self.state.lock().apply_reading(&reading);
        self.view.lock().render_all(&changes);
        Ok(PollOutcome::Applied)
    }

    async fn fetch_reading(&self) -> crate::Result<DataResponse> {
        let response = self
            .protocol
            .execute(&DataQuery.to_request())
            .await?
            .ensure_success()?;
        Ok(response.parse()?)
    }

    /// Sends the threshold form to the device.
    ///
    /// Fields are parsed leniently and unparsable ones are sent as `null`. On
    /// success a [`Notice::Saved`] is shown and the panel polls right away.
    /// A rejected save leaves the form as the user typed it.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Status` if the device rejects the settings and
    /// a transport error if it cannot be reached.
    pub async fn save(&self) -> crate::Result<()> {
        let (values, sent) = {
            let state = self.state.lock();
            (state.form_values(), state.fields().clone())
        };
        if !ThresholdSet::new(values).is_ascending() {
            tracing::warn!(?values, "Saving thresholds that are not strictly ascending");
        }

        let command = SettingsCommand::new(values);
        match self.protocol.execute(&command.to_request()).await {
            Ok(response) if response.is_success() => {
                tracing::info!(?values, "Thresholds saved");
                self.state.lock().mark_saved(&sent);
                self.view.lock().notify(&Notice::Saved);
                // poll logs its own failures
                let _ = self.poll().await;
                Ok(())
            }
            Ok(response) => {
                let code = response.status();
                tracing::error!(status = code, body = %response.body(), "Device rejected thresholds");
                self.view.lock().notify(&Notice::ServerError(code));
                Err(Error::Protocol(ProtocolError::Status { code }))
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to send thresholds");
                self.view.lock().notify(&Notice::ConnectionError);
                Err(err.into())
            }
        }
    }

    /// Polls immediately, then on every configured interval until `shutdown`
    /// turns `true` or its sender is dropped.
    ///
    /// Each poll completes before the next tick is awaited.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(self.config.poll_interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::debug!(interval = ?self.config.poll_interval(), "Starting poll loop");
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let _ = self.poll().await;
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }
        tracing::debug!("Poll loop stopped");
    }
}
