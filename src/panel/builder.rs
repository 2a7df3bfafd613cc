// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP panel builder.

use std::time::Duration;

use crate::error::Error;
use crate::protocol::{HttpClient, HttpConfig};
use crate::state::GuardPolicy;
use crate::view::View;

use super::{LightPanel, PanelConfig, ThermostatPanel};

/// Builder for panels talking to a device over HTTP.
///
/// This builder can be created in two ways:
/// - `PanelBuilder::http("host")` - Simple host string
/// - `PanelBuilder::new(HttpConfig::new("host").with_port(8080))` - Advanced configuration
///
/// # Examples
///
/// ```no_run
/// use espanel_lib::panel::PanelBuilder;
/// use espanel_lib::state::GuardPolicy;
/// use espanel_lib::view::MemoryView;
/// use std::time::Duration;
///
/// # fn example() -> espanel_lib::Result<()> {
/// let thermostat = PanelBuilder::http("192.168.4.1")
///     .with_poll_interval(Duration::from_secs(2))
///     .with_guard_policy(GuardPolicy::LocalEdits)
///     .thermostat(MemoryView::new())?;
///
/// let light = PanelBuilder::http("192.168.4.2").light(MemoryView::new())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PanelBuilder {
    http: HttpConfig,
    panel: PanelConfig,
}

impl PanelBuilder {
    /// Creates a new builder with the specified HTTP configuration.
    #[must_use]
    pub fn new(http: HttpConfig) -> Self {
        Self {
            http,
            panel: PanelConfig::default(),
        }
    }

    /// Creates a builder for a device at `host`.
    #[must_use]
    pub fn http(host: impl Into<String>) -> Self {
        Self::new(HttpConfig::new(host))
    }

    /// Replaces the panel configuration.
    #[must_use]
    pub fn with_config(mut self, config: PanelConfig) -> Self {
        self.panel = config;
        self
    }

    /// Sets the thermostat poll interval.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.panel = self.panel.with_poll_interval(interval);
        self
    }

    /// Sets how the thermostat protects user edits from polls.
    #[must_use]
    pub fn with_guard_policy(mut self, policy: GuardPolicy) -> Self {
        self.panel = self.panel.with_guard_policy(policy);
        self
    }

    /// Returns the HTTP configuration.
    #[must_use]
    pub fn http_config(&self) -> &HttpConfig {
        &self.http
    }

    /// Returns the panel configuration.
    #[must_use]
    pub fn panel_config(&self) -> &PanelConfig {
        &self.panel
    }

    /// Builds a thermostat panel.
    ///
    /// No request is made; call [`ThermostatPanel::poll`] or
    /// [`ThermostatPanel::run`] to start reading the device.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be created.
    pub fn thermostat<V: View>(self, view: V) -> Result<ThermostatPanel<HttpClient, V>, Error> {
        let client = self.http.into_client()?;
        tracing::debug!(base_url = client.base_url(), "Built thermostat panel");
        Ok(ThermostatPanel::new(client, view, self.panel))
    }

    /// Builds a light panel.
    ///
    /// No request is made; call [`LightPanel::load_initial`] to sync the
    /// sliders from the lamp.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be created.
    pub fn light<V: View>(self, view: V) -> Result<LightPanel<HttpClient, V>, Error> {
        let client = self.http.into_client()?;
        tracing::debug!(base_url = client.base_url(), "Built light panel");
        Ok(LightPanel::new(client, view))
    }
}
