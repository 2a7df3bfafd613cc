// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel configuration.

use std::time::Duration;

use crate::state::GuardPolicy;

/// Behavioral settings shared by the panels.
///
/// # Examples
///
/// ```
/// use espanel_lib::panel::PanelConfig;
/// use espanel_lib::state::GuardPolicy;
///
/// let config = PanelConfig::default()
///     .with_poll_interval(PanelConfig::SLOW_POLL_INTERVAL)
///     .with_guard_policy(GuardPolicy::LocalEdits);
///
/// assert_eq!(config.poll_interval().as_millis(), 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    poll_interval: Duration,
    guard_policy: GuardPolicy,
}

impl PanelConfig {
    /// Default poll interval.
    pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1200);
    /// Slower poll interval for devices that struggle with the default rate.
    pub const SLOW_POLL_INTERVAL: Duration = Duration::from_secs(2);

    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            poll_interval: Self::DEFAULT_POLL_INTERVAL,
            guard_policy: GuardPolicy::default(),
        }
    }

    /// Sets the interval between polls.
    ///
    /// A zero interval is replaced with one millisecond.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval.max(Duration::from_millis(1));
        self
    }

    /// Sets the rule protecting unsaved threshold edits.
    #[must_use]
    pub fn with_guard_policy(mut self, policy: GuardPolicy) -> Self {
        self.guard_policy = policy;
        self
    }

    /// Returns the interval between polls.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Returns the guard policy.
    #[must_use]
    pub fn guard_policy(&self) -> GuardPolicy {
        self.guard_policy
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::new()
    }
}
