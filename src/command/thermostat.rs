// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat commands.

use serde_json::json;

use crate::command::Command;
use crate::protocol::Method;
use crate::types::THRESHOLD_COUNT;

/// Reads the current temperature and thresholds from `/api/data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataQuery;

impl Command for DataQuery {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> &'static str {
        "/api/data"
    }
}

/// Replaces all five thresholds via `POST /api/settings`.
///
/// Values are sent exactly as given. A `NaN` from unparsable form input is
/// serialized as JSON `null`, which the device rejects or ignores.
///
/// # Examples
///
/// ```
/// use espanel_lib::command::{Command, SettingsCommand};
///
/// let cmd = SettingsCommand::new([20.0, 22.0, 25.0, 28.0, f64::NAN]);
/// assert_eq!(
///     cmd.body().unwrap().to_string(),
///     r#"{"limits":[20.0,22.0,25.0,28.0,null]}"#
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingsCommand {
    limits: [f64; THRESHOLD_COUNT],
}

impl SettingsCommand {
    /// Creates a settings command from raw (possibly `NaN`) values.
    #[must_use]
    pub const fn new(limits: [f64; THRESHOLD_COUNT]) -> Self {
        Self { limits }
    }

    /// Returns the values that will be sent.
    #[must_use]
    pub const fn limits(&self) -> &[f64; THRESHOLD_COUNT] {
        &self.limits
    }
}

impl Command for SettingsCommand {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> &'static str {
        "/api/settings"
    }

    fn body(&self) -> Option<serde_json::Value> {
        Some(json!({ "limits": self.limits }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_query_endpoint() {
        assert_eq!(DataQuery.method(), Method::Get);
        assert_eq!(DataQuery.path(), "/api/data");
    }

    #[test]
    fn settings_body_shape() {
        let cmd = SettingsCommand::new([10.0, 20.0, 30.0, 40.0, 50.0]);
        assert_eq!(cmd.method(), Method::Post);
        assert_eq!(cmd.path(), "/api/settings");
        assert_eq!(
            cmd.body(),
            Some(json!({ "limits": [10.0, 20.0, 30.0, 40.0, 50.0] }))
        );
    }

    #[test]
    fn settings_nan_becomes_null() {
        let cmd = SettingsCommand::new([f64::NAN, 1.0, 2.0, 3.0, 4.0]);
        let body = cmd.body().unwrap();
        assert!(body["limits"][0].is_null());
        assert_eq!(body["limits"][1], json!(1.0));
    }
}
