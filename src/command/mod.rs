// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device command definitions.
//!
//! This module provides typed representations of the four device endpoints.
//!
//! | Command Type | Endpoint | Purpose |
//! |-------------|----------|---------|
//! | [`DataQuery`] | `GET /api/data` | Read temperature and thresholds |
//! | [`SettingsCommand`] | `POST /api/settings` | Replace the thresholds |
//! | [`ColorQuery`] | `GET /get` | Read the lamp color |
//! | [`SetColorCommand`] | `GET /set?r=&g=&b=` | Set the lamp color |
//!
//! # Examples
//!
//! ```
//! use espanel_lib::command::{Command, SetColorCommand};
//! use espanel_lib::protocol::Method;
//! use espanel_lib::types::RgbColor;
//!
//! let cmd = SetColorCommand::new(RgbColor::new(255, 128, 0));
//! assert_eq!(cmd.method(), Method::Get);
//! assert_eq!(cmd.path(), "/set");
//! assert_eq!(cmd.to_request().path_and_query(), "/set?r=255&g=128&b=0");
//! ```

mod light;
mod thermostat;

pub use light::{ColorQuery, SetColorCommand};
pub use thermostat::{DataQuery, SettingsCommand};

use crate::protocol::{Method, Request};

/// A request that can be sent to a panel device.
pub trait Command {
    /// Returns the HTTP method.
    fn method(&self) -> Method;

    /// Returns the endpoint path, starting with `/`.
    fn path(&self) -> &'static str;

    /// Returns the query parameters, in order.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Returns the JSON body, if any.
    fn body(&self) -> Option<serde_json::Value> {
        None
    }

    /// Builds the transport-level request for this command.
    fn to_request(&self) -> Request {
        Request {
            method: self.method(),
            path: self.path(),
            query: self.query(),
            body: self.body(),
        }
    }
}
