// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB lamp commands.

use crate::command::Command;
use crate::protocol::Method;
use crate::types::{Channel, RgbColor};

/// Reads the stored lamp color from `/get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorQuery;

impl Command for ColorQuery {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> &'static str {
        "/get"
    }
}

/// Sets the lamp color via `GET /set?r=..&g=..&b=..`.
///
/// The device clamps each channel to 0-255, persists the color and replies
/// with a plain text status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetColorCommand {
    color: RgbColor,
}

impl SetColorCommand {
    /// Creates a command for the given color.
    #[must_use]
    pub const fn new(color: RgbColor) -> Self {
        Self { color }
    }

    /// Returns the color that will be sent.
    #[must_use]
    pub const fn color(&self) -> RgbColor {
        self.color
    }
}

impl Command for SetColorCommand {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> &'static str {
        "/set"
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        Channel::ALL
            .iter()
            .map(|c| (c.query_key(), self.color.channel(*c).to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_query_endpoint() {
        assert_eq!(ColorQuery.method(), Method::Get);
        assert_eq!(ColorQuery.path(), "/get");
    }

    #[test]
    fn set_color_query_order() {
        let cmd = SetColorCommand::new(RgbColor::new(0, 128, 255));
        assert_eq!(
            cmd.query(),
            vec![
                ("r", "0".to_string()),
                ("g", "128".to_string()),
                ("b", "255".to_string()),
            ]
        );
        assert_eq!(cmd.color(), RgbColor::new(0, 128, 255));
    }
}
