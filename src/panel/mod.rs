// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel controllers.
//!
//! A panel couples a [`Protocol`](crate::protocol::Protocol), an explicit
//! state object and a [`View`](crate::view::View):
//!
//! - [`ThermostatPanel`] - Polls `/api/data`, edits and saves thresholds
//! - [`LightPanel`] - Loads, edits and sends the lamp color
//!
//! Device responses and user input mutate the state. The resulting
//! [`StateChange`](crate::state::StateChange)s are projected onto the view.
//! No lock is held across a network call.
//!
//! # Examples
//!
//! ```no_run
//! use espanel_lib::panel::PanelBuilder;
//! use espanel_lib::view::MemoryView;
//! use tokio::sync::watch;
//!
//! # async fn example() -> espanel_lib::Result<()> {
//! let panel = PanelBuilder::http("192.168.4.1").thermostat(MemoryView::new())?;
//!
//! let (stop, shutdown) = watch::channel(false);
//! let stopper = async {
//!     tokio::time::sleep(std::time::Duration::from_secs(60)).await;
//!     let _ = stop.send(true);
//! };
//! tokio::join!(panel.run(shutdown), stopper);
//! # Ok(())
//! # }
//! ```

mod builder;
mod config;
mod light;
mod thermostat;

pub use builder::PanelBuilder;
pub use config::PanelConfig;
pub use light::LightPanel;
pub use thermostat::{PollOutcome, ThermostatPanel};
