// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `EsPanel` Lib - Client-side controllers for ESP32 thermostat and RGB lamp panels.
//!
//! This library drives the two small web panels served by the firmware over
//! its plain HTTP API, keeping an explicit state object and projecting every
//! change onto a [`View`].
//!
//! # Supported Features
//!
//! - **Thermostat**: Periodic `/api/data` polling, temperature coloring,
//!   threshold editing that survives polls, saving to `/api/settings`
//! - **Light**: Slider/picker/hex synchronization, `/get` initial load,
//!   `/set` apply and off
//! - **Ordering**: Late poll responses never overwrite newer ones
//!
//! # Quick Start
//!
//! ## Thermostat Panel
//!
//! ```no_run
//! use espanel_lib::PanelBuilder;
//! use espanel_lib::view::MemoryView;
//!
//! #[tokio::main]
//! async fn main() -> espanel_lib::Result<()> {
//!     let panel = PanelBuilder::http("192.168.4.1").thermostat(MemoryView::new())?;
//!
//!     panel.poll().await?;
//!     panel.edit_threshold(0, "19.5")?;
//!     panel.save().await?;
//!
//!     panel.with_view(|view| {
//!         println!("{:?}", view.text(espanel_lib::view::ElementId::CurrentTemperature));
//!     });
//!     Ok(())
//! }
//! ```
//!
//! ## Light Panel
//!
//! ```no_run
//! use espanel_lib::{PanelBuilder, RgbColor};
//! use espanel_lib::view::MemoryView;
//!
//! #[tokio::main]
//! async fn main() -> espanel_lib::Result<()> {
//!     let panel = PanelBuilder::http("192.168.4.2").light(MemoryView::new())?;
//!
//!     panel.load_initial().await?;
//!     panel.show_color(RgbColor::from_hex("#FF8000")?);
//!     panel.apply().await?;
//!     Ok(())
//! }
//! ```

pub mod command;
pub mod error;
pub mod panel;
pub mod protocol;
pub mod response;
pub mod state;
pub mod types;
pub mod view;

pub use command::{ColorQuery, Command, DataQuery, SetColorCommand, SettingsCommand};
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
pub use panel::{LightPanel, PanelBuilder, PanelConfig, PollOutcome, ThermostatPanel};
pub use protocol::{HttpClient, HttpConfig, Protocol};
pub use response::{ColorResponse, DataResponse, SetColorResponse};
pub use state::{GuardPolicy, LightState, StateChange, ThermostatState};
pub use types::{Channel, DisplayColor, LedColor, RgbColor, ThresholdSet};
pub use view::{ElementId, MemoryView, Notice, View};
