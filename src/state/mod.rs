// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel state management types.
//!
//! Each panel owns an explicit in-memory state object instead of treating the
//! page as its store. State objects are mutated by user input and device
//! responses and report what changed as a list of [`StateChange`]s, which the
//! panel then projects onto its [`View`](crate::view::View).
//!
//! - [`ThermostatState`] - Temperature reading and the threshold form
//! - [`LightState`] - Slider channels and their derived representations
//! - [`RequestSequencer`] - Orders poll completions so stale results are dropped
//!
//! # Examples
//!
//! ```
//! use espanel_lib::response::DataResponse;
//! use espanel_lib::state::{GuardPolicy, StateChange, ThermostatState};
//! use espanel_lib::types::ThresholdSet;
//!
//! let mut state = ThermostatState::new(GuardPolicy::FirstLoad);
//! let reading = DataResponse::new(25.0, ThresholdSet::FACTORY);
//!
//! let changes = state.apply_reading(&reading);
//! assert!(changes.contains(&StateChange::ThresholdField {
//!     index: 0,
//!     text: "20.0".to_string(),
//! }));
//! ```

mod light_state;
mod sequencer;
mod state_change;
mod thermostat_state;

pub use light_state::LightState;
pub use sequencer::{RequestSequencer, Ticket};
pub use state_change::StateChange;
pub use thermostat_state::{GuardPolicy, ThermostatState};
