// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for device endpoints.
//!
//! - [`DataResponse`] - Strict parse of the thermostat `/api/data` payload
//! - [`ColorResponse`] - Lenient parse of the lamp `/get` payload
//! - [`SetColorResponse`] - Plain text status line from `/set`

mod color;
mod data;

pub use color::{ColorResponse, SetColorResponse};
pub use data::DataResponse;
