// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Protocol implementation for communicating with panel devices.
//!
//! Panel devices speak plain JSON-over-HTTP. The [`Protocol`] trait is the
//! seam between the panels and the transport: [`HttpClient`] is the real
//! implementation, and tests substitute their own.
//!
//! A [`Protocol`] only fails on transport errors. Any HTTP status is returned
//! as a [`Response`] so callers can decide what a non-2xx answer means for
//! them.

mod http;

pub use http::{HttpClient, HttpConfig};

use crate::error::{ParseError, ProtocolError};

/// HTTP method of a device request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
}

/// A transport-level request built from a [`Command`](crate::command::Command).
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// The HTTP method.
    pub method: Method,
    /// The endpoint path.
    pub path: &'static str,
    /// Query parameters, in order.
    pub query: Vec<(&'static str, String)>,
    /// JSON body, if any.
    pub body: Option<serde_json::Value>,
}

impl Request {
    /// Returns the path with the URL-encoded query string appended.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.to_string();
        }
        let query = self
            .query
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }
}

/// Response from a device endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    body: String,
}

impl Response {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns `true` for a 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Turns a non-2xx response into [`ProtocolError::Status`].
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Status` if the status is not 2xx.
    pub fn ensure_success(self) -> Result<Self, ProtocolError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ProtocolError::Status { code: self.status })
        }
    }

    /// Parses the body as JSON into a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON cannot be parsed into the target type.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// Trait for transports that can execute device requests.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Executes a request and returns the device response.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` only if the request could not be delivered or
    /// the response could not be read. Non-2xx statuses are not errors here.
    async fn execute(&self, request: &Request) -> Result<Response, ProtocolError>;
}
