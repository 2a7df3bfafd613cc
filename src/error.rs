// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `espanel` library.
//!
//! This module provides the error hierarchy used across the library: value
//! validation, protocol communication and response parsing.
//!
//! Panels never surface these errors as panics. Every failure is also folded
//! into a user-facing [`Notice`](crate::view::Notice) or status line, and the
//! typed error is returned so programmatic callers can react.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An invalid hex color string was provided.
    #[error("invalid hex color: {0}")]
    InvalidHexColor(String),

    /// A threshold index is outside 0-4.
    #[error("threshold index {0} is out of range [0, 4]")]
    ThresholdIndex(usize),
}

/// Errors related to HTTP communication with the device.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed at the transport level.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The device answered with a non-success status code.
    #[error("device answered with HTTP {code}")]
    Status {
        /// The HTTP status code.
        code: u16,
    },
}

impl ProtocolError {
    /// Returns the HTTP status code if the device rejected the request.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code } => Some(*code),
            _ => None,
        }
    }
}

/// Errors related to parsing device responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Unexpected response format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::InvalidHexColor("#12".to_string());
        assert_eq!(err.to_string(), "invalid hex color: #12");

        let err = ValueError::ThresholdIndex(7);
        assert_eq!(err.to_string(), "threshold index 7 is out of range [0, 4]");
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::ThresholdIndex(5).into();
        assert!(matches!(err, Error::Value(ValueError::ThresholdIndex(5))));
    }

    #[test]
    fn protocol_status_code() {
        let err = ProtocolError::Status { code: 500 };
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(err.to_string(), "device answered with HTTP 500");

        let err = ProtocolError::InvalidAddress("host is required".to_string());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("limits".to_string());
        assert_eq!(err.to_string(), "missing field in response: limits");
    }
}
