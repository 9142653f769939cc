// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Unified error types for the thinpool-report library.
//!
//! Every failure that can happen while talking to a management API, or
//! while loading the host inventory, is expressed as an [`enum@Error`].
//! The aggregator records these per host instead of aborting the run.
//!
//! # Example
//!
//! ```rust,no_run
//! use thinpool_report::{Error, Result};
//! use thinpool_report::inventory::HostEntry;
//!
//! fn parse() -> Result<HostEntry> {
//!     "10.0.0.11=pve1".parse::<HostEntry>()
//! }
//! ```

use thiserror::Error;

/// The main error type for thinpool-report operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Connection, TLS or timeout failure while talking to a host.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expected.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API answered with a non-success HTTP status.
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// The ticket endpoint answered but did not hand out a session.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// A host inventory line could not be parsed.
    #[error("Invalid host entry {line:?}: {reason}")]
    InvalidHostEntry { line: String, reason: String },

    /// An endpoint URL could not be built for a host.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// An I/O error occurred, e.g. while reading a hostfile.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Short classification used in failure summaries and JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Decode(_) => "decode",
            Self::HttpStatus { .. } => "http_status",
            Self::AuthenticationFailed(_) => "authentication",
            Self::InvalidHostEntry { .. } => "invalid_host",
            Self::InvalidUrl(_) => "invalid_url",
            Self::Io(_) => "io",
        }
    }
}

/// A specialized Result type for thinpool-report operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::HttpStatus {
            status: 401,
            url: "https://10.0.0.1:8006/api2/json/access/ticket".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP 401 from https://10.0.0.1:8006/api2/json/access/ticket"
        );

        let err = Error::AuthenticationFailed("no ticket in response".to_string());
        assert_eq!(
            err.to_string(),
            "Authentication failed: no ticket in response"
        );

        let err = Error::InvalidHostEntry {
            line: "10.0.0.1".to_string(),
            reason: "missing node name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid host entry \"10.0.0.1\": missing node name"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Decode(_)));
        assert_eq!(err.kind(), "decode");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.kind(), "io");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
