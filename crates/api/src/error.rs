// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the data fetch layer.

use thiserror::Error;

/// Failures talking to the upstream REST service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, timeout, TLS, body read).
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body could not be decoded.
    #[error("Could not decode response from {url}: {message}")]
    Decode { url: String, message: String },

    /// The client was configured with unusable settings.
    #[error("Invalid client configuration: {0}")]
    InvalidConfiguration(String),

    /// Login was rejected or returned no usable token.
    #[error("Authentication failed: {0}")]
    Authentication(String),
}

impl ApiError {
    /// The upstream HTTP status, if one was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the upstream reported that the resource does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}
