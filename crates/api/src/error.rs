// Copyright (C) 2026 Shuttle Admin Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.
//!
//! Permission queries never produce these errors. They come from the
//! authentication flow and from server-side enforcement of route
//! requirements.

use thiserror::Error;

/// Authentication and authorization errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    #[error("Unauthorized: '{action}' requires {required}")]
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// A description of the requirement that was not met.
        required: String,
    },
}

impl AuthError {
    pub(crate) fn authentication_failed(reason: &str) -> Self {
        Self::AuthenticationFailed {
            reason: reason.to_string(),
        }
    }
}

/// Errors raised while loading the account directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The directory file could not be read.
    #[error("Failed to read account directory: {0}")]
    Io(#[from] std::io::Error),
    /// The directory file is not valid JSON.
    #[error("Failed to parse account directory: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two accounts share a login name.
    #[error("Duplicate login name in account directory: '{0}'")]
    DuplicateLogin(String),
}
