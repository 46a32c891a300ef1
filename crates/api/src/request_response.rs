// Copyright (C) 2026 Shuttle Admin Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API boundary.
//!
//! Field names are camelCase on the wire to match the console client.

use serde::{Deserialize, Serialize};
use shuttle_admin_domain::{Principal, Section};

/// Represents whether a specific action is permitted.
///
/// This enum provides better type safety than raw booleans and serializes
/// to JSON as true/false for API compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Access {
    /// Returns true if access is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Creates an access flag from a boolean value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Allowed } else { Self::Denied }
    }
}

impl Serialize for Access {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bool(self.is_allowed())
    }
}

impl<'de> Deserialize<'de> for Access {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let b = bool::deserialize(deserializer)?;
        Ok(Self::from_bool(b))
    }
}

/// Capabilities for one console section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionCapabilities {
    /// The section.
    pub section: Section,
    /// Whether the section may be opened.
    pub can_view: Access,
    /// Whether records in the section may be changed.
    pub can_edit: Access,
}

/// API request to log in and create a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// The account login name.
    pub login_name: String,
    /// The account password.
    pub password: String,
}

/// API response for successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// The session token (opaque).
    pub session_token: String,
    /// Session expiration timestamp (ISO 8601).
    pub expires_at: String,
    /// The principal issued for the session.
    pub principal: Principal,
}

/// API response for the "who am I" endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoAmIResponse {
    /// The current principal.
    pub principal: Principal,
    /// Whether the principal holds the `SUPER_ADMIN` role.
    pub is_super_admin: bool,
    /// Per-section capabilities.
    pub sections: Vec<SectionCapabilities>,
}

/// How an authorize request combines its slugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckMode {
    /// Only the first slug is checked.
    Single,
    /// Any one slug suffices.
    Any,
    /// Every slug is required.
    All,
}

/// API request to check capabilities for the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeRequest {
    /// How to combine the slugs.
    pub mode: CheckMode,
    /// The capability slugs to check.
    #[serde(default)]
    pub slugs: Vec<String>,
}

/// API response for a capability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeResponse {
    /// Whether the check passed.
    pub granted: bool,
}
