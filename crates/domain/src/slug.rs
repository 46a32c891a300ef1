// Copyright (C) 2026 Shuttle Admin Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Opaque slug newtypes for roles and permissions.
//!
//! Slugs are matched by exact string equality. No validation, trimming or
//! case folding is applied: an unknown or empty slug is a legal value that
//! simply never matches anything it is not literally equal to.

use serde::{Deserialize, Serialize};

/// Identifier of a principal's role.
///
/// The value [`RoleSlug::SUPER_ADMIN`] is reserved and carries universal
/// capability.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSlug(String);

impl RoleSlug {
    /// The reserved super administrator role.
    pub const SUPER_ADMIN: &'static str = "SUPER_ADMIN";

    /// Creates a role slug from any string.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Creates the reserved super administrator role slug.
    #[must_use]
    pub fn super_admin() -> Self {
        Self::new(Self::SUPER_ADMIN)
    }

    /// Returns the slug value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether this is the reserved super administrator role.
    #[must_use]
    pub fn is_super_admin(&self) -> bool {
        self.0 == Self::SUPER_ADMIN
    }
}

impl std::fmt::Display for RoleSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoleSlug {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RoleSlug {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Identifier of a single granted or requested capability.
///
/// The value [`PermissionSlug::ALL`] is reserved: when it appears in a
/// principal's permission set it grants every capability.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSlug(String);

impl PermissionSlug {
    /// The reserved wildcard permission.
    pub const ALL: &'static str = "ALL";

    /// Creates a permission slug from any string.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Creates the reserved wildcard slug.
    #[must_use]
    pub fn wildcard() -> Self {
        Self::new(Self::ALL)
    }

    /// Returns the slug value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether this is the reserved wildcard slug.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.0 == Self::ALL
    }
}

impl std::fmt::Display for PermissionSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PermissionSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for PermissionSlug {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PermissionSlug {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PermissionSlug {
    fn from(value: String) -> Self {
        Self(value)
    }
}
