// Copyright (C) 2026 Shuttle Admin Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::slug::{PermissionSlug, RoleSlug};

/// The authenticated actor whose permissions are evaluated.
///
/// A principal is built once per session from the server-issued profile and
/// is never mutated afterwards. A role or permission change means issuing a
/// whole new `Principal`.
///
/// The permission collection is a set: duplicates supplied at construction
/// or in a deserialized profile collapse, and order is immaterial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    id: String,
    display_name: String,
    role_slug: RoleSlug,
    permissions: BTreeSet<PermissionSlug>,
}

impl Principal {
    /// Creates a new principal.
    ///
    /// # Arguments
    ///
    /// * `id` - The stable account identifier
    /// * `display_name` - The human-readable name
    /// * `role_slug` - The principal's role
    /// * `permissions` - The granted capability slugs
    #[must_use]
    pub fn new<I, P>(id: &str, display_name: &str, role_slug: RoleSlug, permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PermissionSlug>,
    {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            role_slug,
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the account identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the role slug.
    #[must_use]
    pub const fn role_slug(&self) -> &RoleSlug {
        &self.role_slug
    }

    /// Returns the granted permission set.
    #[must_use]
    pub const fn permissions(&self) -> &BTreeSet<PermissionSlug> {
        &self.permissions
    }

    /// Returns whether the role is the reserved super administrator role.
    #[must_use]
    pub fn is_super_admin(&self) -> bool {
        self.role_slug.is_super_admin()
    }

    /// Returns whether the permission set contains the `ALL` wildcard.
    #[must_use]
    pub fn has_wildcard(&self) -> bool {
        self.permissions.contains(PermissionSlug::ALL)
    }

    /// Returns whether `slug` is literally present in the permission set.
    ///
    /// This is raw membership only; it ignores the role and wildcard
    /// overrides.
    #[must_use]
    pub fn grants(&self, slug: &str) -> bool {
        self.permissions.contains(slug)
    }
}
