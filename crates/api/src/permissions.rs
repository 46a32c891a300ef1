// Copyright (C) 2026 Shuttle Admin Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Permission evaluation over a principal snapshot.
//!
//! Every query is total and side-effect free. The overrides are checked in
//! a fixed priority order before falling back to set membership:
//!
//! 1. no principal: deny
//! 2. `SUPER_ADMIN` role: grant
//! 3. `ALL` in the permission set: grant
//!
//! A `SUPER_ADMIN` can never be denied by a missing or stale permission set.

use shuttle_admin_domain::Principal;
use tracing::trace;

/// Answers capability queries against an optional principal.
///
/// The evaluator borrows a snapshot. Callers holding a
/// [`SessionStore`](crate::SessionStore) take the snapshot first so that
/// every query in a batch observes the same principal.
#[derive(Debug, Clone, Copy)]
pub struct PermissionEvaluator<'a> {
    principal: Option<&'a Principal>,
}

impl<'a> PermissionEvaluator<'a> {
    /// Creates an evaluator over the given principal, or over the
    /// unauthenticated state when `None`.
    #[must_use]
    pub const fn new(principal: Option<&'a Principal>) -> Self {
        Self { principal }
    }

    /// Creates an evaluator for the unauthenticated state.
    #[must_use]
    pub const fn unauthenticated() -> Self {
        Self { principal: None }
    }

    /// Returns the principal being evaluated.
    #[must_use]
    pub const fn principal(&self) -> Option<&'a Principal> {
        self.principal
    }

    /// Returns whether a principal exists and holds the `SUPER_ADMIN` role.
    #[must_use]
    pub fn is_super_admin(&self) -> bool {
        self.principal.is_some_and(Principal::is_super_admin)
    }

    /// Checks a single capability slug.
    ///
    /// Unknown and empty slugs are not errors; they are simply not granted
    /// unless an override applies.
    #[must_use]
    pub fn has_permission(&self, slug: &str) -> bool {
        let Some(principal) = self.principal else {
            trace!(slug, "No principal, denying");
            return false;
        };
        if overrides(principal) {
            return true;
        }

        let granted: bool = principal.grants(slug);
        trace!(principal = principal.id(), slug, granted, "Evaluated permission");
        granted
    }

    /// Checks that at least one of `slugs` is granted.
    ///
    /// An empty request is never satisfied by plain membership. The
    /// overrides still grant it because they are checked first.
    #[must_use]
    pub fn has_any_permission<S: AsRef<str>>(&self, slugs: &[S]) -> bool {
        let Some(principal) = self.principal else {
            trace!(requested = slugs.len(), "No principal, denying any-of");
            return false;
        };
        if overrides(principal) {
            return true;
        }

        let granted: bool = slugs.iter().any(|slug| principal.grants(slug.as_ref()));
        trace!(
            principal = principal.id(),
            requested = slugs.len(),
            granted,
            "Evaluated any-of permissions"
        );
        granted
    }

    /// Checks that every one of `slugs` is granted.
    ///
    /// Priority order:
    ///
    /// 1. no principal: deny
    /// 2. `SUPER_ADMIN` role: grant
    /// 3. empty permission set: deny, even for an empty request
    /// 4. `ALL` in the permission set: grant
    /// 5. empty request: deny
    /// 6. otherwise every requested slug must be a member
    ///
    /// Steps 3 and 5 make "all of nothing" false for anyone without an
    /// override, unlike the vacuous truth of [`Iterator::all`].
    #[must_use]
    pub fn has_all_permissions<S: AsRef<str>>(&self, slugs: &[S]) -> bool {
        let Some(principal) = self.principal else {
            trace!(requested = slugs.len(), "No principal, denying all-of");
            return false;
        };
        if principal.is_super_admin() {
            return true;
        }
        if principal.permissions().is_empty() {
            trace!(principal = principal.id(), "Empty permission set, denying all-of");
            return false;
        }
        if principal.has_wildcard() {
            return true;
        }
        if slugs.is_empty() {
            return false;
        }

        let granted: bool = slugs.iter().all(|slug| principal.grants(slug.as_ref()));
        trace!(
            principal = principal.id(),
            requested = slugs.len(),
            granted,
            "Evaluated all-of permissions"
        );
        granted
    }
}

fn overrides(principal: &Principal) -> bool {
    if principal.is_super_admin() {
        trace!(principal = principal.id(), "Granted by SUPER_ADMIN role");
        return true;
    }
    if principal.has_wildcard() {
        trace!(principal = principal.id(), "Granted by ALL wildcard");
        return true;
    }
    false
}

/// Checks a single slug against an optional principal.
#[must_use]
pub fn has_permission(principal: Option<&Principal>, slug: &str) -> bool {
    PermissionEvaluator::new(principal).has_permission(slug)
}

/// Checks that any of `slugs` is granted to an optional principal.
#[must_use]
pub fn has_any_permission<S: AsRef<str>>(principal: Option<&Principal>, slugs: &[S]) -> bool {
    PermissionEvaluator::new(principal).has_any_permission(slugs)
}

/// Checks that all of `slugs` are granted to an optional principal.
#[must_use]
pub fn has_all_permissions<S: AsRef<str>>(principal: Option<&Principal>, slugs: &[S]) -> bool {
    PermissionEvaluator::new(principal).has_all_permissions(slugs)
}

/// Returns whether an optional principal is a super administrator.
#[must_use]
pub fn is_super_admin(principal: Option<&Principal>) -> bool {
    PermissionEvaluator::new(principal).is_super_admin()
}
