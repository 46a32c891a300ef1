// Copyright (C) 2026 Shuttle Admin Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The current-principal slot.
//!
//! One writer (the login/logout flow) and many readers (every permission
//! check). Writes replace the whole principal with a single pointer swap, so
//! readers observe either a complete principal or none.

use std::sync::Arc;

use parking_lot::RwLock;
use shuttle_admin_domain::Principal;
use tracing::{debug, info};

use crate::permissions::PermissionEvaluator;

/// Single-slot, replace-only holder of the current principal.
#[derive(Debug, Default)]
pub struct SessionStore {
    slot: RwLock<Option<Arc<Principal>>>,
}

impl SessionStore {
    /// Creates an empty (unauthenticated) store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the current principal.
    #[must_use]
    pub fn current(&self) -> Option<Arc<Principal>> {
        self.slot.read().clone()
    }

    /// Returns whether a principal is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.slot.read().is_some()
    }

    /// Installs a new principal, returning the one it replaced.
    pub fn replace(&self, principal: Principal) -> Option<Arc<Principal>> {
        let next: Arc<Principal> = Arc::new(principal);
        info!(
            principal = next.id(),
            role = %next.role_slug(),
            "Session principal replaced"
        );
        self.slot.write().replace(next)
    }

    /// Discards the current principal, returning it if there was one.
    pub fn clear(&self) -> Option<Arc<Principal>> {
        let previous: Option<Arc<Principal>> = self.slot.write().take();
        if let Some(principal) = &previous {
            info!(principal = principal.id(), "Session principal cleared");
        } else {
            debug!("Session clear requested with no principal present");
        }
        previous
    }

    /// Runs `f` against an evaluator over one snapshot of the principal.
    pub fn evaluate<R>(&self, f: impl FnOnce(&PermissionEvaluator<'_>) -> R) -> R {
        let snapshot: Option<Arc<Principal>> = self.current();
        let evaluator: PermissionEvaluator<'_> = PermissionEvaluator::new(snapshot.as_deref());
        f(&evaluator)
    }

    /// See [`PermissionEvaluator::has_permission`].
    #[must_use]
    pub fn has_permission(&self, slug: &str) -> bool {
        self.evaluate(|evaluator| evaluator.has_permission(slug))
    }

    /// See [`PermissionEvaluator::has_any_permission`].
    #[must_use]
    pub fn has_any_permission<S: AsRef<str>>(&self, slugs: &[S]) -> bool {
        self.evaluate(|evaluator| evaluator.has_any_permission(slugs))
    }

    /// See [`PermissionEvaluator::has_all_permissions`].
    #[must_use]
    pub fn has_all_permissions<S: AsRef<str>>(&self, slugs: &[S]) -> bool {
        self.evaluate(|evaluator| evaluator.has_all_permissions(slugs))
    }

    /// See [`PermissionEvaluator::is_super_admin`].
    #[must_use]
    pub fn is_super_admin(&self) -> bool {
        self.evaluate(|evaluator| evaluator.is_super_admin())
    }
}
