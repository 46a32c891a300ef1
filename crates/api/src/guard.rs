// Copyright (C) 2026 Shuttle Admin Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Route gating for protected views and endpoints.

use serde::{Deserialize, Serialize};
use shuttle_admin_domain::{PermissionSlug, Principal};
use tracing::debug;

use crate::error::AuthError;
use crate::permissions::PermissionEvaluator;

/// What a protected route demands of the principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "slugs", rename_all = "snake_case")]
pub enum RouteRequirement {
    /// Any authenticated principal.
    Authenticated,
    /// A single capability.
    Permission(PermissionSlug),
    /// At least one of the capabilities.
    AnyOf(Vec<PermissionSlug>),
    /// Every one of the capabilities.
    AllOf(Vec<PermissionSlug>),
    /// The `SUPER_ADMIN` role.
    SuperAdmin,
}

impl RouteRequirement {
    /// Returns whether the evaluator's principal satisfies this requirement.
    #[must_use]
    pub fn is_satisfied_by(&self, evaluator: &PermissionEvaluator<'_>) -> bool {
        match self {
            Self::Authenticated => evaluator.principal().is_some(),
            Self::Permission(slug) => evaluator.has_permission(slug.as_str()),
            Self::AnyOf(slugs) => evaluator.has_any_permission(slugs),
            Self::AllOf(slugs) => evaluator.has_all_permissions(slugs),
            Self::SuperAdmin => evaluator.is_super_admin(),
        }
    }

    /// Describes the requirement for error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Authenticated => String::from("an authenticated session"),
            Self::Permission(slug) => format!("permission {slug}"),
            Self::AnyOf(slugs) => format!("any of [{}]", join(slugs)),
            Self::AllOf(slugs) => format!("all of [{}]", join(slugs)),
            Self::SuperAdmin => String::from("the SUPER_ADMIN role"),
        }
    }
}

fn join(slugs: &[PermissionSlug]) -> String {
    slugs
        .iter()
        .map(PermissionSlug::as_str)
        .collect::<Vec<&str>>()
        .join(", ")
}

/// The outcome of guarding a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardDecision {
    /// Render the protected view.
    Render,
    /// No session: send the user to the login screen.
    RedirectToLogin,
    /// Authenticated but lacking the capability.
    AccessDenied,
}

/// Decides whether a protected view may render.
#[must_use]
pub fn evaluate_route(principal: Option<&Principal>, requirement: &RouteRequirement) -> GuardDecision {
    if principal.is_none() {
        return GuardDecision::RedirectToLogin;
    }

    let evaluator: PermissionEvaluator<'_> = PermissionEvaluator::new(principal);
    let decision: GuardDecision = if requirement.is_satisfied_by(&evaluator) {
        GuardDecision::Render
    } else {
        GuardDecision::AccessDenied
    };
    debug!(?requirement, ?decision, "Evaluated route guard");
    decision
}

/// Enforces a requirement for a server-side action.
///
/// # Errors
///
/// Returns `AuthenticationFailed` with no principal and `Unauthorized` when
/// the requirement is not met.
pub fn authorize(
    principal: Option<&Principal>,
    requirement: &RouteRequirement,
    action: &str,
) -> Result<(), AuthError> {
    match evaluate_route(principal, requirement) {
        GuardDecision::Render => Ok(()),
        GuardDecision::RedirectToLogin => Err(AuthError::authentication_failed("Not logged in")),
        GuardDecision::AccessDenied => Err(AuthError::Unauthorized {
            action: action.to_string(),
            required: requirement.describe(),
        }),
    }
}
