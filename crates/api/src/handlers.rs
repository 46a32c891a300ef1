// Copyright (C) 2026 Shuttle Admin Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boundary operations called by the HTTP layer.

use shuttle_admin_domain::Principal;
use time::format_description::well_known::Iso8601;

use crate::auth::{AuthenticationService, LoginOutcome};
use crate::capabilities::compute_section_capabilities;
use crate::error::AuthError;
use crate::permissions::PermissionEvaluator;
use crate::request_response::{
    AuthorizeRequest, AuthorizeResponse, CheckMode, LoginRequest, LoginResponse, WhoAmIResponse,
};

/// Logs in and returns the session token with the issued principal.
///
/// # Errors
///
/// Returns an error if authentication fails.
pub fn login(
    auth: &mut AuthenticationService,
    request: &LoginRequest,
) -> Result<LoginResponse, AuthError> {
    let outcome: LoginOutcome = auth.login(&request.login_name, &request.password)?;

    let expires_at: String =
        outcome
            .expires_at
            .format(&Iso8601::DEFAULT)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to format expiration time: {e}"),
            })?;

    Ok(LoginResponse {
        session_token: outcome.session_token,
        expires_at,
        principal: outcome.principal,
    })
}

/// Logs out by deleting the session.
///
/// # Errors
///
/// Returns an error if the token does not name a session.
pub fn logout(auth: &mut AuthenticationService, session_token: &str) -> Result<(), AuthError> {
    auth.logout(session_token)
}

/// Returns the current principal with its section capabilities.
#[must_use]
pub fn whoami(principal: &Principal) -> WhoAmIResponse {
    WhoAmIResponse {
        principal: principal.clone(),
        is_super_admin: principal.is_super_admin(),
        sections: compute_section_capabilities(Some(principal)),
    }
}

/// Checks the requested slugs for the current principal.
///
/// `single` mode checks the first slug only; with no slugs it is not
/// granted unless an override applies.
#[must_use]
pub fn authorize_request(
    principal: Option<&Principal>,
    request: &AuthorizeRequest,
) -> AuthorizeResponse {
    let evaluator: PermissionEvaluator<'_> = PermissionEvaluator::new(principal);
    let granted: bool = match request.mode {
        CheckMode::Single => request.slugs.first().map_or_else(
            || evaluator.has_any_permission::<&str>(&[]),
            |slug| evaluator.has_permission(slug),
        ),
        CheckMode::Any => evaluator.has_any_permission(&request.slugs),
        CheckMode::All => evaluator.has_all_permissions(&request.slugs),
    };
    AuthorizeResponse { granted }
}
