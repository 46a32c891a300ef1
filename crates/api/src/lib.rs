// Copyright (C) 2026 Shuttle Admin Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod auth;
mod capabilities;
mod error;
mod guard;
mod handlers;
mod permissions;
mod request_response;
mod session;

#[cfg(test)]
mod tests;

pub use auth::{AccountDirectory, AccountRecord, AuthenticationService, LoginOutcome};
pub use capabilities::{compute_section_capabilities, compute_section_capability};
pub use error::{AuthError, DirectoryError};
pub use guard::{GuardDecision, RouteRequirement, authorize, evaluate_route};
pub use handlers::{authorize_request, login, logout, whoami};
pub use permissions::{
    PermissionEvaluator, has_all_permissions, has_any_permission, has_permission, is_super_admin,
};
pub use request_response::{
    Access, AuthorizeRequest, AuthorizeResponse, CheckMode, LoginRequest, LoginResponse,
    SectionCapabilities, WhoAmIResponse,
};
pub use session::SessionStore;
