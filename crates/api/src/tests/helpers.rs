// Copyright (C) 2026 Shuttle Admin Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use shuttle_admin_domain::{PermissionSlug, Principal, RoleSlug};

use crate::{AccountDirectory, AccountRecord, AuthenticationService};

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// The lowest cost bcrypt accepts; keeps the tests fast.
const TEST_BCRYPT_COST: u32 = 4;

/// An `ADMIN` holding `USERS_VIEW` and `USERS_EDIT`.
pub fn create_test_admin() -> Principal {
    Principal::new(
        "admin-123",
        "Test Admin",
        RoleSlug::new("ADMIN"),
        ["USERS_VIEW", "USERS_EDIT"],
    )
}

/// A `SUPER_ADMIN` with an empty permission set.
pub fn create_test_super_admin() -> Principal {
    Principal::new(
        "root-1",
        "Test Root",
        RoleSlug::super_admin(),
        Vec::<PermissionSlug>::new(),
    )
}

/// A non-super role holding only the `ALL` wildcard.
pub fn create_test_wildcard() -> Principal {
    Principal::new("ops-7", "Test Ops", RoleSlug::new("OPERATIONS"), ["ALL"])
}

/// A non-super role with no permissions at all.
pub fn create_test_empty() -> Principal {
    Principal::new(
        "viewer-9",
        "Test Viewer",
        RoleSlug::new("VIEWER"),
        Vec::<PermissionSlug>::new(),
    )
}

/// Slugs that should be granted by every override, including odd ones.
pub fn probe_slugs() -> Vec<&'static str> {
    vec![
        "USERS_VIEW",
        "BOOKINGS_EDIT",
        "UNCATALOGUED_THING",
        "",
        "all",
        "SUPER_ADMIN",
    ]
}

pub fn create_test_record(login_name: &str, role_slug: &str, permissions: &[&str]) -> AccountRecord {
    AccountRecord::with_password(
        login_name,
        "Test Account",
        TEST_PASSWORD,
        role_slug,
        permissions,
        TEST_BCRYPT_COST,
    )
    .expect("Failed to hash test password")
}

pub fn create_test_auth_service() -> AuthenticationService {
    let mut disabled: AccountRecord = create_test_record("disabled", "ADMIN", &["USERS_VIEW"]);
    disabled.disabled = true;

    let directory: AccountDirectory = AccountDirectory::from_records(vec![
        create_test_record("Dispatcher", "ADMIN", &["USERS_VIEW", "USERS_EDIT"]),
        create_test_record("root", "SUPER_ADMIN", &[]),
        disabled,
    ])
    .expect("Failed to build directory");

    AuthenticationService::new(directory)
}
