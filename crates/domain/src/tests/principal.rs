// Copyright (C) 2026 Shuttle Admin Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{PermissionSlug, Principal, RoleSlug};

#[test]
fn test_permissions_collapse_duplicates() {
    let principal: Principal = Principal::new(
        "u-1",
        "Dispatcher",
        RoleSlug::new("ADMIN"),
        ["USERS_VIEW", "USERS_VIEW", "USERS_EDIT"],
    );

    assert_eq!(principal.permissions().len(), 2);
    assert!(principal.grants("USERS_VIEW"));
    assert!(principal.grants("USERS_EDIT"));
    assert!(!principal.grants("BOOKINGS_EDIT"));
}

#[test]
fn test_permission_order_is_immaterial() {
    let a: Principal = Principal::new("u-1", "A", RoleSlug::new("ADMIN"), ["B", "A"]);
    let b: Principal = Principal::new("u-1", "A", RoleSlug::new("ADMIN"), ["A", "B"]);

    assert_eq!(a, b);
}

#[test]
fn test_reserved_slugs() {
    assert!(RoleSlug::super_admin().is_super_admin());
    assert!(!RoleSlug::new("super_admin").is_super_admin());
    assert!(!RoleSlug::new("ADMIN").is_super_admin());

    assert!(PermissionSlug::wildcard().is_wildcard());
    assert!(!PermissionSlug::new("all").is_wildcard());
    assert!(!PermissionSlug::new("").is_wildcard());
}

#[test]
fn test_wildcard_and_super_admin_flags() {
    let wildcard: Principal = Principal::new("u-2", "Ops", RoleSlug::new("OPS"), ["ALL"]);
    assert!(wildcard.has_wildcard());
    assert!(!wildcard.is_super_admin());

    let root: Principal = Principal::new(
        "u-3",
        "Root",
        RoleSlug::super_admin(),
        Vec::<PermissionSlug>::new(),
    );
    assert!(root.is_super_admin());
    assert!(!root.has_wildcard());
    assert!(root.permissions().is_empty());
}

#[test]
fn test_principal_deserializes_from_camel_case_profile() {
    let json: &str = r#"{
        "id": "u-7",
        "displayName": "Route Planner",
        "roleSlug": "ADMIN",
        "permissions": ["ROUTES_EDIT", "ROUTES_VIEW", "ROUTES_VIEW"]
    }"#;

    let principal: Principal = serde_json::from_str(json).expect("profile should parse");

    assert_eq!(principal.id(), "u-7");
    assert_eq!(principal.display_name(), "Route Planner");
    assert_eq!(principal.role_slug().as_str(), "ADMIN");
    assert_eq!(principal.permissions().len(), 2);
}

#[test]
fn test_principal_serializes_permissions_as_plain_strings() {
    let principal: Principal =
        Principal::new("u-1", "Ops", RoleSlug::new("ADMIN"), ["USERS_VIEW"]);

    let value: serde_json::Value = serde_json::to_value(&principal).unwrap();

    assert_eq!(value["roleSlug"], "ADMIN");
    assert_eq!(value["permissions"], serde_json::json!(["USERS_VIEW"]));
}
