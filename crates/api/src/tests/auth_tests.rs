// Copyright (C) 2026 Shuttle Admin Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Login, session validation and logout tests.

use std::io::Write;

use time::Duration;

use crate::{AccountDirectory, AuthError, DirectoryError, LoginOutcome};

use super::helpers::{TEST_PASSWORD, create_test_auth_service, create_test_record};

#[test]
fn test_login_issues_principal_and_token() {
    let mut auth = create_test_auth_service();

    let outcome: LoginOutcome = auth.login("Dispatcher", TEST_PASSWORD).unwrap();

    assert!(outcome.session_token.starts_with("session_"));
    assert_eq!(outcome.principal.id(), "Dispatcher");
    assert_eq!(outcome.principal.role_slug().as_str(), "ADMIN");
    assert!(outcome.principal.grants("USERS_EDIT"));
    assert!(outcome.expires_at > time::OffsetDateTime::now_utc());
    assert_eq!(auth.session_count(), 1);
}

#[test]
fn test_login_name_is_case_insensitive() {
    let mut auth = create_test_auth_service();

    let outcome = auth.login("DISPATCHER", TEST_PASSWORD).unwrap();
    assert_eq!(outcome.principal.id(), "Dispatcher");
}

#[test]
fn test_each_login_gets_a_distinct_token() {
    let mut auth = create_test_auth_service();

    let first = auth.login("Dispatcher", TEST_PASSWORD).unwrap();
    let second = auth.login("Dispatcher", TEST_PASSWORD).unwrap();

    assert_ne!(first.session_token, second.session_token);
    assert_eq!(auth.session_count(), 2);
}

#[test]
fn test_login_rejects_unknown_account() {
    let mut auth = create_test_auth_service();

    let err = auth.login("nobody", TEST_PASSWORD).unwrap_err();
    assert_eq!(
        err,
        AuthError::AuthenticationFailed {
            reason: String::from("Invalid credentials"),
        }
    );
    assert_eq!(auth.session_count(), 0);
}

#[test]
fn test_login_rejects_wrong_password() {
    let mut auth = create_test_auth_service();

    let err = auth.login("Dispatcher", "wrong-password").unwrap_err();
    assert_eq!(err.to_string(), "Authentication failed: Invalid credentials");
    assert_eq!(auth.session_count(), 0);
}

#[test]
fn test_login_rejects_disabled_account() {
    let mut auth = create_test_auth_service();

    let err = auth.login("disabled", TEST_PASSWORD).unwrap_err();
    assert_eq!(err.to_string(), "Authentication failed: Invalid credentials");
}

#[test]
fn test_login_rejections_do_not_reveal_cause() {
    let mut auth = create_test_auth_service();

    let unknown = auth.login("nobody", TEST_PASSWORD).unwrap_err();
    let disabled = auth.login("disabled", TEST_PASSWORD).unwrap_err();
    let wrong_password = auth.login("Dispatcher", "wrong-password").unwrap_err();

    assert_eq!(unknown, disabled);
    assert_eq!(disabled, wrong_password);
    assert!(!unknown.to_string().contains("nobody"));
}

#[test]
fn test_login_with_out_of_range_lifetime_fails_cleanly() {
    let mut auth = create_test_auth_service().with_session_lifetime(Duration::days(4_000_000));

    let err = auth.login("root", TEST_PASSWORD).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Authentication failed: Session expiry out of range"
    );
    assert_eq!(auth.session_count(), 0);
}

#[test]
fn test_login_reclaims_abandoned_expired_sessions() {
    let mut auth = create_test_auth_service().with_session_lifetime(Duration::seconds(-1));

    for _ in 0..50 {
        auth.login("root", TEST_PASSWORD).unwrap();
    }

    assert_eq!(auth.session_count(), 1);
}

#[test]
fn test_validate_session_returns_principal() {
    let mut auth = create_test_auth_service();
    let outcome = auth.login("root", TEST_PASSWORD).unwrap();

    let principal = auth.validate_session(&outcome.session_token).unwrap();

    assert_eq!(principal, outcome.principal);
    assert!(principal.is_super_admin());
    assert!(principal.permissions().is_empty());
}

#[test]
fn test_validate_session_rejects_unknown_token() {
    let mut auth = create_test_auth_service();

    let err = auth.validate_session("session_bogus").unwrap_err();
    assert_eq!(err.to_string(), "Authentication failed: Invalid session token");
}

#[test]
fn test_expired_session_is_rejected_and_purged() {
    let mut auth = create_test_auth_service().with_session_lifetime(Duration::seconds(-1));
    let outcome = auth.login("Dispatcher", TEST_PASSWORD).unwrap();
    assert_eq!(auth.session_count(), 1);

    let err = auth.validate_session(&outcome.session_token).unwrap_err();
    assert_eq!(err.to_string(), "Authentication failed: Session expired");
    assert_eq!(auth.session_count(), 0);

    let err = auth.validate_session(&outcome.session_token).unwrap_err();
    assert_eq!(err.to_string(), "Authentication failed: Invalid session token");
}

#[test]
fn test_purge_expired_only_removes_expired_sessions() {
    let mut auth = create_test_auth_service();
    auth.login("Dispatcher", TEST_PASSWORD).unwrap();
    assert_eq!(auth.purge_expired(), 0);

    let mut auth = auth.with_session_lifetime(Duration::seconds(-1));
    auth.login("root", TEST_PASSWORD).unwrap();
    assert_eq!(auth.session_count(), 2);
    assert_eq!(auth.purge_expired(), 1);
    assert_eq!(auth.session_count(), 1);
}

#[test]
fn test_logout_invalidates_token() {
    let mut auth = create_test_auth_service();
    let outcome = auth.login("Dispatcher", TEST_PASSWORD).unwrap();

    auth.logout(&outcome.session_token).unwrap();

    assert!(auth.validate_session(&outcome.session_token).is_err());
    assert!(auth.logout(&outcome.session_token).is_err());
}

#[test]
fn test_directory_rejects_duplicate_login() {
    let result = AccountDirectory::from_records(vec![
        create_test_record("dispatcher", "ADMIN", &[]),
        create_test_record("Dispatcher", "ADMIN", &[]),
    ]);

    assert!(matches!(result, Err(DirectoryError::DuplicateLogin(login)) if login == "Dispatcher"));
}

#[test]
fn test_directory_loads_from_json_file() {
    let record = create_test_record("planner", "ADMIN", &["ROUTES_VIEW"]);
    let json = serde_json::to_string(&vec![record]).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let directory = AccountDirectory::load(file.path()).unwrap();

    assert_eq!(directory.len(), 1);
    let account = directory.get("PLANNER").unwrap();
    assert!(!account.disabled);
    assert!(account.to_principal().grants("ROUTES_VIEW"));
}

#[test]
fn test_directory_defaults_optional_fields() {
    let json = r#"[{
        "loginName": "minimal",
        "displayName": "Minimal",
        "passwordHash": "x",
        "roleSlug": "VIEWER"
    }]"#;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let directory = AccountDirectory::load(file.path()).unwrap();
    let account = directory.get("minimal").unwrap();
    assert!(account.permissions.is_empty());
    assert!(!account.disabled);
}

#[test]
fn test_directory_load_reports_parse_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"not json").unwrap();

    let err = AccountDirectory::load(file.path()).unwrap_err();
    assert!(matches!(err, DirectoryError::Parse(_)));
}
