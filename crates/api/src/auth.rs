// Copyright (C) 2026 Shuttle Admin Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication: account directory, login, session validation and logout.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shuttle_admin_domain::{Principal, RoleSlug};
use time::{Duration, OffsetDateTime};
use tracing::{debug, info, warn};

use crate::error::{AuthError, DirectoryError};

/// A stored account as loaded from the directory file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    /// The login name. Matched case-insensitively.
    pub login_name: String,
    /// The human-readable name.
    pub display_name: String,
    /// The bcrypt hash of the account password.
    pub password_hash: String,
    /// The role issued to the principal.
    pub role_slug: String,
    /// The permission slugs issued to the principal.
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Disabled accounts cannot log in and lose their sessions.
    #[serde(default)]
    pub disabled: bool,
}

impl AccountRecord {
    /// Creates a record, hashing `password` with the given bcrypt cost.
    ///
    /// # Errors
    ///
    /// Returns an error if hashing fails.
    pub fn with_password(
        login_name: &str,
        display_name: &str,
        password: &str,
        role_slug: &str,
        permissions: &[&str],
        cost: u32,
    ) -> Result<Self, AuthError> {
        let password_hash: String = bcrypt::hash(password, cost).map_err(|e| {
            AuthError::AuthenticationFailed {
                reason: format!("Failed to hash password: {e}"),
            }
        })?;

        Ok(Self {
            login_name: login_name.to_string(),
            display_name: display_name.to_string(),
            password_hash,
            role_slug: role_slug.to_string(),
            permissions: permissions.iter().map(ToString::to_string).collect(),
            disabled: false,
        })
    }

    /// Builds the principal issued for this account.
    ///
    /// The principal is always rebuilt in full from the record.
    #[must_use]
    pub fn to_principal(&self) -> Principal {
        Principal::new(
            &self.login_name,
            &self.display_name,
            RoleSlug::new(&self.role_slug),
            self.permissions.iter().map(String::as_str),
        )
    }
}

/// In-memory account directory keyed by lower-cased login name.
#[derive(Debug, Clone, Default)]
pub struct AccountDirectory {
    accounts: HashMap<String, AccountRecord>,
}

impl AccountDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from records.
    ///
    /// # Errors
    ///
    /// Returns an error if two records share a login name.
    pub fn from_records(records: Vec<AccountRecord>) -> Result<Self, DirectoryError> {
        let mut directory: Self = Self::new();
        for record in records {
            directory.insert(record)?;
        }
        Ok(directory)
    }

    /// Loads a directory from a JSON file containing an array of records.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or contains
    /// duplicate login names.
    pub fn load(path: &Path) -> Result<Self, DirectoryError> {
        let contents: String = std::fs::read_to_string(path)?;
        let records: Vec<AccountRecord> = serde_json::from_str(&contents)?;
        let directory: Self = Self::from_records(records)?;
        info!(
            path = %path.display(),
            accounts = directory.len(),
            "Loaded account directory"
        );
        Ok(directory)
    }

    /// Adds a record.
    ///
    /// # Errors
    ///
    /// Returns an error if the login name is already present.
    pub fn insert(&mut self, record: AccountRecord) -> Result<(), DirectoryError> {
        let key: String = record.login_name.to_lowercase();
        if self.accounts.contains_key(&key) {
            return Err(DirectoryError::DuplicateLogin(record.login_name));
        }
        self.accounts.insert(key, record);
        Ok(())
    }

    /// Looks up an account by login name.
    #[must_use]
    pub fn get(&self, login_name: &str) -> Option<&AccountRecord> {
        self.accounts.get(&login_name.to_lowercase())
    }

    /// Returns the number of accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns whether the directory has no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

/// A live session.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SessionData {
    login_name: String,
    expires_at: OffsetDateTime,
}

/// The result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// The opaque session token.
    pub session_token: String,
    /// The principal issued for the session.
    pub principal: Principal,
    /// When the session expires.
    pub expires_at: OffsetDateTime,
}

/// Authentication service for session-based authentication.
#[derive(Debug)]
pub struct AuthenticationService {
    directory: AccountDirectory,
    sessions: HashMap<String, SessionData>,
    session_lifetime: Duration,
}

impl AuthenticationService {
    /// Default session expiration duration (30 days).
    pub const DEFAULT_SESSION_LIFETIME: Duration = Duration::days(30);

    /// Creates a service over `directory` with the default session lifetime.
    #[must_use]
    pub fn new(directory: AccountDirectory) -> Self {
        Self {
            directory,
            sessions: HashMap::new(),
            session_lifetime: Self::DEFAULT_SESSION_LIFETIME,
        }
    }

    /// Overrides the session lifetime.
    #[must_use]
    pub const fn with_session_lifetime(mut self, session_lifetime: Duration) -> Self {
        self.session_lifetime = session_lifetime;
        self
    }

    /// Returns the account directory.
    #[must_use]
    pub const fn directory(&self) -> &AccountDirectory {
        &self.directory
    }

    /// Returns the number of live (not yet purged) sessions.
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Reason reported for every rejected login, whatever the cause.
    const INVALID_CREDENTIALS: &str = "Invalid credentials";

    /// Authenticates an account and creates a session.
    ///
    /// Expired sessions are purged first, so abandoned tokens do not
    /// accumulate. Every rejection reports the same reason; the cause is
    /// only logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is unknown or disabled, the password
    /// does not match, or the session expiry is out of range.
    pub fn login(&mut self, login_name: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        self.purge_expired();

        let account: &AccountRecord = self.directory.get(login_name).ok_or_else(|| {
            warn!(login_name, "Login for unknown account");
            AuthError::authentication_failed(Self::INVALID_CREDENTIALS)
        })?;

        if account.disabled {
            warn!(login_name, "Login for disabled account");
            return Err(AuthError::authentication_failed(Self::INVALID_CREDENTIALS));
        }

        let password_matches: bool =
            bcrypt::verify(password, &account.password_hash).map_err(|e| {
                warn!(login_name, error = %e, "Failed to verify password hash");
                AuthError::authentication_failed(Self::INVALID_CREDENTIALS)
            })?;
        if !password_matches {
            warn!(login_name, "Login with invalid password");
            return Err(AuthError::authentication_failed(Self::INVALID_CREDENTIALS));
        }

        let expires_at: OffsetDateTime = OffsetDateTime::now_utc()
            .checked_add(self.session_lifetime)
            .ok_or_else(|| {
                warn!(lifetime = %self.session_lifetime, "Session expiry out of range");
                AuthError::authentication_failed("Session expiry out of range")
            })?;

        let principal: Principal = account.to_principal();
        let canonical_login: String = account.login_name.clone();

        let session_token: String = Self::generate_session_token();
        self.sessions.insert(
            session_token.clone(),
            SessionData {
                login_name: canonical_login,
                expires_at,
            },
        );

        info!(
            principal = principal.id(),
            role = %principal.role_slug(),
            "Login succeeded"
        );

        Ok(LoginOutcome {
            session_token,
            principal,
            expires_at,
        })
    }

    /// Validates a session token and returns the principal for it.
    ///
    /// Expired sessions are purged. The principal is rebuilt from the
    /// current directory record so role changes take effect immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is unknown or expired, or the account
    /// has since been removed or disabled.
    pub fn validate_session(&mut self, session_token: &str) -> Result<Principal, AuthError> {
        let session: &SessionData = self
            .sessions
            .get(session_token)
            .ok_or_else(|| AuthError::authentication_failed("Invalid session token"))?;

        if OffsetDateTime::now_utc() > session.expires_at {
            self.sessions.remove(session_token);
            debug!("Purged expired session");
            return Err(AuthError::authentication_failed("Session expired"));
        }

        let account: &AccountRecord = self
            .directory
            .get(&session.login_name)
            .ok_or_else(|| AuthError::authentication_failed("Account not found"))?;

        if account.disabled {
            return Err(AuthError::authentication_failed("Account is disabled"));
        }

        Ok(account.to_principal())
    }

    /// Logs out by deleting the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the token does not name a session.
    pub fn logout(&mut self, session_token: &str) -> Result<(), AuthError> {
        let session: SessionData = self
            .sessions
            .remove(session_token)
            .ok_or_else(|| AuthError::authentication_failed("Invalid session token"))?;

        info!(login_name = %session.login_name, "Logged out");
        Ok(())
    }

    /// Drops every expired session, returning how many were removed.
    pub fn purge_expired(&mut self) -> usize {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let before: usize = self.sessions.len();
        self.sessions.retain(|_, session| session.expires_at >= now);
        let purged: usize = before - self.sessions.len();
        if purged > 0 {
            debug!(purged, "Purged expired sessions");
        }
        purged
    }

    fn generate_session_token() -> String {
        format!(
            "session_{:016x}{:016x}",
            rand::random::<u64>(),
            rand::random::<u64>()
        )
    }
}
