//! Credential backends.
//!
//! A backend turns credentials or a bare name into a [`Principal`]. The
//! authorization engine never calls a backend itself; callers resolve the
//! principal first and hand it to the engine.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, LazyLock};

use tollgate_core::config::{AuthConfig, UserConfig};

use crate::error::{ServiceError, ServiceResult};

use super::password;
use super::principal::Principal;
use super::resource::is_absolute;

/// Hash checked when there is no stored hash for the user, so unknown users
/// cost the same Argon2 verification as a wrong password.
static UNUSABLE_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| password::hash_password("tollgate: no password set").ok());

/// Interface for authenticating and retrieving principals.
pub trait CredentialBackend: Send + Sync {
    /// Resolve a principal from a username and password.
    ///
    /// ## Errors
    ///
    /// Returns `NotAuthenticated` for an unknown user or a wrong password.
    fn authenticate(&self, username: &str, password: &str) -> ServiceResult<Principal>;

    /// Resolve a principal by name without checking credentials.
    ///
    /// ## Errors
    ///
    /// Returns `NotFound` if no such principal exists.
    fn lookup(&self, username: &str) -> ServiceResult<Principal>;
}

impl<B: CredentialBackend + ?Sized> CredentialBackend for Arc<B> {
    fn authenticate(&self, username: &str, password: &str) -> ServiceResult<Principal> {
        (**self).authenticate(username, password)
    }

    fn lookup(&self, username: &str) -> ServiceResult<Principal> {
        (**self).lookup(username)
    }
}

#[derive(Debug, Clone)]
struct StaticUser {
    principal: Principal,
    password_hash: Option<String>,
}

/// A fixed set of users, usually read from configuration.
///
/// Immutable after construction; every call returns a fresh principal snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticBackend {
    users: HashMap<String, StaticUser>,
}

impl StaticBackend {
    /// ## Summary
    /// Builds a backend from the configured users.
    ///
    /// ## Errors
    /// Returns `InvalidConfiguration` if a user name is empty or repeated, a
    /// resource path is not absolute, a resource or database is listed twice
    /// for one user, or a password hash is malformed. Admin users are checked
    /// the same way, but their grants are then discarded.
    #[tracing::instrument(skip(config), fields(users = config.users.len()))]
    pub fn from_config(config: &AuthConfig) -> ServiceResult<Self> {
        let mut users = HashMap::with_capacity(config.users.len());

        for user_config in &config.users {
            let user = build_user(user_config)?;
            match users.entry(user_config.name.clone()) {
                Entry::Occupied(_) => {
                    return Err(ServiceError::InvalidConfiguration(format!(
                        "duplicate user {:?}",
                        user_config.name
                    )));
                }
                Entry::Vacant(slot) => {
                    slot.insert(user);
                }
            }
        }

        tracing::info!(user_count = users.len(), "Static credential backend loaded");
        Ok(Self { users })
    }

    /// Add a principal that can be looked up but never authenticates.
    #[must_use]
    pub fn with_principal(mut self, principal: Principal) -> Self {
        self.users.insert(
            principal.name().to_string(),
            StaticUser {
                principal,
                password_hash: None,
            },
        );
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

fn build_user(config: &UserConfig) -> ServiceResult<StaticUser> {
    let invalid = |reason: String| {
        ServiceError::InvalidConfiguration(format!("user {:?}: {reason}", config.name))
    };

    if config.name.trim().is_empty() {
        return Err(ServiceError::InvalidConfiguration(
            "user name must not be empty".to_string(),
        ));
    }
    if let Some(hash) = &config.password_hash {
        password::validate_hash(hash)?;
    }

    let mut action_privileges = HashMap::with_capacity(config.resources.len());
    for grant in &config.resources {
        if !is_absolute(&grant.path) {
            return Err(invalid(format!(
                "resource {:?} must be an absolute path",
                grant.path
            )));
        }
        if action_privileges
            .insert(grant.path.clone(), grant.privilege)
            .is_some()
        {
            return Err(invalid(format!("resource {:?} listed twice", grant.path)));
        }
    }

    let mut database_privileges = HashMap::with_capacity(config.databases.len());
    for grant in &config.databases {
        if database_privileges
            .insert(grant.name.clone(), grant.privilege)
            .is_some()
        {
            return Err(invalid(format!("database {:?} listed twice", grant.name)));
        }
    }

    let principal = if config.admin {
        if !action_privileges.is_empty() || !database_privileges.is_empty() {
            tracing::warn!(
                user = %config.name,
                resources = action_privileges.len(),
                databases = database_privileges.len(),
                "Grants on an admin user are ignored"
            );
        }
        Principal::new_admin(config.name.clone())
    } else {
        Principal::new(config.name.clone(), action_privileges, database_privileges)
    };

    Ok(StaticUser {
        principal,
        password_hash: config.password_hash.clone(),
    })
}

/// Runs a verification against [`UNUSABLE_HASH`] and always rejects.
fn reject_without_hash(password: &str) -> ServiceError {
    if let Some(hash) = UNUSABLE_HASH.as_deref() {
        // The result is irrelevant; only the time spent matters.
        let _ = password::verify_password(password, hash);
    }
    ServiceError::NotAuthenticated
}

impl CredentialBackend for StaticBackend {
    fn authenticate(&self, username: &str, password: &str) -> ServiceResult<Principal> {
        let Some(user) = self.users.get(username) else {
            tracing::debug!(username, "Unknown user");
            return Err(reject_without_hash(password));
        };
        let Some(hash) = &user.password_hash else {
            tracing::debug!(username, "User has no password");
            return Err(reject_without_hash(password));
        };
        password::verify_password(password, hash)?;
        Ok(user.principal.clone())
    }

    fn lookup(&self, username: &str) -> ServiceResult<Principal> {
        self.users
            .get(username)
            .map(|user| user.principal.clone())
            .ok_or_else(|| ServiceError::NotFound(format!("user {username:?}")))
    }
}
