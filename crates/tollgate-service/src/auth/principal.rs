//! Principals and their policy maps.
//!
//! A principal is produced by a credential backend once per request and is
//! never mutated afterwards. Its two policy maps cover unrelated concerns:
//! resource paths for actions, and named databases for queries.

use std::collections::HashMap;

use tollgate_core::constants::ADMIN_USER_NAME;
use tollgate_core::{DatabasePrivilege, Privilege};

/// An authenticated entity whose policy is evaluated.
///
/// Admin principals bypass both policy maps. A non-admin principal with empty
/// maps is authorized for nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    name: String,
    admin: bool,
    /// Resource path -> bitmask of privileges
    action_privileges: HashMap<String, Privilege>,
    /// Database name -> privilege level
    database_privileges: HashMap<String, DatabasePrivilege>,
}

impl Principal {
    /// Create a principal with the given privileges.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        action_privileges: HashMap<String, Privilege>,
        database_privileges: HashMap<String, DatabasePrivilege>,
    ) -> Self {
        Self {
            name: name.into(),
            admin: false,
            action_privileges,
            database_privileges,
        }
    }

    /// Create a principal that holds every privilege on every resource.
    #[must_use]
    pub fn new_admin(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            admin: true,
            action_privileges: HashMap::new(),
            database_privileges: HashMap::new(),
        }
    }

    /// The built-in admin principal, for in-process callers acting with full rights.
    #[must_use]
    pub fn admin_user() -> Self {
        Self::new_admin(ADMIN_USER_NAME)
    }

    /// Grant `privilege` on `path`, replacing any previous grant for that exact path.
    #[must_use]
    pub fn with_resource(mut self, path: impl Into<String>, privilege: Privilege) -> Self {
        self.action_privileges.insert(path.into(), privilege);
        self
    }

    /// Grant `privilege` on `database`, replacing any previous grant for it.
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>, privilege: DatabasePrivilege) -> Self {
        self.database_privileges.insert(database.into(), privilege);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.admin
    }

    #[must_use]
    pub const fn action_privileges(&self) -> &HashMap<String, Privilege> {
        &self.action_privileges
    }

    #[must_use]
    pub const fn database_privileges(&self) -> &HashMap<String, DatabasePrivilege> {
        &self.database_privileges
    }
}
