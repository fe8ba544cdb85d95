//! Tollgate authorization engine - integration test support.
//!
//! Re-exports the workspace crates so integration tests can use `tollgate::`
//! style paths, plus shared fixtures.

pub mod component {
    pub use tollgate_core::*;

    pub mod auth {
        pub use tollgate_service::auth::*;
    }

    pub mod error {
        pub use tollgate_core::error::*;
        pub use tollgate_service::error::*;
    }
}

pub mod fixtures {
    use std::collections::HashMap;

    use tollgate_core::{DatabasePrivilege, Privilege};
    use tollgate_service::auth::Principal;

    /// A policy file exercising grants, denies and an admin.
    ///
    /// `alice` has no password; `root` is an admin. Passwords are added by
    /// tests that need them.
    pub const POLICY_TOML: &str = r#"
[logging]
level = "warn"

[[auth.users]]
name = "alice"
resources = [
    { path = "/kapacitor/v1/tasks/", privilege = "READ|CREATE" },
    { path = "/kapacitor/v1/tasks/secret", privilege = "NONE" },
    { path = "/kapacitor/v1/alerts/", privilege = "ALL" },
]
databases = [
    { name = "telegraf", privilege = "WRITE" },
    { name = "_internal", privilege = "ALL" },
]

[[auth.users]]
name = "root"
admin = true
"#;

    /// Builds a non-admin principal named `name` with the given resource grants.
    #[must_use]
    pub fn principal_with(name: &str, grants: &[(&str, Privilege)]) -> Principal {
        let action_privileges = grants
            .iter()
            .map(|(path, privilege)| ((*path).to_string(), *privilege))
            .collect();
        Principal::new(name, action_privileges, HashMap::new())
    }

    /// Builds a non-admin principal named `name` with the given database grants.
    #[must_use]
    pub fn database_user(name: &str, grants: &[(&str, DatabasePrivilege)]) -> Principal {
        let database_privileges = grants
            .iter()
            .map(|(db, privilege)| ((*db).to_string(), *privilege))
            .collect();
        Principal::new(name, HashMap::new(), database_privileges)
    }
}
