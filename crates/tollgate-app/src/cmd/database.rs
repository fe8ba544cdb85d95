use anyhow::Result;
use clap::Args;
use tollgate_core::DatabasePrivilege;
use tollgate_service::auth::{Authorizer, CredentialBackend};

use super::Outcome;

#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// Name of the principal to check.
    #[arg(short, long)]
    pub user: String,

    /// Required level: read, write, all or none.
    pub privilege: DatabasePrivilege,

    /// Database name.
    pub database: String,
}

impl DatabaseArgs {
    /// ## Errors
    /// Returns an error if the user cannot be resolved.
    pub fn run<B: CredentialBackend>(&self, authz: &Authorizer<B>) -> Result<Outcome> {
        if authz.authorize_database(&self.user, self.privilege, &self.database)? {
            Ok(Outcome::Allowed)
        } else {
            Ok(Outcome::Denied(String::new()))
        }
    }
}
