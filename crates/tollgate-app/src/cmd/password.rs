use anyhow::Result;
use clap::Args;
use tollgate_service::auth::password::hash_password;

use super::Outcome;

#[derive(Args, Debug)]
pub struct HashPasswordArgs {
    /// Password to hash.
    pub password: String,
}

impl HashPasswordArgs {
    /// ## Errors
    /// Returns an error if hashing fails.
    pub fn run(&self) -> Result<Outcome> {
        Ok(Outcome::Output(hash_password(&self.password)?))
    }
}
