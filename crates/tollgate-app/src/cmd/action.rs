use anyhow::Result;
use clap::Args;
use tollgate_core::Action;
use tollgate_service::auth::{Authorizer, CredentialBackend};

use super::Outcome;

#[derive(Args, Debug)]
pub struct ActionArgs {
    /// Name of the principal to check.
    #[arg(short, long)]
    pub user: String,

    /// HTTP verb, e.g. GET or PATCH.
    pub method: String,

    /// Absolute resource path, e.g. /kapacitor/v1/tasks/cpu.
    pub resource: String,
}

impl ActionArgs {
    /// ## Errors
    /// Returns an error for unknown users and malformed actions.
    pub fn run<B: CredentialBackend>(&self, authz: &Authorizer<B>) -> Result<Outcome> {
        let action = Action::new(self.method.as_str(), self.resource.as_str());
        match authz.authorize_action(&self.user, &action) {
            Ok(()) => Ok(Outcome::Allowed),
            Err(err) if err.is_denied() => Ok(Outcome::Denied(err.to_string())),
            Err(err) => Err(err.into()),
        }
    }
}
