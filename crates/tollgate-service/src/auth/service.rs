//! Authorization service for request-handling code.
//!
//! This module provides the main authorization API that handlers use to check
//! permissions. It resolves the principal through a credential backend, runs
//! the engine, and writes the audit trail. Denials and caller input errors are
//! logged at different levels so malformed requests stand out from ordinary
//! access refusals.

use tollgate_core::{Action, DatabasePrivilege};

use crate::error::{ServiceError, ServiceResult};

use super::backend::CredentialBackend;
use super::principal::Principal;

/// Authorization service for checking permissions.
///
/// ## Usage
///
/// ```ignore
/// let authz = Authorizer::new(backend);
/// authz.authorize_action("alice", &Action::new("GET", "/tasks/t1"))?;
/// ```
pub struct Authorizer<B> {
    backend: B,
}

impl<B: CredentialBackend> Authorizer<B> {
    /// Create a new authorizer backed by the given credential backend.
    #[must_use]
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Check that the principal named `username` may take `action`.
    ///
    /// A backend failure means no principal is available; no partial
    /// authorization is attempted.
    ///
    /// ## Errors
    ///
    /// - Backend errors (`NotFound`) if the principal cannot be resolved.
    /// - Input errors and `Denied` as for [`Principal::authorize_action`].
    #[tracing::instrument(level = "debug", skip(self, action), fields(action = %action))]
    pub fn authorize_action(&self, username: &str, action: &Action) -> ServiceResult<()> {
        let principal = resolve(self.backend.lookup(username), username)?;
        let result = principal.authorize_action(action);
        audit_action(&principal, action, &result);
        result
    }

    /// Authenticate `username` and check that they may take `action`.
    ///
    /// Returns the authenticated principal so callers can reuse it for the
    /// rest of the request.
    ///
    /// ## Errors
    ///
    /// - `NotAuthenticated` if the credentials are rejected.
    /// - Input errors and `Denied` as for [`Principal::authorize_action`].
    #[tracing::instrument(level = "debug", skip(self, password, action), fields(action = %action))]
    pub fn authenticate_action(
        &self,
        username: &str,
        password: &str,
        action: &Action,
    ) -> ServiceResult<Principal> {
        let principal = resolve(self.backend.authenticate(username, password), username)?;
        let result = principal.authorize_action(action);
        audit_action(&principal, action, &result);
        result.map(|()| principal)
    }

    /// Check whether the principal named `username` holds `required` on `database`.
    ///
    /// ## Errors
    ///
    /// Returns backend errors (`NotFound`) if the principal cannot be resolved.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn authorize_database(
        &self,
        username: &str,
        required: DatabasePrivilege,
        database: &str,
    ) -> ServiceResult<bool> {
        let principal = resolve(self.backend.lookup(username), username)?;
        let allowed = principal.authorize_database(required, database);
        if allowed {
            tracing::debug!(
                principal = %principal.name(),
                privilege = %required,
                database,
                "Database access authorized"
            );
        } else {
            tracing::info!(
                principal = %principal.name(),
                privilege = %required,
                database,
                "Database access denied"
            );
        }
        Ok(allowed)
    }

    /// Like [`Authorizer::authorize_database`], but a refusal is an error.
    ///
    /// ## Errors
    ///
    /// - Backend errors if the principal cannot be resolved.
    /// - `Denied` naming the principal, privilege and database.
    pub fn require_database(
        &self,
        username: &str,
        required: DatabasePrivilege,
        database: &str,
    ) -> ServiceResult<()> {
        if self.authorize_database(username, required, database)? {
            Ok(())
        } else {
            Err(ServiceError::Denied {
                principal: username.to_string(),
                privilege: required.to_string(),
                resource: database.to_string(),
            })
        }
    }
}

fn resolve(resolved: ServiceResult<Principal>, username: &str) -> ServiceResult<Principal> {
    resolved.inspect_err(|err| {
        tracing::info!(username, error = %err, "No principal available");
    })
}

fn audit_action(principal: &Principal, action: &Action, result: &ServiceResult<()>) {
    match result {
        Ok(()) => tracing::debug!(
            principal = %principal.name(),
            action = %action,
            "Action authorized"
        ),
        Err(ServiceError::Denied {
            privilege,
            resource,
            ..
        }) => tracing::info!(
            principal = %principal.name(),
            privilege = %privilege,
            resource = %resource,
            "Action denied"
        ),
        Err(err) => tracing::warn!(
            principal = %principal.name(),
            method = %action.method,
            resource = %action.resource,
            error = %err,
            input_error = err.is_input_error(),
            "Rejected malformed action"
        ),
    }
}
