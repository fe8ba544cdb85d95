//! Action and database authorization.
//!
//! Both checks are pure functions of a [`Principal`] snapshot and the request.
//! They take no locks and perform no I/O, so one principal can be checked from
//! many threads at once.
//!
//! ## Action authorization
//!
//! 1. Classify the verb; unknown verbs are input errors.
//! 2. Reject a `NONE` requirement and non-absolute resources.
//! 3. Admins are always authorized.
//! 4. Walk from the resource to the root (see [`ResourceAncestors`]) and stop
//!    at the first path with a policy entry. That entry alone decides: a miss
//!    there is a denial even if a shorter ancestor would grant.
//! 5. No entry anywhere on the walk is a denial.

use tollgate_core::{Action, DatabasePrivilege, Privilege};

use crate::error::{ServiceError, ServiceResult};

use super::principal::Principal;
use super::resource::{ResourceAncestors, is_absolute};

impl Principal {
    /// Determine whether this principal may take `action`.
    ///
    /// ## Errors
    ///
    /// - `UnknownVerb` if the method is not recognised.
    /// - `InvalidAction` if the action requires no privilege.
    /// - `InvalidResource` if the resource is not an absolute path.
    /// - `Denied` if the policy does not grant the required privilege.
    pub fn authorize_action(&self, action: &Action) -> ServiceResult<()> {
        let required = action.required_privilege()?;
        if required.is_none() {
            return Err(ServiceError::InvalidAction(action.to_string()));
        }
        if !is_absolute(&action.resource) {
            return Err(ServiceError::InvalidResource(action.resource.clone()));
        }
        if self.is_admin() {
            return Ok(());
        }

        match self.matching_grant(&action.resource) {
            Some((path, granted)) if granted.grants(required) => {
                tracing::debug!(
                    principal = %self.name(),
                    resource = %action.resource,
                    matched = %path,
                    granted = %granted,
                    required = %required,
                    "Policy entry grants action"
                );
                Ok(())
            }
            Some((path, granted)) => {
                tracing::debug!(
                    principal = %self.name(),
                    resource = %action.resource,
                    matched = %path,
                    granted = %granted,
                    required = %required,
                    "Policy entry does not grant action"
                );
                Err(self.denied(required, &action.resource))
            }
            None => Err(self.denied(required, &action.resource)),
        }
    }

    /// Returns the policy entry that decides access to `resource`.
    ///
    /// This is the first of the resource and its ancestors that has an entry
    /// in the action policy, together with the privilege stored for it.
    #[must_use]
    pub fn matching_grant<'a>(&self, resource: &'a str) -> Option<(&'a str, Privilege)> {
        if self.action_privileges().is_empty() {
            return None;
        }
        ResourceAncestors::new(resource).find_map(|candidate| {
            tracing::trace!(candidate, "Checking resource");
            self.action_privileges()
                .get(candidate)
                .map(|granted| (candidate, *granted))
        })
    }

    /// Returns `true` if this principal holds `required` on `database`.
    ///
    /// Only an exact level match or a stored `All` grants access. A missing
    /// entry is indistinguishable from an explicit deny.
    #[must_use]
    pub fn authorize_database(&self, required: DatabasePrivilege, database: &str) -> bool {
        if self.is_admin() {
            return true;
        }
        if self.database_privileges().is_empty() {
            return false;
        }
        self.database_privileges()
            .get(database)
            .is_some_and(|granted| granted.satisfies(required))
    }

    fn denied(&self, required: Privilege, resource: &str) -> ServiceError {
        ServiceError::Denied {
            principal: self.name().to_string(),
            privilege: required.to_string(),
            resource: resource.to_string(),
        }
    }
}
