//! Requested actions and HTTP verb classification.
//!
//! An action pairs a resource path with the HTTP verb used against it. The
//! verb decides which elementary right the caller must hold.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::privilege::Privilege;

/// Maps an HTTP verb to the privilege it requires.
///
/// Matching is case-insensitive:
///
/// - `GET`, `HEAD`, `OPTIONS` → `READ`
/// - `POST` → `CREATE`
/// - `PATCH` → `UPDATE`
/// - `DELETE` → `DELETE`
///
/// ## Errors
///
/// Returns `UnknownVerb` (carrying the upper-cased verb) for any other verb.
pub fn classify_verb(method: &str) -> CoreResult<Privilege> {
    match method.to_ascii_uppercase().as_str() {
        "GET" | "HEAD" | "OPTIONS" => Ok(Privilege::READ),
        "POST" => Ok(Privilege::CREATE),
        "PATCH" => Ok(Privilege::UPDATE),
        "DELETE" => Ok(Privilege::DELETE),
        other => Err(CoreError::UnknownVerb(other.to_string())),
    }
}

/// A request to apply `method` to `resource`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Absolute, slash-delimited resource path.
    pub resource: String,
    /// HTTP verb, in any letter case.
    pub method: String,
}

impl Action {
    #[must_use]
    pub fn new(method: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            method: method.into(),
        }
    }

    /// Returns the privilege needed to perform this action.
    ///
    /// ## Errors
    ///
    /// Returns `UnknownVerb` if the method is not a recognised verb.
    pub fn required_privilege(&self) -> CoreResult<Privilege> {
        classify_verb(&self.method)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method.to_ascii_uppercase(), self.resource)
    }
}
