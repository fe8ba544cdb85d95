//! Authentication and authorization flow.
//!
//! ## Module Organization
//!
//! - `authorize`: Action and database authorization over a principal
//! - `backend`: Credential backend contract and the static, config-driven backend
//! - `password`: Password hashing and verification with Argon2
//! - `principal`: Principal model holding the two policy maps
//! - `resource`: Resource path helpers and the ancestor walk
//! - `service`: Backend-resolving authorizer with audit logging (`Authorizer`)

pub mod authorize;
pub mod backend;
pub mod password;
pub mod principal;
pub mod resource;
pub mod service;

// Re-export commonly used types at module level
pub use backend::{CredentialBackend, StaticBackend};
pub use principal::Principal;
pub use resource::{ResourceAncestors, is_absolute, parent};
pub use service::Authorizer;
