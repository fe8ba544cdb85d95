//! Cross-crate integration tests.

mod action_authorization;
mod authorizer;
mod database_authorization;
