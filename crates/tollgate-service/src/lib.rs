//! Hierarchical, path-based authorization for Tollgate principals.

pub mod auth;
pub mod error;
