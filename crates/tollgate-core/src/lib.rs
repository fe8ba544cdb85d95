//! Privilege vocabulary, actions and configuration shared by the Tollgate crates.

pub mod action;
pub mod config;
pub mod constants;
pub mod database;
pub mod error;
pub mod privilege;

pub use action::{Action, classify_verb};
pub use database::DatabasePrivilege;
pub use privilege::Privilege;
