//! Command-line driver for the Tollgate authorization engine.

pub mod cmd;
pub mod logging;
