use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tollgate_core::config::load_config;
use tollgate_service::auth::{Authorizer, StaticBackend};

use crate::logging::{self, FilterHandle};

mod action;
mod database;
mod password;

pub use action::ActionArgs;
pub use database::DatabaseArgs;
pub use password::HashPasswordArgs;

/// Evaluate authorization requests against the configured principals.
#[derive(Parser, Debug)]
#[command(name = "tollgate", version, about)]
pub struct App {
    /// Path to the TOML configuration file.
    #[arg(short, long, global = true, env = "TOLLGATE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether a user may apply an HTTP verb to a resource.
    Action(ActionArgs),
    /// Check whether a user holds a privilege level on a database.
    Database(DatabaseArgs),
    /// Print an Argon2 hash suitable for `password_hash`.
    HashPassword(HashPasswordArgs),
}

/// Result of a command, printed to stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Allowed,
    Denied(String),
    Output(String),
}

impl Outcome {
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Allowed | Self::Output(_) => ExitCode::SUCCESS,
            Self::Denied(_) => ExitCode::from(1),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allowed => f.write_str("allowed"),
            Self::Denied(reason) if reason.is_empty() => f.write_str("denied"),
            Self::Denied(reason) => write!(f, "denied: {reason}"),
            Self::Output(text) => f.write_str(text),
        }
    }
}

impl App {
    /// ## Summary
    /// Runs the selected command. Commands that evaluate policy load the
    /// configuration first and apply its log level.
    ///
    /// ## Errors
    /// Returns an error for configuration problems and malformed requests.
    /// Policy denials are an [`Outcome`], not an error.
    pub fn run(&self, filter: &FilterHandle) -> Result<Outcome> {
        match &self.command {
            Commands::Action(args) => args.run(&self.authorizer(filter)?),
            Commands::Database(args) => args.run(&self.authorizer(filter)?),
            Commands::HashPassword(args) => args.run(),
        }
    }

    fn authorizer(&self, filter: &FilterHandle) -> Result<Authorizer<StaticBackend>> {
        let settings = load_config(self.config.as_deref())?;
        logging::apply_level(filter, &settings.logging.level);

        Ok(Authorizer::new(StaticBackend::from_config(&settings.auth)?))
    }
}
