//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

use crate::config::ConfigValidationError;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors that abort an inspection run.
///
/// Query failures are not represented here: a failed or empty `dig`
/// invocation is reported as an empty result, never as an error.
#[derive(Error, Debug)]
pub enum InspectError {
    /// The resolver utility could not be executed at all.
    #[error("{}", unavailable_message(.program, .source))]
    ResolverUnavailable {
        /// Program that failed to start
        program: String,
        /// Spawn failure reported by the OS
        #[source]
        source: std::io::Error,
    },

    /// The configuration was rejected before any query was issued.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigValidationError),

    /// Writing the report to its output failed.
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// "Not found" keeps the install hint; other spawn failures carry the OS reason.
fn unavailable_message(program: &str, source: &std::io::Error) -> String {
    match source.kind() {
        std::io::ErrorKind::NotFound => {
            format!("'{program}' command not found. Make sure 'dnsutils' is installed.")
        }
        _ => format!("'{program}' could not be executed: {source}"),
    }
}

impl InspectError {
    /// Process exit code for this error.
    ///
    /// Every fatal condition exits with 1, matching the usage error.
    pub fn exit_code(&self) -> i32 {
        match self {
            InspectError::ResolverUnavailable { .. } => 1,
            InspectError::InvalidConfig(_) => 1,
            InspectError::Output(_) => 1,
        }
    }
}
