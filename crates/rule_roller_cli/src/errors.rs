use std::io;

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the RuleRoller CLI application.
///
/// Every variant is fatal: the CLI logs it and exits with a non-zero status
/// without writing a rule document.
#[derive(Error, Debug)]
pub enum Error {
    /// The monitoring configuration could not be loaded or resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] config_manager::ConfigurationError),

    /// Rules could not be emitted from the resolved configuration.
    #[error("Emission error: {0}")]
    Emit(#[from] rule_emitter::Error),

    /// The resolved configuration could not be serialized for the debug dump.
    #[error("Failed to serialize the resolved configuration: {0}")]
    Dump(#[from] serde_json::Error),

    /// Writing the output failed.
    ///
    /// Typically a closed pipe on stdout or stderr.
    #[error("Failed to write output: {0}")]
    Output(io::Error),
}
