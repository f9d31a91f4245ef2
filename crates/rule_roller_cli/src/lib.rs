//! RuleRoller CLI library exports for integration testing.
//!
//! This module exposes the generate pipeline used by the `rule-roller` binary.

pub mod errors;
pub mod generate;

pub use errors::Error;
pub use generate::{generate_rules, write_resolved, write_rules, GeneratedRules, DEFAULT_CONFIG_PATH};

/// Version reported by `--version`, baked in at build time when available.
pub fn version() -> &'static str {
    option_env!("RULE_ROLLER_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// The `--version` line.
pub fn version_line(program: &str) -> String {
    format!("{}: version {}", program, version())
}

/// The line written to stderr when a run fails.
///
/// Printed regardless of the log filter so a failing run always explains
/// its exit status.
pub fn diagnostic(program: &str, error: &Error) -> String {
    format!("{}: {}", program, error)
}

/// The `--license` text.
pub fn license_text(program: &str) -> String {
    format!(
        "{}\n\nThis software is published under the terms of the Apache License, Version 2.0.\nA copy is at https://www.apache.org/licenses/LICENSE-2.0.\n",
        version_line(program)
    )
}
