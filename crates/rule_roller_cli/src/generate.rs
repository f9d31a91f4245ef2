//! The generate pipeline: load, resolve, lint and emit.

use std::io::Write;
use std::sync::Arc;

use config_manager::{
    ConfigurationResolver, ConfigurationValidator, DocumentLoader, DocumentSource,
    ResolvedConfiguration, ValidationResult,
};
use rule_emitter::{RuleDocument, RuleEmitter};
use tracing::{info, warn};

use crate::errors::Error;

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;

/// Default path of the root configuration document.
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// Everything produced by one run of the pipeline.
#[derive(Debug)]
pub struct GeneratedRules {
    pub resolved: ResolvedConfiguration,
    pub document: RuleDocument,
    pub warnings: ValidationResult,
}

/// Runs the pipeline against the root document at `config_path`.
///
/// Lint warnings are logged and returned but never stop emission.
///
/// # Errors
///
/// * `Error::Config` - A document cannot be loaded or the configuration does not resolve
/// * `Error::Emit` - A host lacks an instance for one of its tests
pub fn generate_rules(
    config_path: &str,
    source: Arc<dyn DocumentSource>,
) -> Result<GeneratedRules, Error> {
    let loader = DocumentLoader::new(source);
    let validator = ConfigurationValidator::new();

    let config = loader.load(config_path)?;
    let mut warnings = validator.validate_input(&config);

    let resolved = ConfigurationResolver::new().resolve(config)?;
    warnings.merge(validator.validate_resolved(&resolved));

    for warning in &warnings.warnings {
        match &warning.recommendation {
            Some(recommendation) => warn!(
                field = %warning.field_path,
                recommendation = %recommendation,
                "{}",
                warning.message
            ),
            None => warn!(field = %warning.field_path, "{}", warning.message),
        }
    }

    let document = RuleEmitter::new().emit(&resolved)?;
    info!(
        config = %config_path,
        rules = document.rule_count(),
        warnings = warnings.warnings.len(),
        "Generated rule document"
    );

    Ok(GeneratedRules {
        resolved,
        document,
        warnings,
    })
}

/// Writes the resolved configuration as pretty JSON.
///
/// # Errors
///
/// * `Error::Dump` - Serialization failed
/// * `Error::Output` - Writing failed
pub fn write_resolved<W: Write>(out: &mut W, resolved: &ResolvedConfiguration) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(resolved)?;
    writeln!(out, "{}", json).map_err(Error::Output)
}

/// Writes the rendered rule document.
///
/// # Errors
///
/// * `Error::Output` - Writing failed
pub fn write_rules<W: Write>(out: &mut W, document: &RuleDocument) -> Result<(), Error> {
    out.write_all(document.render().as_bytes())
        .and_then(|_| out.flush())
        .map_err(Error::Output)
}
