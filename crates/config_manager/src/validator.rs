//! Non-fatal lint checks over the monitoring configuration.
//!
//! Fatal problems (unresolved names, missing `expr`/`source`, missing
//! instances) are reported by the resolver and emitter as errors. This
//! module only collects warnings about things that are accepted but are
//! probably mistakes.
//!
//! # Examples
//!
//! ```rust
//! use config_manager::{ConfigurationValidator, MonitoringConfig, TestTemplate};
//!
//! let mut config = MonitoringConfig::default();
//! config.tests.push(TestTemplate::named("up"));
//! config.tests.push(TestTemplate::named("up"));
//!
//! let result = ConfigurationValidator::new().validate_input(&config);
//! assert_eq!(result.warnings.len(), 1);
//! ```

use crate::{
    document::MonitoringConfig,
    resolved_config::{ResolvedConfiguration, ResolvedHost},
};
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;

/// Pattern for metric label names. `None` only if the pattern fails to compile.
static LABEL_NAME: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").ok());

static DURATION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([0-9]+(ms|s|m|h|d|w|y))+$").ok());

/// Lint checks are skipped rather than failing when a pattern is unavailable.
fn matches_pattern(pattern: &LazyLock<Option<Regex>>, value: &str) -> bool {
    pattern.as_ref().map_or(true, |re| re.is_match(value))
}

/// Result of a lint pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// List of validation warnings (non-blocking).
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when no warning was raised.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Appends the warnings of another result.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
    }
}

/// Non-blocking validation warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Dot-separated path to the field that triggered the warning.
    pub field_path: String,
    /// Human-readable warning message.
    pub message: String,
    /// Optional recommendation for how to fix it.
    pub recommendation: Option<String>,
}

/// Lint checks for input and resolved configurations.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationValidator;

impl ConfigurationValidator {
    pub fn new() -> Self {
        Self
    }

    /// Checks the loaded input for duplicate template and class names.
    ///
    /// Lookup returns the first entry with a name, so later duplicates are
    /// never used.
    pub fn validate_input(&self, config: &MonitoringConfig) -> ValidationResult {
        let mut result = ValidationResult::new();

        for name in duplicates(config.tests.iter().map(|t| t.name.as_str())) {
            result.add_warning(ValidationWarning {
                field_path: format!("tests.{}", name),
                message: format!("Test '{}' is defined more than once", name),
                recommendation: Some(
                    "Only the first definition is used; remove or rename the others".to_string(),
                ),
            });
        }

        for name in duplicates(config.classes.iter().map(|c| c.name.as_str())) {
            result.add_warning(ValidationWarning {
                field_path: format!("classes.{}", name),
                message: format!("Class '{}' is defined more than once", name),
                recommendation: Some(
                    "Only the first definition is used; remove or rename the others".to_string(),
                ),
            });
        }

        result
    }

    /// Checks a resolved configuration for values the alerting engine is
    /// likely to reject or that produce no rules.
    pub fn validate_resolved(&self, config: &ResolvedConfiguration) -> ValidationResult {
        let mut result = ValidationResult::new();

        check_label_names(&mut result, "defaults.labels", &config.defaults.labels);
        for host in &config.hosts {
            self.validate_host(&mut result, host);
        }

        result
    }

    fn validate_host(&self, result: &mut ValidationResult, host: &ResolvedHost) {
        let prefix = format!("hosts.{}", host.name);
        check_label_names(result, &format!("{}.labels", prefix), &host.labels);
        check_label_names(result, &format!("{}.annotations", prefix), &host.annotations);

        for test in &host.tests {
            let test_prefix = format!("{}.tests.{}", prefix, test.name);
            check_label_names(result, &format!("{}.labels", test_prefix), &test.labels);
            check_label_names(
                result,
                &format!("{}.annotations", test_prefix),
                &test.annotations,
            );

            if !matches_pattern(&DURATION, &test.for_duration) {
                result.add_warning(ValidationWarning {
                    field_path: format!("{}.for", test_prefix),
                    message: format!("'{}' is not a valid duration", test.for_duration),
                    recommendation: Some("Use a duration such as 30s, 5m or 1h30m".to_string()),
                });
            }

            if test.has_no_thresholds() {
                result.add_warning(ValidationWarning {
                    field_path: test_prefix,
                    message: "No notice, warning or critical threshold is set; no rule will be emitted"
                        .to_string(),
                    recommendation: Some(
                        "Set at least one threshold on the template, a class or the host"
                            .to_string(),
                    ),
                });
            }
        }
    }
}

fn check_label_names(result: &mut ValidationResult, path: &str, map: &BTreeMap<String, String>) {
    for key in map.keys() {
        if !matches_pattern(&LABEL_NAME, key) {
            result.add_warning(ValidationWarning {
                field_path: format!("{}.{}", path, key),
                message: format!("'{}' is not a valid label name", key),
                recommendation: Some(
                    "Use letters, digits and underscores, not starting with a digit".to_string(),
                ),
            });
        }
    }
}

/// Names that appear more than once, each reported once, in first-seen order.
fn duplicates<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut result = Vec::new();

    for name in names {
        if !seen.insert(name) && reported.insert(name) {
            result.push(name);
        }
    }

    result
}
