//! Turns a resolved configuration into alerting rules.
//!
//! Rules are produced host by host, test by test, and for each test in
//! severity order. A level without a threshold produces nothing.

use crate::{
    errors::Error,
    expression::{build_expression, identity_clause},
    rule::{AlertRule, RuleDocument, RuleFields},
    severity::Severity,
};
use config_manager::{GlobalDefaults, ResolvedConfiguration, ResolvedHost, TestTemplate};
use tracing::{debug, info};

#[cfg(test)]
#[path = "emitter_tests.rs"]
mod tests;

/// Label carrying the host's service level.
pub const SERVICE_LEVEL_LABEL: &str = "servicelevel";

/// Label carrying the host name.
pub const HOST_LABEL: &str = "host";

/// Label carrying the test name.
pub const TEST_LABEL: &str = "test";

/// Builds a [`RuleDocument`] from a [`ResolvedConfiguration`].
#[derive(Debug, Clone, Default)]
pub struct RuleEmitter;

impl RuleEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Emits every rule for every host.
    ///
    /// # Errors
    ///
    /// * `Error::MissingInstance` - A host lacks an instance for a test's source
    pub fn emit(&self, config: &ResolvedConfiguration) -> Result<RuleDocument, Error> {
        let mut rules = Vec::new();

        for host in &config.hosts {
            let before = rules.len();
            for test in &host.tests {
                self.emit_test(&config.defaults, host, test, &mut rules)?;
            }
            debug!(host = %host.name, rules = rules.len() - before, "Emitted host rules");
        }

        info!(rules = rules.len(), "Emitted alerting rules");
        Ok(RuleDocument::single_group(rules))
    }

    fn emit_test(
        &self,
        defaults: &GlobalDefaults,
        host: &ResolvedHost,
        test: &TestTemplate,
        rules: &mut Vec<AlertRule>,
    ) -> Result<(), Error> {
        for severity in Severity::ALL {
            let Some(threshold) = severity.threshold(test) else {
                continue;
            };

            let identity = identity_clause(host, test)?;
            rules.push(AlertRule {
                alert: test.name.clone(),
                expr: build_expression(&test.expr, &identity, threshold),
                for_duration: test.for_duration.clone(),
                severity,
                labels: build_labels(defaults, host, test),
                annotations: build_annotations(severity, host, test),
            });
        }

        Ok(())
    }
}

/// Built-in labels, then host, test and default labels. The first writer of a key wins.
fn build_labels(defaults: &GlobalDefaults, host: &ResolvedHost, test: &TestTemplate) -> RuleFields {
    let mut labels = RuleFields::new();
    labels.insert_if_absent(SERVICE_LEVEL_LABEL, host.service_level.as_str());
    labels.insert_if_absent(HOST_LABEL, host.name.as_str());
    labels.insert_if_absent(TEST_LABEL, test.name.as_str());
    labels.extend_if_absent(&host.labels);
    labels.extend_if_absent(&test.labels);
    labels.extend_if_absent(&defaults.labels);
    labels
}

/// Synthesized annotations, then test and host annotations.
fn build_annotations(severity: Severity, host: &ResolvedHost, test: &TestTemplate) -> RuleFields {
    let mut annotations = RuleFields::new();
    annotations.insert_if_absent("summary", summary(severity, &test.summary));
    annotations.insert_if_absent("description", description(&test.description));
    annotations.extend_if_absent(&test.annotations);
    annotations.extend_if_absent(&host.annotations);
    annotations
}

/// `<level>: <summary> (instance {{$labels.instance}})`
pub fn summary(severity: Severity, text: &str) -> String {
    format!("{}: {} (instance {{{{$labels.instance}}}})", severity, text)
}

/// The test description followed by value and label placeholders.
pub fn description(text: &str) -> String {
    format!("{}\n  Value: {{{{$value}}}}\n  Labels: {{{{$labels}}}}", text)
}
