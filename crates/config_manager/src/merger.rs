//! Configuration merging engine.
//!
//! This module implements the three merge rules the resolution cascade is
//! built from. All of them share one precedence law: the more specific side
//! is the `to` side, and the `to` side always wins.
//!
//! # Fill-in-blanks
//!
//! Every scalar field of `to` that is empty takes the value from `from`;
//! non-empty fields are never overwritten. Every map key present in `from`
//! but absent in `to` is inserted; existing keys are never overwritten.
//!
//! # Class inheritance
//!
//! The child keeps its service level when set, absorbs missing label and
//! annotation keys, and appends parent test overrides whose name it does not
//! already carry.
//!
//! # Host adoption
//!
//! Like class inheritance, except that a class test override whose name the
//! host already carries is folded into the host's override with
//! fill-in-blanks instead of being skipped.
//!
//! # Examples
//!
//! ```rust
//! use config_manager::{ConfigurationMerger, TestTemplate};
//!
//! let merger = ConfigurationMerger::new();
//! let canonical = TestTemplate {
//!     expr: "node_load1{}".to_string(),
//!     warning: ">= 10".to_string(),
//!     ..TestTemplate::named("node_load1")
//! };
//! let mut host_override = TestTemplate {
//!     warning: ">= 20".to_string(),
//!     ..TestTemplate::named("node_load1")
//! };
//!
//! merger.fill_test(&mut host_override, &canonical);
//! assert_eq!(host_override.expr, "node_load1{}");
//! assert_eq!(host_override.warning, ">= 20");
//! ```

use crate::{
    class_config::ClassConfig,
    host_config::HostConfig,
    test_template::{position_by_name, TestTemplate},
};
use std::collections::BTreeMap;
use tracing::trace;

/// Configuration merging engine.
///
/// This is a stateless component: it mutates the `to` side in place and
/// never touches the `from` side.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationMerger {}

impl ConfigurationMerger {
    /// Creates a new configuration merger.
    pub fn new() -> Self {
        Self {}
    }

    /// Fills every blank field of `to` from `from`.
    ///
    /// The name is the merge key and is left untouched.
    pub fn fill_test(&self, to: &mut TestTemplate, from: &TestTemplate) {
        fill_blank(&mut to.for_duration, &from.for_duration);
        fill_blank(&mut to.expr, &from.expr);
        fill_blank(&mut to.summary, &from.summary);
        fill_blank(&mut to.description, &from.description);
        fill_blank(&mut to.source, &from.source);
        fill_blank(&mut to.selector, &from.selector);
        fill_blank(&mut to.notice, &from.notice);
        fill_blank(&mut to.warning, &from.warning);
        fill_blank(&mut to.critical, &from.critical);
        fill_missing_entries(&mut to.annotations, &from.annotations);
        fill_missing_entries(&mut to.labels, &from.labels);
    }

    /// Merges a parent class into a child class.
    pub fn inherit_class(&self, child: &mut ClassConfig, parent: &ClassConfig) {
        fill_blank(&mut child.service_level, &parent.service_level);
        fill_missing_entries(&mut child.annotations, &parent.annotations);
        fill_missing_entries(&mut child.labels, &parent.labels);

        for test in &parent.tests {
            if position_by_name(&child.tests, &test.name).is_none() {
                trace!(
                    class = %child.name,
                    parent = %parent.name,
                    test = %test.name,
                    "Inheriting test override"
                );
                child.tests.push(test.clone());
            }
        }
    }

    /// Merges an adopted class into a host.
    pub fn adopt_class(&self, host: &mut HostConfig, class: &ClassConfig) {
        fill_blank(&mut host.service_level, &class.service_level);
        fill_missing_entries(&mut host.annotations, &class.annotations);
        fill_missing_entries(&mut host.labels, &class.labels);

        for test in &class.tests {
            match position_by_name(&host.tests, &test.name) {
                Some(idx) => self.fill_test(&mut host.tests[idx], test),
                None => host.tests.push(test.clone()),
            }
        }
    }
}

/// Copies `from` into `to` when `to` is empty.
pub(crate) fn fill_blank(to: &mut String, from: &str) {
    if to.is_empty() {
        *to = from.to_string();
    }
}

/// Inserts every key of `from` that `to` lacks.
pub(crate) fn fill_missing_entries(
    to: &mut BTreeMap<String, String>,
    from: &BTreeMap<String, String>,
) {
    for (key, value) in from {
        to.entry(key.clone()).or_insert_with(|| value.clone());
    }
}

#[cfg(test)]
#[path = "merger_tests.rs"]
mod tests;
