//! Hosts: concrete monitored machines.
//!
//! A host adopts one or more classes and supplies the concrete instance
//! identifiers for every source its tests use.
//!
//! # YAML Format
//!
//! ```yaml
//! hosts:
//!   - name: x7
//!     classes: [linux, webserver]
//!     instances:
//!       node: x7.example.org:9100
//!     tests:
//!       - name: node_load1
//!         critical: ">= 40"
//! ```
//!
//! The single-class spelling `class: linux` is also accepted and is treated
//! as a one-element list placed before any `classes` entries.

use crate::test_template::TestTemplate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[cfg(test)]
#[path = "host_config_tests.rs"]
mod tests;

/// A concrete monitored entity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub name: String,

    /// Single class reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// Ordered class references.
    pub classes: Vec<String>,

    #[serde(rename = "servicelevel", alias = "serviceLevel", alias = "service_level")]
    pub service_level: String,

    /// Source name to concrete instance identifier, e.g. `node -> x7:9100`.
    pub instances: BTreeMap<String, String>,

    pub annotations: BTreeMap<String, String>,

    pub labels: BTreeMap<String, String>,

    /// Host-local test overrides.
    pub tests: Vec<TestTemplate>,
}

impl HostConfig {
    /// Creates an empty host with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Returns the classes this host adopts, in application order.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_manager::HostConfig;
    ///
    /// let mut host = HostConfig::named("x7");
    /// host.class = Some("linux".to_string());
    /// host.classes = vec!["webserver".to_string()];
    ///
    /// assert_eq!(host.class_references(), vec!["linux", "webserver"]);
    /// ```
    pub fn class_references(&self) -> Vec<&str> {
        self.class
            .iter()
            .chain(self.classes.iter())
            .map(String::as_str)
            .filter(|name| !name.is_empty())
            .collect()
    }
}
