//! Classes: named bundles of shared monitoring configuration.
//!
//! A class groups test overrides, labels and annotations that a set of hosts
//! have in common. Classes may inherit from other classes; the child always
//! wins over its parents.
//!
//! # YAML Format
//!
//! ```yaml
//! classes:
//!   - name: linux
//!     servicelevel: gold
//!     labels:
//!       os: linux
//!     tests:
//!       - name: node_load1
//!         warning: ">= 8"
//!   - name: webserver
//!     inherits: [linux]
//!     tests:
//!       - name: http_up
//! ```

use crate::test_template::TestTemplate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[cfg(test)]
#[path = "class_config_tests.rs"]
mod tests;

/// A named bundle of test overrides and defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassConfig {
    pub name: String,

    /// Parent classes, merged in list order.
    pub inherits: Vec<String>,

    /// Free-form service level tag.
    #[serde(rename = "servicelevel", alias = "serviceLevel", alias = "service_level")]
    pub service_level: String,

    pub annotations: BTreeMap<String, String>,

    pub labels: BTreeMap<String, String>,

    /// Overrides for the canonical templates of the same name.
    pub tests: Vec<TestTemplate>,
}

impl ClassConfig {
    /// Creates an empty class with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
