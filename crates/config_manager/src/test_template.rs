//! Test templates: named, reusable alert conditions.
//!
//! The same shape is used for three things:
//! - the canonical template in the top-level `tests` list,
//! - partially-populated overrides attached to a class,
//! - partially-populated overrides attached to a host.
//!
//! An empty string means "not set" for every scalar field. Overrides are
//! completed by the fill-in-blanks merge in [`crate::merger`].
//!
//! # YAML Format
//!
//! ```yaml
//! tests:
//!   - name: node_load1
//!     expr: "node_load1{}"
//!     source: node
//!     summary: high load
//!     warning: ">= 10"
//!     critical: ">= 20"
//!     labels:
//!       team: infra
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[cfg(test)]
#[path = "test_template_tests.rs"]
mod tests;

/// A named alert condition with per-severity thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TestTemplate {
    /// Unique key of the template. Overrides refer to templates by this name.
    pub name: String,

    /// Minimum duration the condition must hold before the alert fires.
    #[serde(rename = "for", alias = "forDuration")]
    pub for_duration: String,

    /// Query expression. May contain the `{}` and `@SELECTOR` placeholders.
    pub expr: String,

    pub summary: String,

    pub description: String,

    /// Logical name of the instance selector a host must supply.
    pub source: String,

    /// Extra selector fragment appended to the instance identity clause.
    pub selector: String,

    /// Notice threshold. Empty means no notice rule.
    pub notice: String,

    /// Warning threshold. Empty means no warning rule.
    pub warning: String,

    /// Critical threshold. Empty means no critical rule.
    pub critical: String,

    pub annotations: BTreeMap<String, String>,

    pub labels: BTreeMap<String, String>,
}

impl TestTemplate {
    /// Creates an override that only carries a name.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_manager::TestTemplate;
    ///
    /// let test = TestTemplate::named("disk_full");
    /// assert_eq!(test.name, "disk_full");
    /// assert!(test.expr.is_empty());
    /// ```
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Returns `true` when no severity level has a threshold.
    pub fn has_no_thresholds(&self) -> bool {
        self.notice.is_empty() && self.warning.is_empty() && self.critical.is_empty()
    }
}

/// Finds the position of the first override with the given name.
pub(crate) fn position_by_name(tests: &[TestTemplate], name: &str) -> Option<usize> {
    tests.iter().position(|t| t.name == name)
}
