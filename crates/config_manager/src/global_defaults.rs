//! Process-wide fallback values.
//!
//! `GlobalDefaults` is read once from the root document and never changed
//! afterwards. Defaults carried in included documents are ignored.
//!
//! # YAML Format
//!
//! ```yaml
//! defaults:
//!   for: 10m
//!   servicelevel: bronze
//!   labels:
//!     env: production
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[cfg(test)]
#[path = "global_defaults_tests.rs"]
mod tests;

/// Duration used when neither the template nor the defaults set one.
pub const FALLBACK_FOR_DURATION: &str = "5m";

/// Fallback values applied by the resolution cascade.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalDefaults {
    /// Default `for` duration for templates that do not set one.
    #[serde(rename = "for", alias = "forDuration")]
    pub for_duration: String,

    /// Default service level for classes that do not set one.
    #[serde(rename = "servicelevel", alias = "serviceLevel", alias = "service_level")]
    pub service_level: String,

    /// Labels added to every rule unless a more specific source sets the key.
    pub labels: BTreeMap<String, String>,
}

impl GlobalDefaults {
    /// Returns the effective default `for` duration.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_manager::GlobalDefaults;
    ///
    /// assert_eq!(GlobalDefaults::default().effective_for_duration(), "5m");
    /// ```
    pub fn effective_for_duration(&self) -> &str {
        if self.for_duration.is_empty() {
            FALLBACK_FOR_DURATION
        } else {
            &self.for_duration
        }
    }
}
