//! Monitoring documents and the merged configuration built from them.
//!
//! A root document may list further documents under `load`. Included
//! documents contribute only their `tests`, `classes` and `hosts`; their own
//! `defaults` and `load` entries are ignored.

use crate::{
    class_config::ClassConfig,
    errors::{ConfigurationError, ConfigurationResult},
    global_defaults::GlobalDefaults,
    host_config::HostConfig,
    test_template::TestTemplate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;

/// Serialization format of a monitoring document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
    Toml,
}

impl DocumentFormat {
    /// Picks the format from the file extension. Unknown extensions are YAML.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_manager::DocumentFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(DocumentFormat::from_path(Path::new("hosts.json")), DocumentFormat::Json);
    /// assert_eq!(DocumentFormat::from_path(Path::new("config.yml")), DocumentFormat::Yaml);
    /// ```
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }
}

/// One parsed input document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringDocument {
    pub defaults: GlobalDefaults,

    /// Additional documents to merge in, in order.
    pub load: Vec<String>,

    pub tests: Vec<TestTemplate>,

    pub classes: Vec<ClassConfig>,

    pub hosts: Vec<HostConfig>,
}

impl MonitoringDocument {
    /// Parses a document from text.
    ///
    /// `origin` is only used to label parse errors.
    pub fn parse(content: &str, format: DocumentFormat, origin: &str) -> ConfigurationResult<Self> {
        let parsed = match format {
            DocumentFormat::Yaml => {
                if content.trim().is_empty() {
                    return Ok(Self::default());
                }
                serde_yaml::from_str(content).map_err(|e| e.to_string())
            }
            DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            DocumentFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|reason| ConfigurationError::ParseError {
            path: origin.to_string(),
            reason,
        })
    }
}

/// The complete input of a run: root defaults plus the concatenated
/// collections of the root document and every included document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MonitoringConfig {
    pub defaults: GlobalDefaults,
    pub tests: Vec<TestTemplate>,
    pub classes: Vec<ClassConfig>,
    pub hosts: Vec<HostConfig>,
}

impl MonitoringConfig {
    /// Starts a configuration from the root document.
    pub fn from_root(root: MonitoringDocument) -> Self {
        Self {
            defaults: root.defaults,
            tests: root.tests,
            classes: root.classes,
            hosts: root.hosts,
        }
    }

    /// Appends the collections of an included document.
    ///
    /// Entries are concatenated in load order. Names are not deduplicated.
    pub fn include(&mut self, document: MonitoringDocument) {
        self.tests.extend(document.tests);
        self.classes.extend(document.classes);
        self.hosts.extend(document.hosts);
    }
}
