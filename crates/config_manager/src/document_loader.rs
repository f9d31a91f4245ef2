//! Document loading interface and implementation.
//!
//! Reads the root monitoring document and every document it lists under
//! `load`, and concatenates them into one [`MonitoringConfig`].
//!
//! # Architecture
//!
//! ```text
//! DocumentLoader
//!     ↓ depends on (abstraction)
//! DocumentSource trait
//!     ↑ implemented by
//! FileSystemDocumentSource
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use config_manager::{DocumentLoader, FileSystemDocumentSource};
//! use std::sync::Arc;
//!
//! let loader = DocumentLoader::new(Arc::new(FileSystemDocumentSource::new()));
//! let config = loader.load("config.yml")?;
//! println!("{} hosts", config.hosts.len());
//! # Ok::<(), config_manager::ConfigurationError>(())
//! ```

use crate::{
    document::{DocumentFormat, MonitoringConfig, MonitoringDocument},
    errors::{ConfigurationError, ConfigurationResult},
};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

#[cfg(test)]
#[path = "document_loader_tests.rs"]
mod tests;

/// Interface for reading raw document text.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait DocumentSource: Send + Sync {
    /// Reads the full text of the document at `path`.
    ///
    /// # Errors
    ///
    /// * `ConfigurationError::FileAccessError` - The document cannot be read
    fn read_document(&self, path: &str) -> ConfigurationResult<String>;
}

/// Reads documents from the local filesystem.
///
/// Relative paths resolve against the process working directory.
#[derive(Debug, Clone, Default)]
pub struct FileSystemDocumentSource;

impl FileSystemDocumentSource {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentSource for FileSystemDocumentSource {
    fn read_document(&self, path: &str) -> ConfigurationResult<String> {
        std::fs::read_to_string(path).map_err(|e| ConfigurationError::FileAccessError {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Loads a root document plus its includes.
pub struct DocumentLoader {
    source: Arc<dyn DocumentSource>,
}

impl DocumentLoader {
    /// Creates a loader reading through the given source.
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        Self { source }
    }

    /// Loads the root document at `root_path` and every document it includes.
    ///
    /// Includes are read in listed order. Inclusion is not recursive: `load`
    /// entries inside included documents are ignored, as are their defaults.
    ///
    /// # Errors
    ///
    /// * `ConfigurationError::FileAccessError` - A document cannot be read
    /// * `ConfigurationError::ParseError` - A document is not valid for its format
    pub fn load(&self, root_path: &str) -> ConfigurationResult<MonitoringConfig> {
        let root = self.load_document(root_path)?;
        let includes = root.load.clone();
        let mut config = MonitoringConfig::from_root(root);

        for include in &includes {
            let document = self.load_document(include)?;
            if !document.load.is_empty() {
                debug!(
                    path = %include,
                    ignored = document.load.len(),
                    "Ignoring nested load entries in included document"
                );
            }
            config.include(document);
        }

        info!(
            root = %root_path,
            includes = includes.len(),
            tests = config.tests.len(),
            classes = config.classes.len(),
            hosts = config.hosts.len(),
            "Loaded monitoring configuration"
        );

        Ok(config)
    }

    fn load_document(&self, path: &str) -> ConfigurationResult<MonitoringDocument> {
        debug!(path = %path, "Reading monitoring document");
        let content = self.source.read_document(path)?;
        MonitoringDocument::parse(&content, DocumentFormat::from_path(Path::new(path)), path)
    }
}
