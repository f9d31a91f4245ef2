//! Helper functions for integration tests.
//!
//! This module provides a throwaway configuration workspace plus assertions
//! over rendered rule documents.

use anyhow::{Context, Result};
use config_manager::FileSystemDocumentSource;
use rule_roller_cli::{generate_rules, GeneratedRules};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Once};
use tempfile::TempDir;
use tracing::debug;

static LOGGING: Once = Once::new();

/// Installs a test-friendly tracing subscriber once per process.
///
/// The filter is read from `RULE_ROLLER_LOG` and defaults to `debug`.
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_env("RULE_ROLLER_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// A temporary directory holding configuration documents.
///
/// The directory is removed when the workspace is dropped.
pub struct ConfigWorkspace {
    dir: TempDir,
}

impl ConfigWorkspace {
    /// Creates an empty workspace.
    pub fn new() -> Result<Self> {
        init_test_logging();
        let dir = TempDir::new().context("Failed to create temporary directory")?;
        Ok(Self { dir })
    }

    /// Absolute path of `name` inside the workspace.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Path of `name` as the string form the loader expects.
    pub fn path_str(&self, name: &str) -> String {
        self.path(name).to_string_lossy().to_string()
    }

    /// Writes a document and returns its path.
    ///
    /// Occurrences of `{dir}` in the content are replaced with the workspace
    /// directory so documents can include their siblings.
    pub fn write(&self, name: &str, content: &str) -> Result<String> {
        let path = self.path(name);
        let dir = self.dir.path().to_string_lossy();
        fs::write(&path, content.replace("{dir}", &dir))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!(path = %path.display(), "Wrote configuration document");
        Ok(self.path_str(name))
    }

    /// Runs the pipeline with `root` as the root document.
    pub fn generate(&self, root: &str) -> Result<GeneratedRules, rule_roller_cli::Error> {
        generate_rules(&self.path_str(root), Arc::new(FileSystemDocumentSource::new()))
    }
}

/// Renders and re-parses the rules of a pipeline run.
///
/// Returns the list under `groups[0].rules`.
pub fn parse_rules(generated: &GeneratedRules) -> Result<Vec<serde_yaml::Value>> {
    let rendered = generated.document.render();
    let parsed: serde_yaml::Value =
        serde_yaml::from_str(&rendered).context("Rendered document is not valid YAML")?;

    let rules = parsed["groups"][0]["rules"]
        .as_sequence()
        .context("Rendered document has no rules sequence")?;
    Ok(rules.clone())
}
