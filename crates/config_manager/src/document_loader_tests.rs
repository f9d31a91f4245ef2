//! Tests for DocumentLoader

use super::*;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

/// In-memory document source for testing.
struct MemoryDocumentSource {
    documents: HashMap<String, String>,
}

impl MemoryDocumentSource {
    fn new(documents: &[(&str, &str)]) -> Self {
        Self {
            documents: documents
                .iter()
                .map(|(path, content)| (path.to_string(), content.to_string()))
                .collect(),
        }
    }
}

impl DocumentSource for MemoryDocumentSource {
    fn read_document(&self, path: &str) -> ConfigurationResult<String> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| ConfigurationError::FileAccessError {
                path: path.to_string(),
                reason: "not found".to_string(),
            })
    }
}

#[test]
fn test_load_root_without_includes() {
    let source = MemoryDocumentSource::new(&[(
        "config.yml",
        "tests:\n  - name: up\n    expr: up{}\n    source: node\n",
    )]);
    let loader = DocumentLoader::new(Arc::new(source));

    let config = loader.load("config.yml").expect("Failed to load");
    assert_eq!(config.tests.len(), 1);
    assert!(config.hosts.is_empty());
}

#[test]
fn test_load_concatenates_includes_in_order() {
    let source = MemoryDocumentSource::new(&[
        (
            "config.yml",
            "defaults:\n  servicelevel: gold\nload: [a.yml, b.json]\ntests:\n  - name: root\n",
        ),
        ("a.yml", "tests:\n  - name: from_a\nhosts:\n  - name: h1\n"),
        (
            "b.json",
            r#"{"tests": [{"name": "from_b"}], "classes": [{"name": "c1"}]}"#,
        ),
    ]);
    let loader = DocumentLoader::new(Arc::new(source));

    let config = loader.load("config.yml").expect("Failed to load");
    let names: Vec<&str> = config.tests.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["root", "from_a", "from_b"]);
    assert_eq!(config.classes.len(), 1);
    assert_eq!(config.hosts.len(), 1);
    assert_eq!(config.defaults.service_level, "gold");
}

#[test]
fn test_included_defaults_and_load_are_ignored() {
    let source = MemoryDocumentSource::new(&[
        ("config.yml", "load: [a.yml]\n"),
        (
            "a.yml",
            "defaults:\n  for: 1h\nload: [never.yml]\ntests:\n  - name: t\n",
        ),
    ]);
    let loader = DocumentLoader::new(Arc::new(source));

    let config = loader.load("config.yml").expect("Failed to load");
    assert!(config.defaults.for_duration.is_empty());
    assert_eq!(config.tests.len(), 1);
}

#[test]
fn test_missing_include_is_fatal() {
    let source = MemoryDocumentSource::new(&[("config.yml", "load: [missing.yml]\n")]);
    let loader = DocumentLoader::new(Arc::new(source));

    match loader.load("config.yml") {
        Err(ConfigurationError::FileAccessError { path, .. }) => assert_eq!(path, "missing.yml"),
        other => panic!("Expected FileAccessError, got {:?}", other),
    }
}

#[test]
fn test_parse_error_names_offending_include() {
    let source = MemoryDocumentSource::new(&[
        ("config.yml", "load: [bad.yml]\n"),
        ("bad.yml", "tests: {name: [\n"),
    ]);
    let loader = DocumentLoader::new(Arc::new(source));

    match loader.load("config.yml") {
        Err(ConfigurationError::ParseError { path, .. }) => assert_eq!(path, "bad.yml"),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_filesystem_source_reads_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let root_path = temp_dir.path().join("config.yml");
    let include_path = temp_dir.path().join("hosts.toml");

    fs::write(
        &include_path,
        "[[hosts]]\nname = \"h1\"\nclasses = [\"base\"]\n",
    )
    .expect("Failed to write include");
    fs::write(
        &root_path,
        format!("load:\n  - {}\n", include_path.display()),
    )
    .expect("Failed to write root");

    let loader = DocumentLoader::new(Arc::new(FileSystemDocumentSource::new()));
    let config = loader
        .load(&root_path.display().to_string())
        .expect("Failed to load");

    assert_eq!(config.hosts.len(), 1);
    assert_eq!(config.hosts[0].classes, vec!["base"]);
}

#[test]
fn test_filesystem_source_missing_root() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("nope.yml").display().to_string();

    let result = FileSystemDocumentSource::new().read_document(&missing);
    assert!(matches!(
        result,
        Err(ConfigurationError::FileAccessError { .. })
    ));
}
