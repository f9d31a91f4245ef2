use super::*;
use config_manager::FileSystemDocumentSource;
use std::fs;
use tempfile::TempDir;

const MAIN_DOCUMENT: &str = r#"
defaults:
  servicelevel: bronze
  labels:
    env: prod
load:
  - TESTS_PATH
classes:
  - name: base
hosts:
  - name: h1
    servicelevel: gold
    class: base
    instances:
      df: "h1:9100"
    tests:
      - name: disk_full
"#;

const TESTS_DOCUMENT: &str = r#"
tests:
  - name: disk_full
    expr: "disk_used_percent{}"
    source: df
    critical: ">= 95"
"#;

fn write_config(dir: &TempDir) -> String {
    let tests_path = dir.path().join("tests.yml");
    fs::write(&tests_path, TESTS_DOCUMENT).expect("Failed to write tests");

    let main_path = dir.path().join("config.yml");
    let main = MAIN_DOCUMENT.replace("TESTS_PATH", &tests_path.to_string_lossy());
    fs::write(&main_path, main).expect("Failed to write config");

    main_path.to_string_lossy().to_string()
}

#[test]
fn test_generate_rules_from_disk() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(&dir);

    let generated = generate_rules(&config_path, Arc::new(FileSystemDocumentSource::new()))
        .expect("Generate failed");

    assert_eq!(generated.document.rule_count(), 1);
    let rule = generated.document.rules().next().expect("No rule");
    assert_eq!(rule.alert, "disk_full");
    assert_eq!(rule.expr, "(disk_used_percent{instance='h1:9100'}) >= 95");
    assert_eq!(rule.for_duration, "5m");
    assert_eq!(rule.labels.get("servicelevel"), Some("gold"));
    assert_eq!(rule.labels.get("env"), Some("prod"));
    assert!(generated.warnings.is_clean());
}

#[test]
fn test_generate_rules_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("absent.yml");

    let result = generate_rules(
        &missing.to_string_lossy(),
        Arc::new(FileSystemDocumentSource::new()),
    );
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_generate_rules_missing_instance() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(&dir);
    let broken = fs::read_to_string(&config_path)
        .expect("Failed to read config")
        .replace("df: \"h1:9100\"", "node: \"h1:9100\"");
    fs::write(&config_path, broken).expect("Failed to write config");

    let result = generate_rules(&config_path, Arc::new(FileSystemDocumentSource::new()));
    assert!(matches!(result, Err(Error::Emit(_))));
}

#[test]
fn test_write_rules_and_resolved() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(&dir);
    let generated = generate_rules(&config_path, Arc::new(FileSystemDocumentSource::new()))
        .expect("Generate failed");

    let mut rules = Vec::new();
    write_rules(&mut rules, &generated.document).expect("Write failed");
    let rules = String::from_utf8(rules).expect("Not UTF-8");
    assert!(rules.starts_with("groups:\n- name: all\n  rules:\n  - alert: disk_full\n"));

    let mut dump = Vec::new();
    write_resolved(&mut dump, &generated.resolved).expect("Dump failed");
    let json: serde_json::Value = serde_json::from_slice(&dump).expect("Invalid JSON");
    assert_eq!(json["hosts"][0]["name"], "h1");
    assert_eq!(json["hosts"][0]["tests"][0]["for"], "5m");
}
