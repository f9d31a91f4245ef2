//! End-to-end scenarios: configuration documents on disk in, rendered rules out.

use anyhow::{Context, Result};
use integration_tests::fixtures::{
    DISK_FULL_SCENARIO, SPLIT_CLASSES, SPLIT_HOSTS, SPLIT_ROOT, SPLIT_TESTS,
};
use integration_tests::{parse_rules, ConfigWorkspace};
use rule_emitter::Severity;

fn split_workspace() -> Result<ConfigWorkspace> {
    let workspace = ConfigWorkspace::new()?;
    workspace.write("config.yml", SPLIT_ROOT)?;
    workspace.write("tests.yml", SPLIT_TESTS)?;
    workspace.write("classes.json", SPLIT_CLASSES)?;
    workspace.write("hosts.toml", SPLIT_HOSTS)?;
    Ok(workspace)
}

#[test]
fn disk_full_end_to_end() -> Result<()> {
    let workspace = ConfigWorkspace::new()?;
    workspace.write("config.yml", DISK_FULL_SCENARIO)?;

    let generated = workspace.generate("config.yml")?;
    let rules = parse_rules(&generated)?;

    assert_eq!(rules.len(), 1);
    let rule = &rules[0];
    assert_eq!(rule["alert"].as_str(), Some("disk_full"));
    assert_eq!(
        rule["expr"].as_str(),
        Some("(disk_used_percent{instance='h1:9100'}) >= 95")
    );
    assert_eq!(rule["for"].as_str(), Some("5m"));
    assert_eq!(rule["labels"]["servicelevel"].as_str(), Some("gold"));
    assert_eq!(rule["labels"]["host"].as_str(), Some("h1"));
    assert_eq!(rule["labels"]["test"].as_str(), Some("disk_full"));
    assert_eq!(
        rule["labels"].as_mapping().context("labels not a map")?.len(),
        3
    );
    assert_eq!(
        rule["annotations"]["summary"].as_str(),
        Some("critical:  (instance {{$labels.instance}})")
    );
    Ok(())
}

#[test]
fn disk_full_rendered_text_is_stable() -> Result<()> {
    let workspace = ConfigWorkspace::new()?;
    workspace.write("config.yml", DISK_FULL_SCENARIO)?;

    let first = workspace.generate("config.yml")?.document.render();
    let second = workspace.generate("config.yml")?.document.render();

    assert_eq!(first, second);
    assert!(first.starts_with("groups:\n- name: all\n  rules:\n  - alert: disk_full\n"));
    Ok(())
}

#[test]
fn split_configuration_resolves_across_formats() -> Result<()> {
    let workspace = split_workspace()?;
    let generated = workspace.generate("config.yml")?;

    let web1 = generated
        .resolved
        .host("web1")
        .context("web1 not resolved")?;
    // The class's own default service level masks the inherited one.
    assert_eq!(web1.service_level, "bronze");
    assert_eq!(web1.labels.get("os").map(String::as_str), Some("linux"));
    assert_eq!(web1.labels.get("team").map(String::as_str), Some("host-team"));

    let node_load = web1.test("node_load1").context("node_load1 missing")?;
    assert_eq!(node_load.for_duration, "10m");
    assert_eq!(node_load.notice, ">= 1");
    assert_eq!(node_load.warning, ">= 4");
    assert_eq!(node_load.critical, ">= 9");

    let http_up = web1.test("http_up").context("http_up missing")?;
    assert_eq!(http_up.for_duration, "2m");

    let bare = generated.resolved.host("bare").context("bare not resolved")?;
    assert_eq!(bare.service_level, "bronze");
    assert!(bare.tests.is_empty());
    Ok(())
}

#[test]
fn split_configuration_emits_in_host_test_level_order() -> Result<()> {
    let workspace = split_workspace()?;
    let generated = workspace.generate("config.yml")?;

    let emitted: Vec<(&str, Severity)> = generated
        .document
        .rules()
        .map(|r| (r.alert.as_str(), r.severity))
        .collect();
    assert_eq!(
        emitted,
        vec![
            ("node_load1", Severity::Notice),
            ("node_load1", Severity::Warning),
            ("node_load1", Severity::Critical),
            ("http_up", Severity::Critical),
        ]
    );

    let rules = parse_rules(&generated)?;
    assert_eq!(
        rules[1]["expr"].as_str(),
        Some("(node_load1{instance='web1:9100'} > 5) >= 4")
    );
    assert_eq!(
        rules[3]["expr"].as_str(),
        Some("(probe_success{instance='https://web1',job='http'}) == 0")
    );
    Ok(())
}

#[test]
fn split_configuration_label_and_annotation_precedence() -> Result<()> {
    let workspace = split_workspace()?;
    let rules = parse_rules(&workspace.generate("config.yml")?)?;
    let http_up = &rules[3];

    assert_eq!(http_up["labels"]["servicelevel"].as_str(), Some("bronze"));
    assert_eq!(http_up["labels"]["host"].as_str(), Some("web1"));
    assert_eq!(http_up["labels"]["test"].as_str(), Some("http_up"));
    assert_eq!(http_up["labels"]["team"].as_str(), Some("host-team"));
    assert_eq!(http_up["labels"]["os"].as_str(), Some("linux"));
    assert_eq!(http_up["labels"]["env"].as_str(), Some("production"));

    assert_eq!(
        http_up["annotations"]["summary"].as_str(),
        Some("critical: site down (instance {{$labels.instance}})")
    );
    assert_eq!(
        http_up["annotations"]["description"].as_str(),
        Some("\n  Value: {{$value}}\n  Labels: {{$labels}}")
    );
    assert_eq!(
        http_up["annotations"]["runbook"].as_str(),
        Some("https://runbooks/web")
    );
    Ok(())
}

#[test]
fn included_defaults_and_nested_loads_are_ignored() -> Result<()> {
    let workspace = split_workspace()?;
    let generated = workspace.generate("config.yml")?;

    assert_eq!(generated.resolved.defaults.for_duration, "10m");
    assert!(!workspace.path("never-read.yml").exists());
    Ok(())
}

#[test]
fn empty_configuration_renders_empty_group() -> Result<()> {
    let workspace = ConfigWorkspace::new()?;
    workspace.write("config.yml", "")?;

    let generated = workspace.generate("config.yml")?;
    assert_eq!(
        generated.document.render(),
        "groups:\n- name: all\n  rules: []\n"
    );
    Ok(())
}

#[test]
fn lint_warnings_do_not_block_emission() -> Result<()> {
    let workspace = ConfigWorkspace::new()?;
    workspace.write(
        "config.yml",
        r#"
tests:
  - name: quiet
    expr: "up{}"
    source: node
    for: soon
hosts:
  - name: h1
    labels:
      "bad-label": x
    tests:
      - name: quiet
"#,
    )?;

    let generated = workspace.generate("config.yml")?;
    assert_eq!(generated.document.rule_count(), 0);
    assert!(!generated.warnings.is_clean());

    let paths: Vec<&str> = generated
        .warnings
        .warnings
        .iter()
        .map(|w| w.field_path.as_str())
        .collect();
    assert!(paths.contains(&"hosts.h1.labels.bad-label"));
    assert!(paths.contains(&"hosts.h1.tests.quiet.for"));
    Ok(())
}
