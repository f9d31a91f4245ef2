//! Test fixtures for integration tests.
//!
//! Configuration documents shared across test files. Paths inside `load`
//! lists use the `{dir}` token understood by
//! [`ConfigWorkspace::write`](crate::helpers::ConfigWorkspace::write).

/// One template, one empty class and one host: a single critical rule.
pub const DISK_FULL_SCENARIO: &str = r#"
tests:
  - name: disk_full
    expr: "disk_used_percent{}"
    source: df
    critical: ">= 95"
classes:
  - name: base
hosts:
  - name: h1
    servicelevel: gold
    classes: [base]
    instances:
      df: "h1:9100"
    tests:
      - name: disk_full
"#;

/// Root document of a split configuration.
pub const SPLIT_ROOT: &str = r#"
defaults:
  for: 10m
  servicelevel: bronze
  labels:
    env: production
    team: default-team
load:
  - "{dir}/tests.yml"
  - "{dir}/classes.json"
  - "{dir}/hosts.toml"
"#;

/// Templates for the split configuration.
pub const SPLIT_TESTS: &str = r#"
defaults:
  for: 99h
load:
  - "{dir}/never-read.yml"
tests:
  - name: node_load1
    expr: "node_load1{} > 5"
    source: node
    summary: load is high
    description: Load average
    notice: ">= 1"
    warning: ">= 2"
    critical: ">= 3"
  - name: http_up
    expr: "probe_success{@SELECTOR}"
    source: blackbox
    selector: "job='http'"
    summary: site down
    critical: "== 0"
    for: 2m
    labels:
      team: web
"#;

/// Classes for the split configuration, as JSON.
pub const SPLIT_CLASSES: &str = r#"
{
  "classes": [
    {
      "name": "linux",
      "servicelevel": "silver",
      "labels": { "os": "linux" },
      "tests": [ { "name": "node_load1", "warning": ">= 4" } ]
    },
    {
      "name": "webserver",
      "inherits": ["linux"],
      "annotations": { "runbook": "https://runbooks/web" },
      "tests": [ { "name": "http_up" } ]
    }
  ]
}
"#;

/// Hosts for the split configuration, as TOML.
pub const SPLIT_HOSTS: &str = r#"
[[hosts]]
name = "web1"
class = "webserver"

[hosts.instances]
node = "web1:9100"
blackbox = "https://web1"

[hosts.labels]
team = "host-team"

[[hosts.tests]]
name = "node_load1"
critical = ">= 9"

[[hosts]]
name = "bare"
"#;
