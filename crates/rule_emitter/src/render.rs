//! Text rendering of a [`RuleDocument`].
//!
//! The output is a YAML rule file:
//!
//! ```yaml
//! groups:
//! - name: all
//!   rules:
//!   - alert: disk_full
//!     expr: "(disk_used_percent{instance='h1:9100'}) >= 95"
//!     for: "5m"
//!     labels:
//!       servicelevel: "gold"
//!     annotations:
//!       summary: "critical: disk full (instance {{$labels.instance}})"
//! ```
//!
//! Every value is a double-quoted scalar escaped with JSON string rules,
//! plus `\uNNNN` escapes for DEL, the C1 controls and the Unicode line
//! separators, which YAML does not accept raw. Keys are left bare only
//! when they cannot be mistaken for anything other than a plain string.

use crate::rule::{AlertRule, RuleDocument, RuleFields};
use std::fmt;

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;

/// Plain scalars YAML parsers may resolve to a non-string value.
const RESERVED_WORDS: &[&str] = &[
    "true", "false", "null", "yes", "no", "on", "off", "y", "n", "~",
];

impl RuleDocument {
    /// Renders the document as YAML text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RuleDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.groups.is_empty() {
            return writeln!(f, "groups: []");
        }

        writeln!(f, "groups:")?;
        for group in &self.groups {
            writeln!(f, "- name: {}", key(&group.name))?;
            if group.rules.is_empty() {
                writeln!(f, "  rules: []")?;
                continue;
            }

            writeln!(f, "  rules:")?;
            for rule in &group.rules {
                write_rule(f, rule)?;
            }
        }

        Ok(())
    }
}

fn write_rule(f: &mut fmt::Formatter<'_>, rule: &AlertRule) -> fmt::Result {
    writeln!(f, "  - alert: {}", key(&rule.alert))?;
    writeln!(f, "    expr: {}", quote(&rule.expr))?;
    writeln!(f, "    for: {}", quote(&rule.for_duration))?;
    write_fields(f, "labels", &rule.labels)?;
    write_fields(f, "annotations", &rule.annotations)
}

fn write_fields(f: &mut fmt::Formatter<'_>, name: &str, fields: &RuleFields) -> fmt::Result {
    if fields.is_empty() {
        return writeln!(f, "    {}: {{}}", name);
    }

    writeln!(f, "    {}:", name)?;
    for (k, v) in fields.iter() {
        writeln!(f, "      {}: {}", key(k), quote(v))?;
    }
    Ok(())
}

/// Quotes a value as a double-quoted scalar.
///
/// # Examples
///
/// ```
/// use rule_emitter::render::quote;
///
/// assert_eq!(quote("5m"), "\"5m\"");
/// assert_eq!(quote("a \"b\"\nc"), "\"a \\\"b\\\"\\nc\"");
/// ```
pub fn quote(value: &str) -> String {
    let json = serde_json::Value::String(value.to_string()).to_string();
    if !json.chars().any(needs_yaml_escape) {
        return json;
    }

    let mut quoted = String::with_capacity(json.len() + 8);
    for c in json.chars() {
        if needs_yaml_escape(c) {
            quoted.push_str(&format!("\\u{:04x}", c as u32));
        } else {
            quoted.push(c);
        }
    }
    quoted
}

/// Characters JSON leaves raw but YAML rejects or reads as line breaks.
fn needs_yaml_escape(c: char) -> bool {
    matches!(c, '\u{7f}'..='\u{9f}' | '\u{2028}' | '\u{2029}')
}

/// Returns the key unchanged when it is safe as a plain scalar, quoted otherwise.
pub fn key(value: &str) -> String {
    if is_plain_key(value) {
        value.to_string()
    } else {
        quote(value)
    }
}

/// Whether `value` can be written as a bare YAML key.
pub fn is_plain_key(value: &str) -> bool {
    let mut chars = value.chars();
    let starts_well = match chars.next() {
        Some(c) => c.is_ascii_alphabetic() || c == '_',
        None => false,
    };

    starts_well
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        && !RESERVED_WORDS
            .iter()
            .any(|word| word.eq_ignore_ascii_case(value))
}
