//! In-memory model of the emitted rule document.
//!
//! ```text
//! RuleDocument
//! └── groups: [RuleGroup]
//!     └── rules: [AlertRule]
//!         ├── labels: RuleFields
//!         └── annotations: RuleFields
//! ```

use crate::severity::Severity;

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;

/// Name of the single group every rule is emitted into.
pub const DEFAULT_GROUP_NAME: &str = "all";

/// Ordered key/value fields where the first writer of a key wins.
///
/// Insertion order is kept so rendered output lists built-in fields before
/// the ones merged in from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleFields {
    entries: Vec<(String, String)>,
}

impl RuleFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the entry unless the key is already present.
    ///
    /// Returns `true` when the entry was inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_emitter::RuleFields;
    ///
    /// let mut labels = RuleFields::new();
    /// assert!(labels.insert_if_absent("host", "h1"));
    /// assert!(!labels.insert_if_absent("host", "h2"));
    /// assert_eq!(labels.get("host"), Some("h1"));
    /// ```
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.contains_key(&key) {
            return false;
        }
        self.entries.push((key, value.into()));
        true
    }

    /// Inserts every entry of `source` whose key is not yet present.
    pub fn extend_if_absent<'a, I>(&mut self, source: I)
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (key, value) in source {
            self.insert_if_absent(key.as_str(), value.as_str());
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One alerting rule for a (host, test, severity) triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRule {
    pub alert: String,
    pub expr: String,
    pub for_duration: String,
    pub severity: Severity,
    pub labels: RuleFields,
    pub annotations: RuleFields,
}

/// A named group of rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleGroup {
    pub name: String,
    pub rules: Vec<AlertRule>,
}

impl RuleGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }
}

/// The complete rule document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDocument {
    pub groups: Vec<RuleGroup>,
}

impl RuleDocument {
    /// Creates a document holding a single group of the given rules.
    pub fn single_group(rules: Vec<AlertRule>) -> Self {
        let mut group = RuleGroup::new(DEFAULT_GROUP_NAME);
        group.rules = rules;
        Self {
            groups: vec![group],
        }
    }

    /// Iterates over every rule across all groups.
    pub fn rules(&self) -> impl Iterator<Item = &AlertRule> {
        self.groups.iter().flat_map(|g| g.rules.iter())
    }

    pub fn rule_count(&self) -> usize {
        self.groups.iter().map(|g| g.rules.len()).sum()
    }
}

impl Default for RuleDocument {
    fn default() -> Self {
        Self::single_group(Vec::new())
    }
}
