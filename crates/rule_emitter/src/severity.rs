//! Severity levels and threshold selection.

use config_manager::TestTemplate;
use std::fmt;

#[cfg(test)]
#[path = "severity_tests.rs"]
mod tests;

/// One of the three independently gated alert levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Notice,
    Warning,
    Critical,
}

impl Severity {
    /// All levels in emission order.
    pub const ALL: [Severity; 3] = [Severity::Notice, Severity::Warning, Severity::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }

    /// Returns the test's threshold for this level, or `None` when the level
    /// is not monitored.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_manager::TestTemplate;
    /// use rule_emitter::Severity;
    ///
    /// let test = TestTemplate {
    ///     warning: ">= 10".to_string(),
    ///     ..TestTemplate::named("node_load1")
    /// };
    /// assert_eq!(Severity::Warning.threshold(&test), Some(">= 10"));
    /// assert_eq!(Severity::Critical.threshold(&test), None);
    /// ```
    pub fn threshold<'a>(&self, test: &'a TestTemplate) -> Option<&'a str> {
        let value = match self {
            Self::Notice => &test.notice,
            Self::Warning => &test.warning,
            Self::Critical => &test.critical,
        };

        if value.is_empty() {
            None
        } else {
            Some(value.as_str())
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
