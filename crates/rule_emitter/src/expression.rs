//! Expression templating.
//!
//! A test expression may contain two literal placeholders:
//!
//! | placeholder | replaced with |
//! |-------------|---------------|
//! | `{}`        | `{<identity>}` |
//! | `@SELECTOR` | `<identity>` |
//!
//! where `<identity>` is `instance='<value>'` followed by `,<selector>`
//! when the test has a selector. Every occurrence is replaced.

use crate::errors::Error;
use config_manager::{ResolvedHost, TestTemplate};

#[cfg(test)]
#[path = "expression_tests.rs"]
mod tests;

/// Placeholder replaced with the braced identity clause.
pub const INSTANCE_PLACEHOLDER: &str = "{}";

/// Placeholder replaced with the bare identity clause.
pub const SELECTOR_PLACEHOLDER: &str = "@SELECTOR";

/// Builds the identity clause that scopes a test to a host.
///
/// # Errors
///
/// * `Error::MissingInstance` - The host has no instance for the test's source
pub fn identity_clause(host: &ResolvedHost, test: &TestTemplate) -> Result<String, Error> {
    let instance = host
        .instances
        .get(&test.source)
        .ok_or_else(|| Error::MissingInstance {
            host: host.name.clone(),
            source_name: test.source.clone(),
            test: test.name.clone(),
        })?;

    let mut clause = format!("instance='{}'", instance);
    if !test.selector.is_empty() {
        clause.push(',');
        clause.push_str(&test.selector);
    }

    Ok(clause)
}

/// Replaces every placeholder occurrence in `expr`.
///
/// # Examples
///
/// ```
/// use rule_emitter::expression::substitute_placeholders;
///
/// let expr = substitute_placeholders("node_load1{} > 5", "instance='x7:9100'");
/// assert_eq!(expr, "node_load1{instance='x7:9100'} > 5");
/// ```
pub fn substitute_placeholders(expr: &str, identity: &str) -> String {
    expr.replace(INSTANCE_PLACEHOLDER, &format!("{{{}}}", identity))
        .replace(SELECTOR_PLACEHOLDER, identity)
}

/// Builds the final rule expression: `(<templated expr>) <threshold>`.
pub fn build_expression(expr: &str, identity: &str, threshold: &str) -> String {
    format!("({}) {}", substitute_placeholders(expr, identity), threshold)
}
