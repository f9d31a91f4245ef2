//! Alerting rule emission for RuleRoller.
//!
//! Consumes a [`config_manager::ResolvedConfiguration`] and produces a
//! [`RuleDocument`]: one rule per host, test and monitored severity, in a
//! single group named `all`. [`RuleDocument::render`] writes it as YAML.

pub mod emitter;
pub mod errors;
pub mod expression;
pub mod render;
pub mod rule;
pub mod severity;

pub use emitter::RuleEmitter;
pub use errors::Error;
pub use rule::{AlertRule, RuleDocument, RuleFields, RuleGroup, DEFAULT_GROUP_NAME};
pub use severity::Severity;
