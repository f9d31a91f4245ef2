//! Monitoring configuration management for RuleRoller.
//!
//! This crate loads monitoring documents (test templates, classes and
//! hosts), indexes them in a [`Registry`], and runs the resolution cascade
//! that produces one fully populated test instance per host.
//!
//! ```text
//! DocumentLoader → MonitoringConfig → ConfigurationResolver → ResolvedConfiguration
//! ```
//!
//! Precedence is "most specific wins": host overrides beat class overrides,
//! which beat inherited classes, which beat templates, which beat global
//! defaults.

pub mod class_config;
pub mod document;
pub mod document_loader;
pub mod errors;
pub mod global_defaults;
pub mod host_config;
pub mod merger;
pub mod registry;
pub mod resolved_config;
pub mod resolver;
pub mod test_template;
pub mod validator;


// Re-export for convenient access
pub use class_config::ClassConfig;
pub use document::{DocumentFormat, MonitoringConfig, MonitoringDocument};
pub use document_loader::{DocumentLoader, DocumentSource, FileSystemDocumentSource};
pub use errors::{ConfigurationError, ConfigurationResult, ReferenceKind};
pub use global_defaults::{GlobalDefaults, FALLBACK_FOR_DURATION};
pub use host_config::HostConfig;
pub use merger::ConfigurationMerger;
pub use registry::Registry;
pub use resolved_config::{ResolvedConfiguration, ResolvedHost};
pub use resolver::{ConfigurationResolver, MAX_INHERITANCE_DEPTH};
pub use test_template::TestTemplate;
pub use validator::{ConfigurationValidator, ValidationResult, ValidationWarning};
