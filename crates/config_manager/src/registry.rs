//! Name-keyed lookup over test templates and classes.
//!
//! The registry owns the canonical template list and the class list. Lookup
//! is an exact name match; when several entries share a name the first one
//! in load order wins. Failing lookups are fatal and name the entity that
//! made the reference.

use crate::{
    class_config::ClassConfig,
    errors::{ConfigurationError, ConfigurationResult, ReferenceKind},
    test_template::TestTemplate,
};

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

/// In-memory index of templates and classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    templates: Vec<TestTemplate>,
    classes: Vec<ClassConfig>,
}

impl Registry {
    /// Creates a registry over the given collections, keeping their order.
    pub fn new(templates: Vec<TestTemplate>, classes: Vec<ClassConfig>) -> Self {
        Self { templates, classes }
    }

    pub fn templates(&self) -> &[TestTemplate] {
        &self.templates
    }

    pub fn classes(&self) -> &[ClassConfig] {
        &self.classes
    }

    pub(crate) fn templates_mut(&mut self) -> &mut [TestTemplate] {
        &mut self.templates
    }

    pub(crate) fn classes_mut(&mut self) -> &mut [ClassConfig] {
        &mut self.classes
    }

    /// Finds the first template with the given name.
    pub fn find_template(&self, name: &str) -> Option<&TestTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Finds the first template with the given name or fails.
    ///
    /// `referenced_by` describes the entity holding the reference, e.g.
    /// `"class 'linux'"`, and ends up in the error.
    ///
    /// # Errors
    ///
    /// * `ConfigurationError::UnresolvedReference` - No template has that name
    pub fn find_template_or_fail(
        &self,
        name: &str,
        referenced_by: &str,
    ) -> ConfigurationResult<&TestTemplate> {
        self.find_template(name)
            .ok_or_else(|| unresolved(ReferenceKind::Test, name, referenced_by))
    }

    /// Finds the first class with the given name.
    pub fn find_class(&self, name: &str) -> Option<&ClassConfig> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Finds the first class with the given name or fails.
    ///
    /// # Errors
    ///
    /// * `ConfigurationError::UnresolvedReference` - No class has that name
    pub fn find_class_or_fail(
        &self,
        name: &str,
        referenced_by: &str,
    ) -> ConfigurationResult<&ClassConfig> {
        self.find_class(name)
            .ok_or_else(|| unresolved(ReferenceKind::Class, name, referenced_by))
    }

    /// Position of the first class with the given name, or an error.
    pub(crate) fn class_index_or_fail(
        &self,
        name: &str,
        referenced_by: &str,
    ) -> ConfigurationResult<usize> {
        self.classes
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| unresolved(ReferenceKind::Class, name, referenced_by))
    }
}

fn unresolved(kind: ReferenceKind, name: &str, referenced_by: &str) -> ConfigurationError {
    ConfigurationError::UnresolvedReference {
        kind,
        name: name.to_string(),
        referenced_by: referenced_by.to_string(),
    }
}
