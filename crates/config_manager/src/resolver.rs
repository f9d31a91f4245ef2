//! The resolution cascade.
//!
//! Turns a [`MonitoringConfig`] into a [`ResolvedConfiguration`] in five
//! strictly ordered passes. Each pass reads only what earlier passes wrote.
//!
//! 1. **Templates** - default `for`, require `expr` and `source`.
//! 2. **Classes** - default the service level, fill class test overrides
//!    from their templates.
//! 3. **Inheritance** - merge parent classes into children, parents first.
//! 4. **Adoption** - merge each host's classes into the host, in order.
//! 5. **Finalization** - fill every host test from its template.
//!
//! Any unresolved name or missing required field aborts the whole run.
//!
//! # Examples
//!
//! ```rust
//! use config_manager::{
//!     ClassConfig, ConfigurationResolver, HostConfig, MonitoringConfig, TestTemplate,
//! };
//!
//! let mut config = MonitoringConfig::default();
//! config.tests.push(TestTemplate {
//!     expr: "disk_used_percent{}".to_string(),
//!     source: "df".to_string(),
//!     critical: ">= 95".to_string(),
//!     ..TestTemplate::named("disk_full")
//! });
//! config.classes.push(ClassConfig::named("base"));
//! let mut host = HostConfig::named("h1");
//! host.classes = vec!["base".to_string()];
//! host.tests.push(TestTemplate::named("disk_full"));
//! config.hosts.push(host);
//!
//! let resolved = ConfigurationResolver::new().resolve(config)?;
//! assert_eq!(resolved.hosts[0].tests[0].for_duration, "5m");
//! # Ok::<(), config_manager::ConfigurationError>(())
//! ```

use crate::{
    document::MonitoringConfig,
    errors::{ConfigurationError, ConfigurationResult},
    global_defaults::GlobalDefaults,
    host_config::HostConfig,
    merger::{fill_blank, ConfigurationMerger},
    registry::Registry,
    resolved_config::{ResolvedConfiguration, ResolvedHost},
};
use tracing::{debug, info};

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;

/// Maximum length of a class inheritance chain.
pub const MAX_INHERITANCE_DEPTH: usize = 16;

/// Mutable state threaded through the resolution passes.
#[derive(Debug)]
struct ResolutionContext {
    defaults: GlobalDefaults,
    registry: Registry,
    hosts: Vec<HostConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Pending,
    InProgress,
    Done,
}

/// Runs the resolution cascade.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationResolver {
    merger: ConfigurationMerger,
}

impl ConfigurationResolver {
    pub fn new() -> Self {
        Self {
            merger: ConfigurationMerger::new(),
        }
    }

    /// Resolves all templates, classes and hosts.
    ///
    /// # Errors
    ///
    /// * `ConfigurationError::RequiredFieldMissing` - A template has no `expr` or `source`
    /// * `ConfigurationError::UnresolvedReference` - A class or test name is not defined
    /// * `ConfigurationError::InheritanceCycle` - A class inherits from itself, directly or not
    /// * `ConfigurationError::InheritanceTooDeep` - An inheritance chain is too long
    pub fn resolve(&self, config: MonitoringConfig) -> ConfigurationResult<ResolvedConfiguration> {
        let mut ctx = ResolutionContext {
            defaults: config.defaults,
            registry: Registry::new(config.tests, config.classes),
            hosts: config.hosts,
        };

        self.normalize_templates(&mut ctx)?;
        self.normalize_classes(&mut ctx)?;
        self.inherit_classes(&mut ctx)?;
        self.adopt_classes(&mut ctx)?;
        self.finalize_host_tests(&mut ctx)?;

        let resolved = ResolvedConfiguration {
            defaults: ctx.defaults,
            hosts: ctx.hosts.into_iter().map(ResolvedHost::from).collect(),
        };

        info!(
            hosts = resolved.hosts.len(),
            tests = resolved.hosts.iter().map(|h| h.tests.len()).sum::<usize>(),
            "Resolved monitoring configuration"
        );

        Ok(resolved)
    }

    /// Pass 1: default `for` and require `expr` and `source`.
    fn normalize_templates(&self, ctx: &mut ResolutionContext) -> ConfigurationResult<()> {
        let fallback = ctx.defaults.effective_for_duration().to_string();

        for template in ctx.registry.templates_mut() {
            fill_blank(&mut template.for_duration, &fallback);

            for (field, value) in [("expr", &template.expr), ("source", &template.source)] {
                if value.is_empty() {
                    return Err(ConfigurationError::RequiredFieldMissing {
                        entity: format!("test '{}'", template.name),
                        field: field.to_string(),
                    });
                }
            }
        }

        debug!(
            templates = ctx.registry.templates().len(),
            "Normalized test templates"
        );
        Ok(())
    }

    /// Pass 2: default class service levels and fill class test overrides.
    fn normalize_classes(&self, ctx: &mut ResolutionContext) -> ConfigurationResult<()> {
        for idx in 0..ctx.registry.classes().len() {
            let class = &mut ctx.registry.classes_mut()[idx];
            fill_blank(&mut class.service_level, &ctx.defaults.service_level);
            let referenced_by = format!("class '{}'", class.name);
            let mut tests = std::mem::take(&mut class.tests);

            for test in tests.iter_mut() {
                let template = ctx
                    .registry
                    .find_template_or_fail(&test.name, &referenced_by)?;
                self.merger.fill_test(test, template);
            }

            ctx.registry.classes_mut()[idx].tests = tests;
        }

        debug!(classes = ctx.registry.classes().len(), "Normalized classes");
        Ok(())
    }

    /// Pass 3: merge parent classes into their children.
    ///
    /// Parents are fully resolved before they are merged, so inheritance is
    /// transitive regardless of declaration order.
    fn inherit_classes(&self, ctx: &mut ResolutionContext) -> ConfigurationResult<()> {
        let mut states = vec![VisitState::Pending; ctx.registry.classes().len()];
        let mut chain = Vec::new();

        for idx in 0..states.len() {
            self.resolve_inheritance(ctx, idx, &mut states, &mut chain)?;
        }

        Ok(())
    }

    fn resolve_inheritance(
        &self,
        ctx: &mut ResolutionContext,
        idx: usize,
        states: &mut [VisitState],
        chain: &mut Vec<String>,
    ) -> ConfigurationResult<()> {
        let name = ctx.registry.classes()[idx].name.clone();

        match states[idx] {
            VisitState::Done => return Ok(()),
            VisitState::InProgress => {
                let mut cycle = chain.clone();
                cycle.push(name.clone());
                return Err(ConfigurationError::InheritanceCycle { class: name, chain: cycle });
            }
            VisitState::Pending => {}
        }

        if chain.len() >= MAX_INHERITANCE_DEPTH {
            return Err(ConfigurationError::InheritanceTooDeep {
                class: name,
                depth: MAX_INHERITANCE_DEPTH,
            });
        }

        states[idx] = VisitState::InProgress;
        chain.push(name.clone());

        let parents = ctx.registry.classes()[idx].inherits.clone();
        let referenced_by = format!("class '{}'", name);
        for parent_name in &parents {
            let parent_idx = ctx
                .registry
                .class_index_or_fail(parent_name, &referenced_by)?;
            self.resolve_inheritance(ctx, parent_idx, states, chain)?;

            let parent = ctx.registry.classes()[parent_idx].clone();
            debug!(class = %name, parent = %parent.name, "Merging parent class");
            self.merger
                .inherit_class(&mut ctx.registry.classes_mut()[idx], &parent);
        }

        chain.pop();
        states[idx] = VisitState::Done;
        Ok(())
    }

    /// Pass 4: merge each host's classes into the host, in list order.
    fn adopt_classes(&self, ctx: &mut ResolutionContext) -> ConfigurationResult<()> {
        for host in ctx.hosts.iter_mut() {
            let referenced_by = format!("host '{}'", host.name);
            let class_names: Vec<String> = host
                .class_references()
                .into_iter()
                .map(str::to_string)
                .collect();

            for class_name in &class_names {
                let class = ctx
                    .registry
                    .find_class_or_fail(class_name, &referenced_by)?;
                debug!(host = %host.name, class = %class.name, "Adopting class");
                self.merger.adopt_class(host, class);
            }

            // Hosts without any class still get a service level.
            fill_blank(&mut host.service_level, &ctx.defaults.service_level);
        }

        Ok(())
    }

    /// Pass 5: fill every host test from its canonical template.
    fn finalize_host_tests(&self, ctx: &mut ResolutionContext) -> ConfigurationResult<()> {
        for host in ctx.hosts.iter_mut() {
            let referenced_by = format!("host '{}'", host.name);
            for test in host.tests.iter_mut() {
                let template = ctx
                    .registry
                    .find_template_or_fail(&test.name, &referenced_by)?;
                self.merger.fill_test(test, template);
            }
            debug!(host = %host.name, tests = host.tests.len(), "Finalized host tests");
        }

        Ok(())
    }
}
