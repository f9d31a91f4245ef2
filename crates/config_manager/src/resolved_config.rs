//! Resolved configuration: the output of the resolution cascade.
//!
//! Every host carries fully populated test instances; nothing downstream
//! needs to consult templates, classes or defaults again, except for the
//! default labels the emitter appends last.

use crate::{global_defaults::GlobalDefaults, host_config::HostConfig, test_template::TestTemplate};
use serde::Serialize;
use std::collections::BTreeMap;

/// A host after class adoption and test finalization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ResolvedHost {
    pub name: String,
    pub service_level: String,
    pub instances: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
    pub labels: BTreeMap<String, String>,

    /// Finalized tests, in the order they were attached to the host.
    pub tests: Vec<TestTemplate>,
}

impl From<HostConfig> for ResolvedHost {
    fn from(host: HostConfig) -> Self {
        Self {
            name: host.name,
            service_level: host.service_level,
            instances: host.instances,
            annotations: host.annotations,
            labels: host.labels,
            tests: host.tests,
        }
    }
}

/// Fully resolved configuration ready for rule emission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ResolvedConfiguration {
    pub defaults: GlobalDefaults,
    pub hosts: Vec<ResolvedHost>,
}

impl ResolvedConfiguration {
    /// Finds a resolved host by name.
    pub fn host(&self, name: &str) -> Option<&ResolvedHost> {
        self.hosts.iter().find(|h| h.name == name)
    }
}

impl ResolvedHost {
    /// Finds a finalized test on this host by name.
    pub fn test(&self, name: &str) -> Option<&TestTemplate> {
        self.tests.iter().find(|t| t.name == name)
    }
}
