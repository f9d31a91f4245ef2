use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Error types that can occur while emitting alerting rules.
///
/// Emission never produces partial output: the first error aborts the whole
/// rule document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A host does not map the source a test needs to an instance.
    ///
    /// Every test active on a host needs `instances[test.source]`; without
    /// it the rule expression cannot be scoped to the host.
    #[error("Source instance for '{source_name}' undefined for host '{host}' (test '{test}')")]
    MissingInstance {
        /// The host being emitted
        host: String,
        /// The source name the test refers to
        source_name: String,
        /// The test that needed the instance
        test: String,
    },
}
