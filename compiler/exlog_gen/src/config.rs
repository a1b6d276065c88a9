//! Generator configuration.

/// Configuration for a generation run.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct GenConfig {
    /// Name of the marker function and of the fluent method.
    pub marker_name: String,
    /// Name of the fluent extension trait in the emitted unit.
    pub fluent_trait: String,
    /// Path the emitted unit uses to reach the runtime crate.
    pub runtime_crate: String,
    /// Stand-in for a call whose type argument the front-end could not resolve.
    pub type_parameter: String,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            marker_name: "log".to_string(),
            fluent_trait: "Log".to_string(),
            runtime_crate: "::exlog_rt".to_string(),
            type_parameter: "T".to_string(),
        }
    }
}

impl GenConfig {
    #[must_use]
    pub fn with_marker_name(mut self, name: impl Into<String>) -> Self {
        self.marker_name = name.into();
        self
    }

    #[must_use]
    pub fn with_runtime_crate(mut self, path: impl Into<String>) -> Self {
        self.runtime_crate = path.into();
        self
    }
}
