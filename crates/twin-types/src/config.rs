//! Configuration types for Twin.
//!
//! `TwinConfig` represents the `twin.toml` file in the data directory. It
//! controls where each resource file lives and how logs are emitted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::profile::ResourceKind;

/// Top-level configuration, loaded from `{data_dir}/twin.toml`.
///
/// All fields have defaults, so an empty file is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TwinConfig {
    #[serde(default)]
    pub resources: ResourcePaths,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// File locations of the four resources.
///
/// Relative paths are resolved against the data directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourcePaths {
    #[serde(default = "default_facts")]
    pub facts: PathBuf,
    #[serde(default = "default_summary")]
    pub summary: PathBuf,
    #[serde(default = "default_linkedin")]
    pub linkedin: PathBuf,
    #[serde(default = "default_style")]
    pub style: PathBuf,
}

fn default_facts() -> PathBuf {
    PathBuf::from(ResourceKind::Facts.default_file_name())
}

fn default_summary() -> PathBuf {
    PathBuf::from(ResourceKind::Summary.default_file_name())
}

fn default_linkedin() -> PathBuf {
    PathBuf::from(ResourceKind::LinkedIn.default_file_name())
}

fn default_style() -> PathBuf {
    PathBuf::from(ResourceKind::Style.default_file_name())
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            facts: default_facts(),
            summary: default_summary(),
            linkedin: default_linkedin(),
            style: default_style(),
        }
    }
}

impl ResourcePaths {
    /// Configured path for a resource, as written in the config.
    pub fn path_for(&self, kind: ResourceKind) -> &Path {
        match kind {
            ResourceKind::Facts => &self.facts,
            ResourceKind::Summary => &self.summary,
            ResourceKind::LinkedIn => &self.linkedin,
            ResourceKind::Style => &self.style,
        }
    }

    /// Absolute location of a resource inside `data_dir`.
    ///
    /// Absolute configured paths are returned unchanged.
    pub fn resolve(&self, data_dir: &Path, kind: ResourceKind) -> PathBuf {
        data_dir.join(self.path_for(kind))
    }
}

/// Log output settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit logs as JSON lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,

    /// Bridge spans to OpenTelemetry (stdout exporter).
    ///
    /// Spans are written to stdout alongside command output, so leave this
    /// off when piping `twin prompt` into another program.
    #[serde(default)]
    pub otel: bool,
}
