//! Artifact envelope and save options

use crate::pipeline::ScoringPipeline;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bumped whenever the serialized pipeline layout changes incompatibly.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Metadata stored alongside the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub name: String,
    pub format_version: u32,
    pub created_at: DateTime<Utc>,
}

impl ArtifactMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            format_version: ARTIFACT_FORMAT_VERSION,
            created_at: Utc::now(),
        }
    }
}

/// The serialized unit: metadata envelope plus the frozen pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub metadata: ArtifactMetadata,
    pub pipeline: ScoringPipeline,
}

/// Options for saving.
#[derive(Debug, Clone)]
pub struct SaveConfig {
    /// Pretty-print the JSON output
    pub pretty: bool,

    /// Artifact name recorded in the metadata
    pub name: String,
}

impl SaveConfig {
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            name: "survival-pipeline".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_carries_current_version() {
        let meta = ArtifactMetadata::new("test");
        assert_eq!(meta.format_version, ARTIFACT_FORMAT_VERSION);
        assert_eq!(meta.name, "test");
    }

    #[test]
    fn test_save_config_builder() {
        let config = SaveConfig::default()
            .with_pretty(false)
            .with_name("other");
        assert!(!config.pretty);
        assert_eq!(config.name, "other");
    }
}
