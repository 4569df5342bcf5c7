//! Pipeline saving

use super::format::{Artifact, ArtifactMetadata, SaveConfig};
use crate::pipeline::ScoringPipeline;
use crate::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Persist a fitted pipeline, overwriting any prior artifact at `path`.
///
/// Parent directories are created as needed.
///
/// # Example
///
/// ```no_run
/// use predecir::io::{save_pipeline, SaveConfig};
/// # let pipeline: predecir::ScoringPipeline = unimplemented!();
///
/// save_pipeline(&pipeline, "models/survival_pipeline.json", &SaveConfig::default()).unwrap();
/// ```
pub fn save_pipeline(
    pipeline: &ScoringPipeline,
    path: impl AsRef<Path>,
    config: &SaveConfig,
) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let artifact = Artifact {
        metadata: ArtifactMetadata::new(config.name.clone()),
        pipeline: pipeline.clone(),
    };

    let data = if config.pretty {
        serde_json::to_string_pretty(&artifact)
    } else {
        serde_json::to_string(&artifact)
    }
    .map_err(|e| Error::Serialization(format!("artifact serialization failed: {e}")))?;

    fs::write(path, data)?;
    info!(path = %path.display(), "saved pipeline artifact");
    Ok(())
}
