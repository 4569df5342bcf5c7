//! Pipeline loading

use super::format::{Artifact, ARTIFACT_FORMAT_VERSION};
use crate::pipeline::ScoringPipeline;
use crate::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Restore a fitted pipeline from a saved artifact.
///
/// # Errors
///
/// * [`Error::ModelUnavailable`] when the file does not exist
/// * [`Error::FormatVersion`] when the artifact was written by an
///   incompatible layout version
/// * [`Error::Serialization`] when the content does not parse
pub fn load_pipeline(path: impl AsRef<Path>) -> Result<ScoringPipeline> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::ModelUnavailable(format!(
            "no artifact at {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    let artifact: Artifact = serde_json::from_str(&content)
        .map_err(|e| Error::Serialization(format!("artifact deserialization failed: {e}")))?;

    if artifact.metadata.format_version != ARTIFACT_FORMAT_VERSION {
        return Err(Error::FormatVersion {
            expected: ARTIFACT_FORMAT_VERSION,
            got: artifact.metadata.format_version,
        });
    }

    info!(path = %path.display(), name = %artifact.metadata.name, "loaded pipeline artifact");
    Ok(artifact.pipeline)
}
