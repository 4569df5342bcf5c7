//! Artifact I/O - persisting and restoring fitted pipelines
//!
//! The durable artifact wraps the pipeline with a small metadata envelope
//! (name, format version, creation time). JSON keeps every `f64` exact
//! through a save/load cycle, so a restored pipeline predicts bit-identically
//! to the one that was saved.

mod format;
mod load;
mod save;

pub use format::{Artifact, ArtifactMetadata, SaveConfig, ARTIFACT_FORMAT_VERSION};
pub use load::load_pipeline;
pub use save::save_pipeline;
