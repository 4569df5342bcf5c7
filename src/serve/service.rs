//! Single-record inference service

use crate::features::transform;
use crate::io::load_pipeline;
use crate::pipeline::ScoringPipeline;
use crate::{Error, PassengerRecord, Result};
use std::path::Path;
use tracing::{info, warn};

/// Lifecycle state of the model slot.
#[derive(Debug)]
pub enum ModelState {
    /// No load has been attempted yet.
    Uninitialized,

    /// A pipeline is loaded and read-only.
    Ready(ScoringPipeline),

    /// The one-time load failed; predictions are rejected until restart.
    Unavailable { reason: String },
}

/// Holds at most one loaded [`ScoringPipeline`].
///
/// The slot is written exactly once, before any request is served; after
/// that the service is read-only and can be shared across concurrent
/// request handlers (behind an `Arc`) without locking. There is no runtime
/// reload or hot swap.
///
/// Tests construct independent instances via [`InferenceService::with_pipeline`]
/// instead of going through an ambient global.
#[derive(Debug)]
pub struct InferenceService {
    state: ModelState,
}

impl InferenceService {
    /// A service that has not attempted a load.
    pub fn uninitialized() -> Self {
        Self {
            state: ModelState::Uninitialized,
        }
    }

    /// Attempt the one-time artifact load.
    ///
    /// A missing or unreadable artifact leaves the service unavailable
    /// rather than failing startup; the caller keeps accepting connections
    /// and rejects predictions instead.
    pub fn start(artifact_path: impl AsRef<Path>) -> Self {
        let path = artifact_path.as_ref();
        match load_pipeline(path) {
            Ok(pipeline) => {
                info!(path = %path.display(), "inference service ready");
                Self {
                    state: ModelState::Ready(pipeline),
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "model load failed; predictions will be rejected");
                Self {
                    state: ModelState::Unavailable {
                        reason: e.to_string(),
                    },
                }
            }
        }
    }

    /// A ready service around an already-fitted pipeline.
    pub fn with_pipeline(pipeline: ScoringPipeline) -> Self {
        Self {
            state: ModelState::Ready(pipeline),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, ModelState::Ready(_))
    }

    pub fn state(&self) -> &ModelState {
        &self.state
    }

    /// Survival probability for one passenger, in [0, 1].
    ///
    /// The record is wrapped as a single-row batch through the shared
    /// feature transform, then scored by the frozen pipeline. Note that the
    /// transform computes its imputation statistics from the batch itself,
    /// so a singleton request is its own peer group: a missing `Age` stays
    /// missing until the pipeline's frozen fit-time imputer resolves it.
    /// This mirrors the training-side behavior exactly.
    ///
    /// # Errors
    ///
    /// [`Error::ModelUnavailable`] when no pipeline is loaded.
    pub fn predict_one(&self, record: &PassengerRecord) -> Result<f64> {
        let pipeline = match &self.state {
            ModelState::Ready(pipeline) => pipeline,
            ModelState::Uninitialized => {
                return Err(Error::ModelUnavailable(
                    "no model load attempted".to_string(),
                ))
            }
            ModelState::Unavailable { reason } => {
                return Err(Error::ModelUnavailable(reason.clone()))
            }
        };

        let batch = transform(std::slice::from_ref(record));
        let probs = pipeline.predict_proba(&batch)?;
        Ok(probs[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{save_pipeline, SaveConfig};
    use crate::pipeline::LogisticConfig;
    use tempfile::tempdir;

    fn passenger(sex: &str, age: Option<f64>) -> PassengerRecord {
        PassengerRecord {
            pclass: 3,
            sex: sex.to_string(),
            age,
            sibsp: 1,
            parch: 0,
            fare: Some(7.25),
            embarked: Some("S".to_string()),
        }
    }

    fn fitted() -> ScoringPipeline {
        let records: Vec<PassengerRecord> = (0..30u32)
            .map(|i| PassengerRecord {
                pclass: (i % 3 + 1) as u8,
                sex: if i % 2 == 0 { "female" } else { "male" }.to_string(),
                age: Some(6.0 + f64::from(i) * 2.0),
                sibsp: i % 2,
                parch: i % 3,
                fare: Some(5.0 + f64::from(i)),
                embarked: Some(["S", "C", "Q"][i as usize % 3].to_string()),
            })
            .collect();
        let labels: Vec<u8> = (0..30).map(|i| u8::from(i % 2 == 0)).collect();
        ScoringPipeline::fit(&transform(&records), &labels, &LogisticConfig::default()).unwrap()
    }

    #[test]
    fn test_uninitialized_rejects_predictions() {
        let service = InferenceService::uninitialized();
        assert!(!service.is_ready());
        let err = service.predict_one(&passenger("male", Some(22.0))).unwrap_err();
        assert!(matches!(err, Error::ModelUnavailable(_)));
    }

    #[test]
    fn test_missing_artifact_leaves_service_unavailable() {
        let service = InferenceService::start("no/such/artifact.json");
        assert!(!service.is_ready());
        assert!(matches!(service.state(), ModelState::Unavailable { .. }));

        // Every request fails with the same recoverable condition, never a
        // panic.
        for _ in 0..3 {
            let err = service.predict_one(&passenger("female", None)).unwrap_err();
            assert!(matches!(err, Error::ModelUnavailable(_)));
        }
    }

    #[test]
    fn test_start_from_saved_artifact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pipeline.json");
        save_pipeline(&fitted(), &path, &SaveConfig::default()).unwrap();

        let service = InferenceService::start(&path);
        assert!(service.is_ready());

        let prob = service.predict_one(&passenger("male", Some(22.0))).unwrap();
        assert!((0.0..=1.0).contains(&prob));
    }

    #[test]
    fn test_predict_one_is_deterministic() {
        let service = InferenceService::with_pipeline(fitted());
        let record = passenger("female", Some(30.0));
        let a = service.predict_one(&record).unwrap();
        let b = service.predict_one(&record).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_predict_one_with_missing_fields() {
        let service = InferenceService::with_pipeline(fitted());
        let mut record = passenger("male", None);
        record.fare = None;
        record.embarked = None;

        let prob = service.predict_one(&record).unwrap();
        assert!((0.0..=1.0).contains(&prob));
    }

    #[test]
    fn test_unknown_categories_are_scored_not_rejected() {
        let service = InferenceService::with_pipeline(fitted());
        let mut record = passenger("neither", Some(25.0));
        record.embarked = Some("Z".to_string());

        let prob = service.predict_one(&record).unwrap();
        assert!((0.0..=1.0).contains(&prob));
    }
}
