//! # Predecir: Survival Scoring for Passenger Records
//!
//! Predecir estimates survival probability for a passenger record from a
//! fixed set of demographic and trip attributes. The crate has three moving
//! parts sharing one feature path:
//!
//! - **features**: the deterministic batch transform applied identically at
//!   training and inference time
//! - **pipeline**: the frozen scoring pipeline (imputation, scaling,
//!   drop-first one-hot encoding, L2 logistic regression)
//! - **train**: cross-validated training, evaluation, and persistence
//! - **serve**: the single-record inference service over a loaded artifact
//! - **io**: artifact save/load with an exact prediction round-trip
//! - **data**: raw records and CSV ingest
//!
//! ## Example
//!
//! ```no_run
//! use predecir::{train_and_evaluate, InferenceService, PassengerRecord, TrainConfig};
//!
//! let config = TrainConfig::new("data/train.csv");
//! let (_pipeline, report) = train_and_evaluate(&config).unwrap();
//! println!("{report}");
//!
//! let service = InferenceService::start(&config.artifact_path);
//! let prob = service
//!     .predict_one(&PassengerRecord {
//!         pclass: 3,
//!         sex: "male".to_string(),
//!         age: Some(22.0),
//!         sibsp: 1,
//!         parch: 0,
//!         fare: Some(7.25),
//!         embarked: Some("S".to_string()),
//!     })
//!     .unwrap();
//! println!("survival probability: {prob:.3}");
//! ```

pub mod data;
pub mod features;
pub mod io;
pub mod pipeline;
pub mod serve;
pub mod train;

pub mod error;

// Re-export commonly used types
pub use data::PassengerRecord;
pub use error::{Error, Result};
pub use features::{transform, EngineeredRecord};
pub use io::{load_pipeline, save_pipeline};
pub use pipeline::ScoringPipeline;
pub use serve::InferenceService;
pub use train::{train_and_evaluate, TrainConfig, TrainReport};
