//! The frozen scoring pipeline
//!
//! A [`ScoringPipeline`] is a fitted, immutable composition:
//! - per numeric column: a frozen median imputer then a standard scaler
//! - per categorical column: a frozen most-frequent imputer then a
//!   drop-first one-hot encoder with an unknown-to-zero policy
//! - a single L2-regularized logistic classifier over the concatenation
//!
//! Fit once by the trainer, applied many times by the inference service;
//! `predict_proba` never refits anything.

mod encoder;
mod imputer;
mod logistic;
mod scaler;
mod schema;
mod scoring;

pub use encoder::OneHotEncoder;
pub use imputer::{MedianImputer, MostFrequentImputer};
pub use logistic::{LogisticConfig, LogisticRegression};
pub use scaler::StandardScaler;
pub use schema::{CategoricalColumn, NumericColumn};
pub use scoring::ScoringPipeline;
