//! Training orchestration
//!
//! This module provides the offline training path:
//! - seeded stratified train/held-out splitting and stratified k-fold
//! - evaluation metrics (accuracy, ROC-AUC) and the CV summary
//! - [`train_and_evaluate`], the end-to-end run: ingest, transform, split,
//!   cross-validate, final fit, hold-out evaluation, artifact persistence

mod metrics;
mod split;
mod trainer;

pub use metrics::{accuracy, roc_auc, CvSummary, Verdict};
pub use split::{stratified_k_fold, stratified_split};
pub use trainer::{train_and_evaluate, TrainConfig, TrainReport};
