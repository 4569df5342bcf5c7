//! End-to-end training run

use super::metrics::{accuracy, roc_auc, CvSummary, Verdict};
use super::split::{stratified_k_fold, stratified_split};
use crate::data::load_labeled_csv;
use crate::features::{transform, EngineeredRecord};
use crate::io::{save_pipeline, SaveConfig};
use crate::pipeline::{LogisticConfig, ScoringPipeline};
use crate::Result;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Configuration for a training run.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// Labeled CSV to train on
    pub data_path: PathBuf,

    /// Where the fitted pipeline is persisted (overwritten if present)
    pub artifact_path: PathBuf,

    /// Held-out fraction for the stratified split
    pub test_fraction: f64,

    /// Cross-validation fold count
    pub folds: usize,

    /// Seed for the stratified split
    pub seed: u64,

    /// Classifier hyperparameters
    pub logistic: LogisticConfig,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/train.csv"),
            artifact_path: PathBuf::from("models/survival_pipeline.json"),
            test_fraction: 0.2,
            folds: 5,
            seed: 42,
            logistic: LogisticConfig::default(),
        }
    }
}

impl TrainConfig {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            ..Self::default()
        }
    }

    pub fn with_artifact_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.artifact_path = path.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_folds(mut self, folds: usize) -> Self {
        self.folds = folds;
        self
    }
}

/// Printable record of a finished training run.
#[derive(Debug, Clone, Serialize)]
pub struct TrainReport {
    pub rows: usize,
    pub train_rows: usize,
    pub holdout_rows: usize,
    pub cv: CvSummary,
    pub holdout_accuracy: f64,
    pub holdout_roc_auc: f64,
    pub verdict: Verdict,
    pub artifact_path: PathBuf,
}

impl fmt::Display for TrainReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rows: {} ({} train / {} held out)", self.rows, self.train_rows, self.holdout_rows)?;
        write!(f, "ROC-AUC CV scores:")?;
        for score in &self.cv.scores {
            write!(f, " {score:.3}")?;
        }
        writeln!(f)?;
        writeln!(f, "Mean ROC-AUC: {:.3}", self.cv.mean)?;
        writeln!(f, "Std dev ROC-AUC: {:.3}", self.cv.std_dev)?;
        writeln!(f, "Min ROC-AUC: {:.3}", self.cv.min)?;
        writeln!(f, "Max ROC-AUC: {:.3}", self.cv.max)?;
        writeln!(f, "Held-out accuracy: {:.3}", self.holdout_accuracy)?;
        writeln!(f, "Held-out ROC-AUC: {:.3}", self.holdout_roc_auc)?;
        writeln!(f, "Model performance is {}", self.verdict)?;
        write!(f, "Pipeline saved to {}", self.artifact_path.display())
    }
}

/// Run the full training procedure.
///
/// Ingests the labeled CSV, applies the feature transform to the whole
/// dataset, splits 80/20 stratified on the label, cross-validates on the
/// training split only (diagnostic; the folds never touch the deployed
/// model), fits the final pipeline on the entire training split, evaluates
/// on the held-out split, and persists the fitted pipeline.
///
/// A missing input file or a missing `Survived` column aborts before
/// anything is written; any fit-time error propagates and is fatal to the
/// run.
pub fn train_and_evaluate(config: &TrainConfig) -> Result<(ScoringPipeline, TrainReport)> {
    let dataset = load_labeled_csv(&config.data_path)?;
    info!(rows = dataset.len(), path = %config.data_path.display(), "loaded training data");

    let engineered = transform(&dataset.records);
    let (train_idx, test_idx) = stratified_split(&dataset.labels, config.test_fraction, config.seed)?;

    let train_x = select(&engineered, &train_idx);
    let train_y = select(&dataset.labels, &train_idx);
    let test_x = select(&engineered, &test_idx);
    let test_y = select(&dataset.labels, &test_idx);

    info!(folds = config.folds, "cross-validating on the training split");
    let cv = cross_validate(&train_x, &train_y, config)?;

    info!("fitting final pipeline on the full training split");
    let pipeline = ScoringPipeline::fit(&train_x, &train_y, &config.logistic)?;

    let holdout_probs = pipeline.predict_proba(&test_x)?;
    let holdout_accuracy = accuracy(&holdout_probs, &test_y, 0.5);
    let holdout_roc_auc = roc_auc(&holdout_probs, &test_y)?;

    save_pipeline(&pipeline, &config.artifact_path, &SaveConfig::default())?;
    info!(path = %config.artifact_path.display(), "pipeline persisted");

    let report = TrainReport {
        rows: dataset.len(),
        train_rows: train_x.len(),
        holdout_rows: test_x.len(),
        verdict: cv.verdict(),
        cv,
        holdout_accuracy,
        holdout_roc_auc,
        artifact_path: config.artifact_path.clone(),
    };

    Ok((pipeline, report))
}

/// Diagnostic k-fold cross-validation scored by ROC-AUC.
fn cross_validate(x: &[EngineeredRecord], y: &[u8], config: &TrainConfig) -> Result<CvSummary> {
    let folds = stratified_k_fold(y, config.folds)?;
    let mut scores = Vec::with_capacity(folds.len());

    for held_out in &folds {
        let fit_idx: Vec<usize> = (0..x.len()).filter(|i| !held_out.contains(i)).collect();
        let fold_pipeline = ScoringPipeline::fit(
            &select(x, &fit_idx),
            &select(y, &fit_idx),
            &config.logistic,
        )?;
        let probs = fold_pipeline.predict_proba(&select(x, held_out))?;
        scores.push(roc_auc(&probs, &select(y, held_out))?);
    }

    Ok(CvSummary::from_scores(scores))
}

fn select<T: Clone>(items: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| items[i].clone()).collect()
}
