//! The fitted scoring pipeline

use super::encoder::OneHotEncoder;
use super::imputer::{MedianImputer, MostFrequentImputer};
use super::logistic::{LogisticConfig, LogisticRegression};
use super::scaler::StandardScaler;
use super::schema::{CategoricalColumn, NumericColumn};
use crate::features::EngineeredRecord;
use crate::{Error, Result};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Frozen per-column state for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericStage {
    pub column: NumericColumn,
    pub imputer: MedianImputer,
    pub scaler: StandardScaler,
}

/// Frozen per-column state for one categorical column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalStage {
    pub column: CategoricalColumn,
    pub imputer: MostFrequentImputer,
    pub encoder: OneHotEncoder,
}

/// A fitted, immutable scoring pipeline.
///
/// Produced once by [`ScoringPipeline::fit`], then shared read-only across
/// any number of `predict_proba` calls (all state is owned data, so the type
/// is `Send + Sync` and needs no locking).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPipeline {
    numeric: Vec<NumericStage>,
    categorical: Vec<CategoricalStage>,
    classifier: LogisticRegression,
}

impl ScoringPipeline {
    /// Fit imputers, scaler statistics, encoder vocabularies and the
    /// classifier from engineered records.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidInput`] on zero rows or non-binary labels
    /// * [`Error::LengthMismatch`] when `x` and `y` disagree
    /// * [`Error::EmptyColumn`] when a column has no observed value to
    ///   freeze statistics from
    pub fn fit(x: &[EngineeredRecord], y: &[u8], config: &LogisticConfig) -> Result<Self> {
        if x.is_empty() {
            return Err(Error::InvalidInput(
                "cannot fit a pipeline on zero rows".to_string(),
            ));
        }
        if x.len() != y.len() {
            return Err(Error::LengthMismatch {
                rows: x.len(),
                labels: y.len(),
            });
        }
        if y.iter().any(|&v| v > 1) {
            return Err(Error::InvalidInput(
                "labels must be 0 or 1".to_string(),
            ));
        }

        let mut numeric = Vec::with_capacity(NumericColumn::ALL.len());
        for column in NumericColumn::ALL {
            let raw: Vec<Option<f64>> = x.iter().map(|rec| column.value(rec)).collect();
            let imputer = MedianImputer::fit(column.name(), &raw)?;
            let imputed: Vec<f64> = raw.iter().map(|v| imputer.transform(*v)).collect();
            let scaler = StandardScaler::fit(&imputed)?;
            numeric.push(NumericStage {
                column,
                imputer,
                scaler,
            });
        }

        let mut categorical = Vec::with_capacity(CategoricalColumn::ALL.len());
        for column in CategoricalColumn::ALL {
            let raw: Vec<Option<String>> = x.iter().map(|rec| column.value(rec)).collect();
            let imputer = MostFrequentImputer::fit(column.name(), &raw)?;
            let imputed: Vec<String> = raw
                .iter()
                .map(|v| imputer.transform(v.as_deref()).to_string())
                .collect();
            let encoder = OneHotEncoder::fit(column.name(), &imputed)?;
            categorical.push(CategoricalStage {
                column,
                imputer,
                encoder,
            });
        }

        let matrix = encode_matrix(&numeric, &categorical, x);
        let targets = Array1::from_iter(y.iter().map(|&v| f64::from(v)));
        let classifier = LogisticRegression::fit(&matrix, &targets, config)?;

        Ok(Self {
            numeric,
            categorical,
            classifier,
        })
    }

    /// Positive-class probability per record, each in [0, 1].
    ///
    /// Never refits. Missing values go through the frozen imputers; unknown
    /// categorical values encode to the all-zero row rather than erroring.
    pub fn predict_proba(&self, x: &[EngineeredRecord]) -> Result<Vec<f64>> {
        let matrix = encode_matrix(&self.numeric, &self.categorical, x);
        Ok(self.classifier.predict_proba(&matrix))
    }

    /// Width of the design matrix this pipeline was fit on.
    pub fn n_features(&self) -> usize {
        self.numeric.len()
            + self
                .categorical
                .iter()
                .map(|stage| stage.encoder.width())
                .sum::<usize>()
    }
}

fn encode_matrix(
    numeric: &[NumericStage],
    categorical: &[CategoricalStage],
    x: &[EngineeredRecord],
) -> Array2<f64> {
    let width = numeric.len()
        + categorical
            .iter()
            .map(|stage| stage.encoder.width())
            .sum::<usize>();

    let mut buffer = Vec::with_capacity(x.len() * width);
    for rec in x {
        for stage in numeric {
            let value = stage.imputer.transform(stage.column.value(rec));
            buffer.push(stage.scaler.transform(value));
        }
        for stage in categorical {
            let raw = stage.column.value(rec);
            let value = stage.imputer.transform(raw.as_deref());
            stage.encoder.encode_into(value, &mut buffer);
        }
    }

    // Shape is correct by construction: every row pushed exactly `width`
    // values.
    Array2::from_shape_vec((x.len(), width), buffer)
        .unwrap_or_else(|_| Array2::zeros((x.len(), width)))
}
