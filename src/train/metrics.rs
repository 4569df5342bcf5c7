//! Evaluation metrics
//!
//! Accuracy and ROC-AUC for binary classification, plus the cross-validation
//! summary and its qualitative verdict bands.

use crate::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Fraction of predictions on the right side of `threshold`.
pub fn accuracy(probs: &[f64], labels: &[u8], threshold: f64) -> f64 {
    if probs.is_empty() {
        return 0.0;
    }
    let correct = probs
        .iter()
        .zip(labels)
        .filter(|(&p, &l)| u8::from(p >= threshold) == l)
        .count();
    correct as f64 / probs.len() as f64
}

/// Area under the ROC curve via the rank statistic, with tied scores given
/// their average rank.
///
/// # Errors
///
/// [`Error::InvalidInput`] when lengths differ or either class is absent
/// (the curve is undefined without both).
pub fn roc_auc(probs: &[f64], labels: &[u8]) -> Result<f64> {
    if probs.len() != labels.len() {
        return Err(Error::LengthMismatch {
            rows: probs.len(),
            labels: labels.len(),
        });
    }

    let n_pos = labels.iter().filter(|&&l| l == 1).count();
    let n_neg = labels.len() - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return Err(Error::InvalidInput(
            "ROC-AUC needs both classes present".to_string(),
        ));
    }

    let mut order: Vec<usize> = (0..probs.len()).collect();
    order.sort_by(|&a, &b| {
        probs[a]
            .partial_cmp(&probs[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // Average ranks over tied scores, then sum the positive-class ranks.
    let mut ranks = vec![0.0_f64; probs.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && probs[order[j + 1]] == probs[order[i]] {
            j += 1;
        }
        let avg_rank = ((i + 1 + j + 1) as f64) / 2.0;
        for &idx in &order[i..=j] {
            ranks[idx] = avg_rank;
        }
        i = j + 1;
    }

    let rank_sum: f64 = ranks
        .iter()
        .zip(labels)
        .filter(|(_, &l)| l == 1)
        .map(|(r, _)| *r)
        .sum();
    let u = rank_sum - (n_pos * (n_pos + 1)) as f64 / 2.0;
    Ok(u / (n_pos as f64 * n_neg as f64))
}

/// Per-fold cross-validation scores with their summary statistics.
#[derive(Debug, Clone, Serialize)]
pub struct CvSummary {
    pub scores: Vec<f64>,
    pub mean: f64,
    /// Population standard deviation of the fold scores.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl CvSummary {
    pub fn from_scores(scores: Vec<f64>) -> Self {
        let n = scores.len().max(1) as f64;
        let mean = scores.iter().sum::<f64>() / n;
        let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self {
            scores,
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
        }
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_mean_auc(self.mean)
    }
}

/// Qualitative band for a mean cross-validation ROC-AUC. Informational
/// only; it never blocks persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Good,
    Mediocre,
    Poor,
}

impl Verdict {
    pub fn from_mean_auc(mean: f64) -> Self {
        if mean > 0.8 {
            Verdict::Good
        } else if mean > 0.7 {
            Verdict::Mediocre
        } else {
            Verdict::Poor
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Verdict::Good => "good (mean ROC-AUC above 0.8)",
            Verdict::Mediocre => "mediocre (mean ROC-AUC between 0.7 and 0.8)",
            Verdict::Poor => "poor (mean ROC-AUC below 0.7)",
        };
        f.write_str(text)
    }
}
