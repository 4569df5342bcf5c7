//! Drop-first one-hot encoding with a frozen vocabulary

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One-hot encoder for a single categorical column.
///
/// The vocabulary is the sorted set of categories observed at fit time. The
/// first (smallest) category is dropped from the encoding, so a column with
/// `k` categories produces `k - 1` indicator features. Values outside the
/// vocabulary encode as the all-zero row — the "unknown category → ignore"
/// policy; serve-time inputs must never make encoding raise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneHotEncoder {
    /// Sorted fit-time vocabulary; index 0 is the dropped category.
    pub vocabulary: Vec<String>,
}

impl OneHotEncoder {
    pub fn fit(column_name: &str, values: &[String]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyColumn(column_name.to_string()));
        }
        let vocabulary: Vec<String> = values
            .iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .cloned()
            .collect();
        Ok(Self { vocabulary })
    }

    /// Number of output features (vocabulary size minus the dropped one).
    pub fn width(&self) -> usize {
        self.vocabulary.len().saturating_sub(1)
    }

    /// Append the encoding of `value` to `out`.
    ///
    /// The dropped first category and any unknown value both produce all
    /// zeros; that ambiguity is inherent to drop-first encoding.
    pub fn encode_into(&self, value: &str, out: &mut Vec<f64>) {
        for category in self.vocabulary.iter().skip(1) {
            out.push(if category == value { 1.0 } else { 0.0 });
        }
    }
}
