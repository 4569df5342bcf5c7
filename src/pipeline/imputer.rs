//! Frozen imputers
//!
//! Unlike the batch statistics inside the feature transform, these freeze
//! their fill value at fit time and reuse it for every later prediction.

use crate::features::{median, mode};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Median imputer for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedianImputer {
    pub fill: f64,
}

impl MedianImputer {
    /// Freeze the median of the observed values.
    ///
    /// A column with no observed values at all cannot be fit; that is the
    /// promoted [`Error::EmptyColumn`] case rather than an implementation-
    /// defined NaN.
    pub fn fit(column_name: &str, values: &[Option<f64>]) -> Result<Self> {
        let observed: Vec<f64> = values.iter().flatten().copied().collect();
        let fill =
            median(&observed).ok_or_else(|| Error::EmptyColumn(column_name.to_string()))?;
        Ok(Self { fill })
    }

    pub fn transform(&self, value: Option<f64>) -> f64 {
        value.unwrap_or(self.fill)
    }
}

/// Most-frequent imputer for one categorical column.
///
/// Ties at fit time break toward the lexicographically smallest value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MostFrequentImputer {
    pub fill: String,
}

impl MostFrequentImputer {
    pub fn fit(column_name: &str, values: &[Option<String>]) -> Result<Self> {
        let fill = mode(values.iter().flatten().map(String::as_str))
            .ok_or_else(|| Error::EmptyColumn(column_name.to_string()))?;
        Ok(Self { fill })
    }

    pub fn transform<'a>(&'a self, value: Option<&'a str>) -> &'a str {
        value.unwrap_or(&self.fill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_median_imputer_fills_frozen_value() {
        let imp = MedianImputer::fit("Age", &[Some(10.0), None, Some(30.0), Some(20.0)]).unwrap();
        assert_relative_eq!(imp.fill, 20.0);
        assert_relative_eq!(imp.transform(None), 20.0);
        assert_relative_eq!(imp.transform(Some(5.0)), 5.0);
    }

    #[test]
    fn test_median_imputer_empty_column() {
        let err = MedianImputer::fit("Fare", &[None, None]).unwrap_err();
        assert!(matches!(err, Error::EmptyColumn(c) if c == "Fare"));
    }

    #[test]
    fn test_most_frequent_imputer() {
        let values = vec![
            Some("S".to_string()),
            Some("S".to_string()),
            Some("C".to_string()),
            None,
        ];
        let imp = MostFrequentImputer::fit("Embarked", &values).unwrap();
        assert_eq!(imp.fill, "S");
        assert_eq!(imp.transform(None), "S");
        assert_eq!(imp.transform(Some("Q")), "Q");
    }

    #[test]
    fn test_most_frequent_tie_takes_smallest() {
        let values = vec![Some("S".to_string()), Some("C".to_string())];
        let imp = MostFrequentImputer::fit("Embarked", &values).unwrap();
        assert_eq!(imp.fill, "C");
    }

    #[test]
    fn test_most_frequent_empty_column() {
        let err = MostFrequentImputer::fit("AgeGroup", &[None]).unwrap_err();
        assert!(matches!(err, Error::EmptyColumn(c) if c == "AgeGroup"));
    }
}
