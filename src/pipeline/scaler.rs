//! Standard scaling with fit-time statistics

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Zero-mean / unit-variance scaler frozen at fit time.
///
/// Uses population variance (ddof = 0). A constant column scales through
/// 1.0 instead of dividing by zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: f64,
    pub scale: f64,
}

impl StandardScaler {
    pub fn fit(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::InvalidInput(
                "cannot fit a scaler on an empty column".to_string(),
            ));
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();
        let scale = if std_dev == 0.0 { 1.0 } else { std_dev };

        Ok(Self { mean, scale })
    }

    pub fn transform(&self, value: f64) -> f64 {
        (value - self.mean) / self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fit_statistics() {
        let scaler = StandardScaler::fit(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_relative_eq!(scaler.mean, 2.5);
        // Population std of [1,2,3,4]
        assert_relative_eq!(scaler.scale, 1.118033988749895, epsilon = 1e-12);
    }

    #[test]
    fn test_transform_centers_and_scales() {
        let scaler = StandardScaler::fit(&[0.0, 10.0]).unwrap();
        assert_relative_eq!(scaler.transform(0.0), -1.0);
        assert_relative_eq!(scaler.transform(10.0), 1.0);
        assert_relative_eq!(scaler.transform(5.0), 0.0);
    }

    #[test]
    fn test_constant_column_scale_is_one() {
        let scaler = StandardScaler::fit(&[3.0, 3.0, 3.0]).unwrap();
        assert_relative_eq!(scaler.scale, 1.0);
        assert_relative_eq!(scaler.transform(3.0), 0.0);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(StandardScaler::fit(&[]).is_err());
    }
}
