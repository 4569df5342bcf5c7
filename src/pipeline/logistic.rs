//! L2-regularized binary logistic regression

use crate::{Error, Result};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Solver configuration.
///
/// The penalty matches the conventional `C = 1/l2` parameterization: the
/// objective is mean log-loss plus `l2 / (2n) * ||w||²`, intercept excluded
/// from the penalty. The solver is deterministic full-batch gradient descent
/// from a zero start with a Lipschitz step size, so refitting the same data
/// reproduces the same coefficients.
#[derive(Debug, Clone)]
pub struct LogisticConfig {
    /// L2 penalty strength (1/C)
    pub l2: f64,

    /// Iteration cap
    pub max_iter: usize,

    /// Stop once the gradient norm falls below this
    pub tol: f64,
}

impl Default for LogisticConfig {
    fn default() -> Self {
        Self {
            l2: 1.0,
            max_iter: 1000,
            tol: 1e-6,
        }
    }
}

/// Fitted weight vector and intercept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl LogisticRegression {
    /// Fit on a design matrix and 0/1 targets.
    pub fn fit(x: &Array2<f64>, y: &Array1<f64>, config: &LogisticConfig) -> Result<Self> {
        let (n, d) = x.dim();
        if n == 0 {
            return Err(Error::InvalidInput(
                "cannot fit a classifier on zero rows".to_string(),
            ));
        }
        if y.len() != n {
            return Err(Error::LengthMismatch {
                rows: n,
                labels: y.len(),
            });
        }
        if y.iter().any(|&v| v != 0.0 && v != 1.0) {
            return Err(Error::InvalidInput(
                "targets must be 0.0 or 1.0".to_string(),
            ));
        }

        let n_f = n as f64;
        // Lipschitz bound for the mean-loss gradient. The `+ n` accounts for
        // the implicit intercept column of ones.
        let frob_sq: f64 = x.iter().map(|v| v * v).sum();
        let lipschitz = (frob_sq + n_f) / (4.0 * n_f) + config.l2 / n_f;
        let step = 1.0 / lipschitz;

        let mut weights = Array1::<f64>::zeros(d);
        let mut bias = 0.0_f64;

        for _ in 0..config.max_iter {
            let z = x.dot(&weights) + bias;
            let p = z.mapv(sigmoid);
            let residual = &p - y;

            let mut grad_w = x.t().dot(&residual) / n_f;
            grad_w.scaled_add(config.l2 / n_f, &weights);
            let grad_b = residual.mean().unwrap_or(0.0);

            let grad_norm =
                (grad_w.iter().map(|g| g * g).sum::<f64>() + grad_b * grad_b).sqrt();
            if grad_norm < config.tol {
                break;
            }

            weights.scaled_add(-step, &grad_w);
            bias -= step * grad_b;
        }

        Ok(Self {
            weights: weights.to_vec(),
            bias,
        })
    }

    /// Positive-class probability per row, always in [0, 1].
    pub fn predict_proba(&self, x: &Array2<f64>) -> Vec<f64> {
        let w = Array1::from_vec(self.weights.clone());
        (x.dot(&w) + self.bias).mapv(sigmoid).to_vec()
    }
}

/// Numerically stable logistic function.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
