//! Gradient boosting over regression trees (squared loss).
//!
//! The ensemble starts from the training-target mean and, at each stage,
//! fits one tree to the current residuals and adds a shrunken copy of its
//! prediction:
//!
//! ```text
//! f_0(x)     = mean(y)
//! f_m(x)     = f_{m-1}(x) + learning_rate * tree_m(x)
//! tree_m fit on r_i = y_i - f_{m-1}(x_i)
//! ```
//!
//! With `subsample = 1.0` (the default) every stage sees every row and the
//! fit is fully deterministic. With `subsample < 1.0` each stage draws a
//! fixed-size row subset without replacement from a seeded generator, so a
//! given seed still reproduces the ensemble exactly.

use nalgebra::{DMatrix, DVector};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::EstimatorParams;
use crate::fit::tree::{RegressionTree, TreeParams};

/// A fitted gradient-boosted ensemble.
#[derive(Debug, Clone)]
pub struct GradientBoost {
    init: f64,
    learning_rate: f64,
    trees: Vec<RegressionTree>,
}

impl GradientBoost {
    /// Fit the ensemble on all rows of `x` against `y`.
    ///
    /// `x` must be non-empty; the caller checks the partition before fitting.
    pub fn fit(x: &DMatrix<f64>, y: &DVector<f64>, params: &EstimatorParams) -> Self {
        let n = x.nrows();
        let init = y.iter().sum::<f64>() / n as f64;

        let tree_params = TreeParams {
            max_depth: params.max_depth,
            min_samples_leaf: params.min_samples_leaf,
        };
        let mut rng = StdRng::seed_from_u64(params.seed);

        // Rows drawn per stage; at least one so a tiny table still trains.
        let subsample = params.subsample.clamp(0.0, 1.0);
        let stage_rows = ((subsample * n as f64).floor() as usize).max(1);

        let mut predictions = vec![init; n];
        let mut residuals = vec![0.0; n];
        let mut trees = Vec::with_capacity(params.n_estimators);

        for _ in 0..params.n_estimators {
            for i in 0..n {
                residuals[i] = y[i] - predictions[i];
            }

            let rows: Vec<usize> = if stage_rows >= n {
                (0..n).collect()
            } else {
                let mut drawn = rand::seq::index::sample(&mut rng, n, stage_rows).into_vec();
                drawn.sort_unstable();
                drawn
            };

            let tree = RegressionTree::fit(x, &residuals, &rows, &tree_params);
            for (i, p) in predictions.iter_mut().enumerate() {
                *p += params.learning_rate * tree.predict_row(x, i);
            }
            trees.push(tree);
        }

        GradientBoost {
            init,
            learning_rate: params.learning_rate,
            trees,
        }
    }

    /// Predict the response for one row of `x`.
    pub fn predict_row(&self, x: &DMatrix<f64>, row: usize) -> f64 {
        let mut value = self.init;
        for tree in &self.trees {
            value += self.learning_rate * tree.predict_row(x, row);
        }
        value
    }
}
