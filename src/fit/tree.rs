//! Exact-greedy regression trees.
//!
//! Each tree is grown on a subset of the design matrix rows by minimizing
//! squared error: at every node we scan all features and all midpoint
//! thresholds between adjacent distinct values, and take the split with the
//! largest SSE reduction.
//!
//! Determinism notes:
//! - candidate order is fixed (feature index ascending, threshold ascending)
//! - ties keep the earliest candidate, so refits are bit-identical
//! - there is no randomness here; row subsampling happens in the booster

use nalgebra::DMatrix;

/// Growth limits for a single tree.
#[derive(Debug, Clone, Copy)]
pub struct TreeParams {
    pub max_depth: usize,
    pub min_samples_leaf: usize,
}

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        /// Arena index of the subtree for `x[feature] <= threshold`.
        left: usize,
        /// Arena index of the subtree for `x[feature] > threshold`.
        right: usize,
    },
}

/// A fitted regression tree (arena-allocated nodes, root at index 0).
#[derive(Debug, Clone)]
pub struct RegressionTree {
    nodes: Vec<Node>,
}

#[derive(Debug, Clone, Copy)]
struct SplitCandidate {
    feature: usize,
    threshold: f64,
    gain: f64,
}

impl RegressionTree {
    /// Grow a tree on `rows` of `x` against `targets` (indexed by row).
    ///
    /// `rows` must be non-empty; the booster guarantees this.
    pub fn fit(x: &DMatrix<f64>, targets: &[f64], rows: &[usize], params: &TreeParams) -> Self {
        let mut tree = RegressionTree { nodes: Vec::new() };
        tree.grow(x, targets, rows, params, 0);
        tree
    }

    /// Predict the response for one row of `x`.
    pub fn predict_row(&self, x: &DMatrix<f64>, row: usize) -> f64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if x[(row, *feature)] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    /// Recursively grow the subtree for `rows`; returns its arena index.
    fn grow(
        &mut self,
        x: &DMatrix<f64>,
        targets: &[f64],
        rows: &[usize],
        params: &TreeParams,
        depth: usize,
    ) -> usize {
        let leaf_value = mean_target(targets, rows);

        let can_split = depth < params.max_depth && rows.len() >= 2 * params.min_samples_leaf;
        let best = if can_split {
            best_split(x, targets, rows, params.min_samples_leaf)
        } else {
            None
        };

        let Some(split) = best else {
            let idx = self.nodes.len();
            self.nodes.push(Node::Leaf { value: leaf_value });
            return idx;
        };

        let (left_rows, right_rows): (Vec<usize>, Vec<usize>) = rows
            .iter()
            .partition(|&&r| x[(r, split.feature)] <= split.threshold);

        // Reserve the split slot first so the root stays at index 0.
        let idx = self.nodes.len();
        self.nodes.push(Node::Leaf { value: leaf_value });
        let left = self.grow(x, targets, &left_rows, params, depth + 1);
        let right = self.grow(x, targets, &right_rows, params, depth + 1);
        self.nodes[idx] = Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };
        idx
    }
}

fn mean_target(targets: &[f64], rows: &[usize]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    rows.iter().map(|&r| targets[r]).sum::<f64>() / rows.len() as f64
}

/// Find the SSE-minimizing split over all features, if any positive-gain
/// split satisfies the leaf-size constraint.
fn best_split(
    x: &DMatrix<f64>,
    targets: &[f64],
    rows: &[usize],
    min_samples_leaf: usize,
) -> Option<SplitCandidate> {
    let n = rows.len();
    let total_sum: f64 = rows.iter().map(|&r| targets[r]).sum();
    let total_sq: f64 = rows.iter().map(|&r| targets[r] * targets[r]).sum();
    let parent_sse = total_sq - total_sum * total_sum / n as f64;

    let mut best: Option<SplitCandidate> = None;

    for feature in 0..x.ncols() {
        // Sort this node's rows by the feature value; index as tie-break
        // keeps the ordering total and deterministic.
        let mut ordered: Vec<usize> = rows.to_vec();
        ordered.sort_by(|&a, &b| {
            x[(a, feature)]
                .partial_cmp(&x[(b, feature)])
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.cmp(&b))
        });

        let mut left_sum = 0.0;
        let mut left_sq = 0.0;

        for i in 0..n - 1 {
            let r = ordered[i];
            left_sum += targets[r];
            left_sq += targets[r] * targets[r];

            let left_n = i + 1;
            let right_n = n - left_n;
            if left_n < min_samples_leaf || right_n < min_samples_leaf {
                continue;
            }

            let here = x[(r, feature)];
            let next = x[(ordered[i + 1], feature)];
            if next <= here {
                // No threshold separates equal adjacent values.
                continue;
            }

            let right_sum = total_sum - left_sum;
            let right_sq = total_sq - left_sq;
            let left_sse = left_sq - left_sum * left_sum / left_n as f64;
            let right_sse = right_sq - right_sum * right_sum / right_n as f64;
            let gain = parent_sse - left_sse - right_sse;

            let improves = match best {
                None => gain > 1e-12,
                Some(b) => gain > b.gain + 1e-12,
            };
            if improves {
                best = Some(SplitCandidate {
                    feature,
                    threshold: 0.5 * (here + next),
                    gain,
                });
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[f64]]) -> DMatrix<f64> {
        DMatrix::from_fn(rows.len(), rows[0].len(), |i, j| rows[i][j])
    }

    #[test]
    fn constant_targets_stay_a_single_leaf() {
        let x = matrix(&[&[0.0], &[1.0], &[2.0], &[3.0]]);
        let y = vec![5.0; 4];
        let tree = RegressionTree::fit(
            &x,
            &y,
            &[0, 1, 2, 3],
            &TreeParams {
                max_depth: 4,
                min_samples_leaf: 1,
            },
        );
        for row in 0..4 {
            assert_eq!(tree.predict_row(&x, row), 5.0);
        }
        assert_eq!(tree.nodes.len(), 1);
    }

    #[test]
    fn recovers_a_perfect_step_split() {
        let x = matrix(&[&[0.0], &[1.0], &[2.0], &[10.0], &[11.0], &[12.0]]);
        let y = vec![1.0, 1.0, 1.0, 9.0, 9.0, 9.0];
        let tree = RegressionTree::fit(
            &x,
            &y,
            &[0, 1, 2, 3, 4, 5],
            &TreeParams {
                max_depth: 4,
                min_samples_leaf: 3,
            },
        );
        assert_eq!(tree.predict_row(&x, 0), 1.0);
        assert_eq!(tree.predict_row(&x, 5), 9.0);
    }

    #[test]
    fn min_samples_leaf_blocks_small_partitions() {
        // The only SSE-improving split would isolate the last row, which a
        // 3-row leaf minimum forbids.
        let x = matrix(&[&[0.0], &[1.0], &[2.0], &[3.0], &[4.0]]);
        let y = vec![1.0, 1.0, 1.0, 1.0, 100.0];
        let tree = RegressionTree::fit(
            &x,
            &y,
            &[0, 1, 2, 3, 4],
            &TreeParams {
                max_depth: 4,
                min_samples_leaf: 3,
            },
        );
        assert_eq!(tree.nodes.len(), 1);
        let expected = y.iter().sum::<f64>() / 5.0;
        assert!((tree.predict_row(&x, 0) - expected).abs() < 1e-12);
    }

    #[test]
    fn depth_limit_is_respected() {
        let x = matrix(&[&[0.0], &[1.0], &[2.0], &[3.0]]);
        let y = vec![0.0, 1.0, 2.0, 3.0];
        let tree = RegressionTree::fit(
            &x,
            &y,
            &[0, 1, 2, 3],
            &TreeParams {
                max_depth: 1,
                min_samples_leaf: 1,
            },
        );
        // Depth 1 allows a single split: exactly one internal node.
        let splits = tree
            .nodes
            .iter()
            .filter(|n| matches!(n, Node::Split { .. }))
            .count();
        assert_eq!(splits, 1);
    }

    #[test]
    fn refits_are_identical() {
        let x = matrix(&[
            &[0.0, 3.0],
            &[1.0, 1.0],
            &[2.0, 4.0],
            &[3.0, 1.0],
            &[4.0, 5.0],
            &[5.0, 9.0],
        ]);
        let y = vec![2.0, 4.0, 4.0, 6.0, 8.0, 9.0];
        let rows: Vec<usize> = (0..6).collect();
        let params = TreeParams {
            max_depth: 3,
            min_samples_leaf: 1,
        };
        let a = RegressionTree::fit(&x, &y, &rows, &params);
        let b = RegressionTree::fit(&x, &y, &rows, &params);
        for row in 0..6 {
            assert_eq!(a.predict_row(&x, row), b.predict_row(&x, row));
        }
    }
}
