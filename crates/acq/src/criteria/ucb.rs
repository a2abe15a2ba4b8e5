use crate::criteria::InfillCriterion;

use serde::{Deserialize, Serialize};

/// A structure for Upper Confidence Bound implementation.
///
/// As the objective is minimized the criterion is the negated lower
/// confidence bound `-(pred - sqrt(beta) * sigma)` where `beta`
/// trades exploitation against exploration.
#[derive(Clone, Serialize, Deserialize)]
pub struct UpperConfidenceBound {
    /// Weight of the predicted variance
    pub beta: f64,
}

impl UpperConfidenceBound {
    /// Constructor given the `beta` exploration weight
    pub fn new(beta: f64) -> Self {
        UpperConfidenceBound { beta }
    }
}

#[typetag::serde]
impl InfillCriterion for UpperConfidenceBound {
    fn name(&self) -> &'static str {
        "UCB"
    }

    fn score(&self, pred: f64, var: f64, _fmin: f64) -> f64 {
        self.beta.sqrt() * var.max(0.).sqrt() - pred
    }
}

/// Upper Confidence Bound infill criterion with `beta = 2`
pub const UCB: UpperConfidenceBound = UpperConfidenceBound { beta: 2.0 };

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_ucb_score() {
        assert_abs_diff_eq!(UpperConfidenceBound::new(4.).score(1., 9., 0.), 5., epsilon = 1e-12);
        assert_abs_diff_eq!(UCB.score(0.5, 0., 0.), -0.5);
        // fmin does not matter
        assert_eq!(UCB.score(0.5, 1., 0.), UCB.score(0.5, 1., 100.));
    }
}
