use crate::criteria::InfillCriterion;
use crate::utils::norm_cdf;

use serde::{Deserialize, Serialize};

/// A structure for Probability of Improvement implementation
#[derive(Clone, Serialize, Deserialize)]
pub struct ProbabilityOfImprovement;

#[typetag::serde]
impl InfillCriterion for ProbabilityOfImprovement {
    fn name(&self) -> &'static str {
        "PI"
    }

    /// Probability that the objective at the point lies below `fmin`
    fn score(&self, pred: f64, var: f64, fmin: f64) -> f64 {
        if var < f64::EPSILON {
            if pred < fmin {
                1.0
            } else {
                0.0
            }
        } else {
            norm_cdf((fmin - pred) / var.sqrt())
        }
    }
}

/// Probability of Improvement infill criterion
pub const PI: ProbabilityOfImprovement = ProbabilityOfImprovement {};
