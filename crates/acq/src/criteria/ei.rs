use crate::criteria::InfillCriterion;
use crate::utils::{log_ei_helper, norm_cdf, norm_pdf};

use serde::{Deserialize, Serialize};

/// A structure for Expected Improvement implementation
#[derive(Clone, Serialize, Deserialize)]
pub struct ExpectedImprovement;

#[typetag::serde]
impl InfillCriterion for ExpectedImprovement {
    fn name(&self) -> &'static str {
        "EI"
    }

    /// Compute EI as `sigma * (u * cdf(u) + pdf(u))` where `u = (fmin - pred) / sigma`.
    /// A point without uncertainty can not improve, its EI is 0.
    fn score(&self, pred: f64, var: f64, fmin: f64) -> f64 {
        if var < f64::EPSILON {
            0.0
        } else {
            let sigma = var.sqrt();
            let u = (fmin - pred) / sigma;
            sigma * (u * norm_cdf(u) + norm_pdf(u))
        }
    }
}

/// Expected Improvement infill criterion
pub const EI: ExpectedImprovement = ExpectedImprovement {};

/// A structure for Log of Expected Improvement implementation
#[derive(Clone, Serialize, Deserialize)]
pub struct LogExpectedImprovement;

#[typetag::serde]
impl InfillCriterion for LogExpectedImprovement {
    fn name(&self) -> &'static str {
        "LogEI"
    }

    fn score(&self, pred: f64, var: f64, fmin: f64) -> f64 {
        if var < f64::EPSILON {
            f64::MIN
        } else {
            let sigma = var.sqrt();
            let u = (fmin - pred) / sigma;
            log_ei_helper(u) + sigma.ln()
        }
    }
}

/// Log of Expected Improvement infill criterion
pub const LOG_EI: LogExpectedImprovement = LogExpectedImprovement {};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_ei_score() {
        // u = 0: EI = sigma * pdf(0)
        assert_abs_diff_eq!(EI.score(1., 4., 1.), 2. * norm_pdf(0.), epsilon = 1e-12);
        // far below fmin EI tends to the improvement itself
        assert_abs_diff_eq!(EI.score(-10., 1e-2, 0.), 10., epsilon = 1e-9);
        // far above fmin no improvement
        assert_abs_diff_eq!(EI.score(10., 1e-2, 0.), 0., epsilon = 1e-12);
        assert_eq!(EI.score(-1., 0., 0.), 0.);
    }

    #[test]
    fn test_log_ei_score_matches_ei() {
        for (pred, var, fmin) in [(0.3, 0.5, 0.1), (-0.2, 2., 0.), (1.5, 0.1, 1.)] {
            assert_abs_diff_eq!(
                LOG_EI.score(pred, var, fmin),
                EI.score(pred, var, fmin).ln(),
                epsilon = 1e-8
            );
        }
        assert_eq!(LOG_EI.score(0., 0., 1.), f64::MIN);
    }

    #[test]
    fn test_log_ei_score_where_ei_underflows() {
        assert_eq!(EI.score(50., 1., 0.), 0.);
        assert!(LOG_EI.score(50., 1., 0.).is_finite());
    }
}
