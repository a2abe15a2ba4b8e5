//! Available infill criteria used to score candidate points
//! given a surrogate of the objective function.
mod ei;
mod pi;
mod ucb;

pub use ei::{ExpectedImprovement, LogExpectedImprovement, EI, LOG_EI};
pub use pi::{ProbabilityOfImprovement, PI};
pub use ucb::{UpperConfidenceBound, UCB};

use crate::errors::{AcqError, Result};
use crate::surrogate::Surrogate;
use dyn_clonable::*;
use ndarray::{Array1, ArrayView, ArrayView2, Zip};

/// A trait for infill criterion which maximum location will
/// determine the next most promising point expected to be the
/// optimum location of the objective function
#[clonable]
#[typetag::serde(tag = "type_infill")]
pub trait InfillCriterion: Clone + Sync + Send {
    /// Name of the infill criterion
    fn name(&self) -> &'static str;

    /// Criterion value given the surrogate prediction `pred` and its variance `var`
    /// at a point, with regards to the current found min `fmin`
    fn score(&self, pred: f64, var: f64, fmin: f64) -> f64;

    /// Criterion values at the n points given as a (n, nx) matrix
    fn values(
        &self,
        x: &ArrayView2<f64>,
        obj_model: &dyn Surrogate,
        fmin: f64,
    ) -> Result<Array1<f64>> {
        let (pred, var) = obj_model.predict_valvar(x)?;
        if pred.len() != x.nrows() || var.len() != x.nrows() {
            return Err(AcqError::SurrogateError(format!(
                "expected {} predictions, got {} values and {} variances",
                x.nrows(),
                pred.len(),
                var.len()
            )));
        }
        Ok(Zip::from(&pred)
            .and(&var)
            .map_collect(|&p, &v| self.score(p, v, fmin)))
    }

    /// Criterion value at given point x
    fn value(&self, x: &[f64], obj_model: &dyn Surrogate, fmin: f64) -> Result<f64> {
        let pt = ArrayView::from_shape((1, x.len()), x)
            .map_err(|err| AcqError::InvalidValue(err.to_string()))?;
        Ok(self.values(&pt, obj_model, fmin)?[0])
    }
}

impl std::fmt::Debug for dyn InfillCriterion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}
