use crate::batch::BatchCriterion;
use crate::criteria::{InfillCriterion, EI};
use crate::errors::{AcqError, Result};
use crate::surrogate::Surrogate;
use crate::utils::{check_batch, check_lengthscale, distance_weights};

use log::debug;
use ndarray::{Array1, ArrayBase, ArrayView2, Data, Ix1, Ix2};
use serde::{Deserialize, Serialize};

/// Default length-scale of the similarity decay between batch points
pub const DEFAULT_LENGTHSCALE: f64 = 0.1;

/// Distance-weighted batch criterion penalizing candidate points
/// clustered together in the batch.
///
/// For a batch `x` of `q` points
///
/// `alpha(x) = mean_i(base(x_i) * w_i)`
///
/// where the weight `w_i` is one minus the mean similarity
/// `exp(-|x_i - x_j| / lengthscale)` of `x_i` to the other points of the batch,
/// normalized by the largest weight (see [`distance_weights`]).
/// The most isolated point keeps its full base value. As weights are relative
/// to the batch, a batch whose points are all equally close is not penalized.
///
/// ```
/// use icebo_acq::{BatchCriterion, DistanceWeighted, FnSurrogate, EI};
/// use ndarray::array;
///
/// let model = FnSurrogate::new(|x: &[f64]| x[0] * x[0], |_: &[f64]| 0.1);
/// let criterion = DistanceWeighted::new(Box::new(EI)).with_lengthscale(0.2);
///
/// let x = array![[0.], [0.01], [1.]];
/// let w = criterion.weights(&x).unwrap();
/// assert_eq!(w[2], 1.0);
/// assert!(w[0] < 0.7 && w[1] < 0.7);
///
/// let value = criterion.value(&x.view(), &model, 0.1).unwrap();
/// assert!(value > 0.);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DistanceWeighted {
    /// Criterion giving the value of each point of the batch
    pub base: Box<dyn InfillCriterion>,
    /// Length-scale of the exponential similarity decay
    pub lengthscale: f64,
}

impl Default for DistanceWeighted {
    fn default() -> Self {
        DistanceWeighted {
            base: Box::new(EI),
            lengthscale: DEFAULT_LENGTHSCALE,
        }
    }
}

impl DistanceWeighted {
    /// Constructor given the base criterion, uses [`DEFAULT_LENGTHSCALE`]
    pub fn new(base: Box<dyn InfillCriterion>) -> Self {
        DistanceWeighted {
            base,
            lengthscale: DEFAULT_LENGTHSCALE,
        }
    }

    /// Sets the length-scale of the similarity decay
    pub fn with_lengthscale(mut self, lengthscale: f64) -> Self {
        self.lengthscale = lengthscale;
        self
    }

    /// Normalized weights of the points of the batch `x`
    pub fn weights(&self, x: &ArrayBase<impl Data<Elem = f64>, Ix2>) -> Result<Array1<f64>> {
        distance_weights(x, self.lengthscale)
    }

    /// Combines already computed base criterion values `base_vals` of the points
    /// of the batch `x` into the batch value.
    pub fn weighted_value(
        &self,
        base_vals: &ArrayBase<impl Data<Elem = f64>, Ix1>,
        x: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    ) -> Result<f64> {
        if base_vals.len() != x.nrows() {
            return Err(AcqError::InvalidValue(format!(
                "expected {} base values, got {}",
                x.nrows(),
                base_vals.len()
            )));
        }
        let w = self.weights(x)?;
        debug!("{} weights = {}", self.base.name(), w);
        (base_vals * &w)
            .mean()
            .ok_or_else(|| AcqError::InvalidValue("empty batch".to_string()))
    }
}

#[typetag::serde]
impl BatchCriterion for DistanceWeighted {
    fn name(&self) -> &'static str {
        "DistanceWeighted"
    }

    fn value(&self, x: &ArrayView2<f64>, obj_model: &dyn Surrogate, fmin: f64) -> Result<f64> {
        check_lengthscale(self.lengthscale)?;
        check_batch(x)?;
        let base_vals = self.base.values(x, obj_model, fmin)?;
        let val = self.weighted_value(&base_vals, x)?;
        debug!("{} batch value = {}", self.name(), val);
        Ok(val)
    }
}
