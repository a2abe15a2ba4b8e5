//! Criteria scoring a whole batch of `q` candidate points at once,
//! used when several points are evaluated in parallel at each iteration.
mod distance_weighted;
mod mean;

pub use distance_weighted::{DistanceWeighted, DEFAULT_LENGTHSCALE};
pub use mean::MeanBatch;

use crate::errors::Result;
use crate::surrogate::Surrogate;
use dyn_clonable::*;
use ndarray::{Array1, ArrayView2, ArrayView3, Axis};
use rayon::prelude::*;

/// A trait for batch criterion which maximum location gives
/// the `q` next points to evaluate together
#[clonable]
#[typetag::serde(tag = "type_batch")]
pub trait BatchCriterion: Clone + Sync + Send {
    /// Name of the batch criterion
    fn name(&self) -> &'static str;

    /// Criterion value of the batch `x` given as a (q, nx) matrix
    /// with regards to the surrogate of the objective function
    /// and the current found min
    fn value(&self, x: &ArrayView2<f64>, obj_model: &dyn Surrogate, fmin: f64) -> Result<f64>;

    /// Criterion values of `b` independent batches given as a (b, q, nx) array
    fn values_per_batch(
        &self,
        xs: &ArrayView3<f64>,
        obj_model: &dyn Surrogate,
        fmin: f64,
    ) -> Result<Array1<f64>> {
        let vals = xs
            .axis_iter(Axis(0))
            .into_par_iter()
            .map(|x| self.value(&x, obj_model, fmin))
            .collect::<Result<Vec<f64>>>()?;
        Ok(Array1::from(vals))
    }
}

impl std::fmt::Debug for dyn BatchCriterion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}
