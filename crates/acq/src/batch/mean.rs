use crate::batch::BatchCriterion;
use crate::criteria::InfillCriterion;
use crate::errors::{AcqError, Result};
use crate::surrogate::Surrogate;
use crate::utils::check_batch;

use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

/// Batch criterion averaging the base criterion over the batch points
/// without any interaction between them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MeanBatch {
    /// Criterion giving the value of each point of the batch
    pub base: Box<dyn InfillCriterion>,
}

impl MeanBatch {
    /// Constructor given the base criterion
    pub fn new(base: Box<dyn InfillCriterion>) -> Self {
        MeanBatch { base }
    }
}

#[typetag::serde]
impl BatchCriterion for MeanBatch {
    fn name(&self) -> &'static str {
        "MeanBatch"
    }

    fn value(&self, x: &ArrayView2<f64>, obj_model: &dyn Surrogate, fmin: f64) -> Result<f64> {
        check_batch(x)?;
        self.base
            .values(x, obj_model, fmin)?
            .mean()
            .ok_or_else(|| AcqError::InvalidValue("empty batch".to_string()))
    }
}
