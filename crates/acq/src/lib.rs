//! This library implements acquisition functions (aka infill criteria) used by
//! Bayesian optimization to pick the next points where to evaluate an expensive
//! objective function.
//!
//! Pointwise criteria ([`InfillCriterion`]) score a single candidate from the
//! predictive mean and variance of a [`Surrogate`] of the objective. Batch criteria
//! ([`BatchCriterion`]) score a set of `q` candidates meant to be evaluated together:
//! [`DistanceWeighted`] down-weights candidates clustered within the batch
//! so that the batch spreads out over the design space.
//!
//! # Example
//!
//! ```
//! use icebo_acq::{BatchCriterion, DistanceWeighted, FnSurrogate, EI};
//! use ndarray::array;
//!
//! // Any model providing a mean and a variance prediction can be used
//! let model = FnSurrogate::new(
//!     |x: &[f64]| (x[0] - 0.3).powi(2) + x[1] * x[1],
//!     |x: &[f64]| 0.05 + 0.1 * x[0].abs(),
//! );
//!
//! let criterion = DistanceWeighted::new(Box::new(EI)).with_lengthscale(0.1);
//! let batch = array![[0.3, 0.0], [0.32, 0.01], [0.8, 0.5]];
//! let value = criterion.value(&batch.view(), &model, 0.01).expect("batch value");
//! println!("distance weighted EI = {value}");
//! ```
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
pub mod batch;
pub mod criteria;
pub mod utils;

mod errors;
mod surrogate;

pub use crate::batch::*;
pub use crate::criteria::*;
pub use crate::errors::*;
pub use crate::surrogate::*;

/// Env variable to enable logger
pub const ICEBO_LOG: &str = "ICEBO_LOG";
