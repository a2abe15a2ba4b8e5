//! `icebo` gathers the building blocks used to drive a batch Bayesian
//! optimization over a polar stereographic area of an ice sheet:
//!
//! * [`acq`]: acquisition functions, notably the distance weighted batch criterion
//!   penalizing clustered candidates (see [`acq::DistanceWeighted`]),
//! * [`geo`]: conversions between polar stereographic coordinates, the unit box
//!   design space and the grid box used to sample rasters.
//!
//! # Example
//!
//! ```
//! use icebo::acq::{BatchCriterion, DistanceWeighted, FnSurrogate, EI};
//! use icebo::geo::{norm_to_ps, ps_to_norm, PS_BOUNDS};
//! use ndarray::array;
//!
//! // Candidate sites given in polar stereographic meters
//! let sites = array![[1_800_000., -900_000.], [1_810_000., -905_000.], [2_400_000., -400_000.]];
//! let batch = ps_to_norm(&sites, &PS_BOUNDS).unwrap();
//!
//! let model = FnSurrogate::new(
//!     |x: &[f64]| (x[0] - 0.4).powi(2) + (x[1] - 0.5).powi(2),
//!     |_: &[f64]| 0.02,
//! );
//! let criterion = DistanceWeighted::new(Box::new(EI));
//! let value = criterion.value(&batch.view(), &model, 0.01).unwrap();
//! assert!(value > 0.);
//!
//! let back = norm_to_ps(&batch, &PS_BOUNDS).unwrap();
//! assert!((back - &sites).iter().all(|d| d.abs() < 1e-6));
//! ```
pub use icebo_acq as acq;
pub use icebo_geo as geo;
