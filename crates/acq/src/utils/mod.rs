//! Numerical helpers shared by the criteria.
mod distances;
mod logei_helper;
mod misc;

pub use distances::*;
pub use logei_helper::*;
pub use misc::*;
