/*!
This library provides coordinate helpers for polar stereographic data
of a glacier modeling application.

Three coordinate systems are handled, each given as (n, 2) matrices with `[x, y]` columns:
* raw polar stereographic coordinates in meters,
* the unit box `[0, 1]²` used as the optimization design space,
* the grid box `[-1, 1]²` used to sample rasters (see [`GridSampler`]).

Conversions are affine maps defined by a [`BoundingBox`], defaulting to
[`PS_BOUNDS`] for the unit box and [`SPEED_GRID_BOUNDS`] for the grid box.

Example:
```
use icebo_geo::{norm_to_ps, ps_to_norm, ps_to_speed, PS_BOUNDS, SPEED_GRID_BOUNDS};
use ndarray::array;

let x = array![[1_650_000., -1_250_000.]];
let xn = ps_to_norm(&x, &PS_BOUNDS).unwrap();
assert_eq!(xn, array![[0.25, 0.25]]);
assert_eq!(norm_to_ps(&xn, &PS_BOUNDS).unwrap(), x);

let xg = ps_to_speed(&x, &SPEED_GRID_BOUNDS).unwrap();
assert!(xg.iter().all(|v| (-1. ..=1.).contains(v)));
```
*/
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
mod bounds;
mod domains;
mod errors;
mod grid_sample;
mod transforms;

pub use bounds::*;
pub use domains::*;
pub use errors::*;
pub use grid_sample::*;
pub use transforms::*;
