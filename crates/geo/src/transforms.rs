//! Affine maps between polar stereographic coordinates and normalized boxes.
//!
//! Coordinates are given as (n, 2) matrices with columns `[x, y]`.
use crate::bounds::BoundingBox;
use crate::errors::{GeoError, Result};
use log::debug;
use ndarray::{Array2, ArrayBase, Data, Ix2};

pub(crate) fn check_coords(x: &ArrayBase<impl Data<Elem = f64>, Ix2>) -> Result<()> {
    if x.ncols() != 2 {
        return Err(GeoError::InvalidShape(format!(
            "coordinates should be a (n, 2) matrix with [x, y] columns, got {:?}",
            x.shape()
        )));
    }
    Ok(())
}

/// Applies `fx` to the x column and `fy` to the y column
fn map_columns(
    x: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    bounds: &BoundingBox,
    fx: impl Fn(f64) -> f64 + Sync + Send,
    fy: impl Fn(f64) -> f64 + Sync + Send,
) -> Result<Array2<f64>> {
    check_coords(x)?;
    bounds.check()?;
    let mut out = x.to_owned();
    out.column_mut(0).par_mapv_inplace(fx);
    out.column_mut(1).par_mapv_inplace(fy);
    Ok(out)
}

/// Linear rescale of coordinates within `bounds` to the unit box `[0, 1]²`
pub fn to_unit_box(
    x: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    bounds: &BoundingBox,
) -> Result<Array2<f64>> {
    let (x_min, width) = (bounds.x_min, bounds.width());
    let (y_min, height) = (bounds.y_min, bounds.height());
    map_columns(
        x,
        bounds,
        move |v| (v - x_min) / width,
        move |v| (v - y_min) / height,
    )
}

/// Inverse of [`to_unit_box`]
pub fn from_unit_box(
    x: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    bounds: &BoundingBox,
) -> Result<Array2<f64>> {
    let (x_min, width) = (bounds.x_min, bounds.width());
    let (y_min, height) = (bounds.y_min, bounds.height());
    map_columns(
        x,
        bounds,
        move |v| v * width + x_min,
        move |v| v * height + y_min,
    )
}

/// Linear rescale of coordinates within `bounds` to the grid box `[-1, 1]²`
pub fn to_grid_box(
    x: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    bounds: &BoundingBox,
) -> Result<Array2<f64>> {
    let (x_min, width) = (bounds.x_min, bounds.width());
    let (y_min, height) = (bounds.y_min, bounds.height());
    map_columns(
        x,
        bounds,
        move |v| 2. * (v - x_min) / width - 1.,
        move |v| 2. * (v - y_min) / height - 1.,
    )
}

/// Inverse of [`to_grid_box`]
pub fn from_grid_box(
    x: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    bounds: &BoundingBox,
) -> Result<Array2<f64>> {
    let (x_min, width) = (bounds.x_min, bounds.width());
    let (y_min, height) = (bounds.y_min, bounds.height());
    map_columns(
        x,
        bounds,
        move |v| (v + 1.) / 2. * width + x_min,
        move |v| (v + 1.) / 2. * height + y_min,
    )
}

/// Normalizes polar stereographic coordinates into the unit box.
///
/// ```
/// use icebo_geo::{ps_to_norm, PS_BOUNDS};
/// use ndarray::array;
///
/// let x = array![[1_300_000., -200_000.], [2_000_000., -900_000.]];
/// let xn = ps_to_norm(&x, &PS_BOUNDS).unwrap();
/// assert_eq!(xn, array![[0., 1.], [0.5, 0.5]]);
/// ```
pub fn ps_to_norm(
    x: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    bounds: &BoundingBox,
) -> Result<Array2<f64>> {
    debug!("Normalize {} polar stereographic points", x.nrows());
    to_unit_box(x, bounds)
}

/// Denormalizes unit box coordinates back to polar stereographic coordinates
pub fn norm_to_ps(
    x: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    bounds: &BoundingBox,
) -> Result<Array2<f64>> {
    debug!("Denormalize {} unit box points", x.nrows());
    from_unit_box(x, bounds)
}

/// Projects polar stereographic coordinates into the grid box of a speed raster
/// (see [`SPEED_GRID_BOUNDS`](crate::SPEED_GRID_BOUNDS)) for grid sampling.
pub fn ps_to_speed(
    x: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    bounds: &BoundingBox,
) -> Result<Array2<f64>> {
    debug!("Project {} polar stereographic points to speed grid", x.nrows());
    to_grid_box(x, bounds)
}

/// Inverse of [`ps_to_speed`]
pub fn speed_to_ps(
    x: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    bounds: &BoundingBox,
) -> Result<Array2<f64>> {
    debug!("Unproject {} speed grid points", x.nrows());
    from_grid_box(x, bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::{PS_BOUNDS, SPEED_GRID_BOUNDS};
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array, Axis};
    use ndarray_rand::rand::SeedableRng;
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;
    use rand_xoshiro::Xoshiro256Plus;

    fn ps_points(n: usize) -> Array2<f64> {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let xs = Array::random_using((n, 1), Uniform::new(1_300_000., 2_700_000.), &mut rng);
        let ys = Array::random_using((n, 1), Uniform::new(-1_600_000., -200_000.), &mut rng);
        ndarray::concatenate![Axis(1), xs, ys]
    }

    #[test]
    fn test_ps_to_norm() {
        let x = array![
            [1_300_000., -1_600_000.],
            [2_700_000., -200_000.],
            [1_650_000., -1_250_000.]
        ];
        let xn = ps_to_norm(&x, &PS_BOUNDS).unwrap();
        assert_abs_diff_eq!(xn, array![[0., 0.], [1., 1.], [0.25, 0.25]], epsilon = 1e-12);
    }

    #[test]
    fn test_norm_round_trip() {
        let x = ps_points(50);
        let xn = ps_to_norm(&x, &PS_BOUNDS).unwrap();
        assert!(xn.iter().all(|v| (0. ..=1.).contains(v)));
        let back = norm_to_ps(&xn, &PS_BOUNDS).unwrap();
        assert_abs_diff_eq!(back, x, epsilon = 1e-6);
    }

    #[test]
    fn test_ps_to_speed_orientation() {
        // northwest corner of the raster is the top left pixel
        let corners = array![[1_298_150., -198_350.], [2_701_700., -1_601_900.]];
        let xg = ps_to_speed(&corners, &SPEED_GRID_BOUNDS).unwrap();
        assert_abs_diff_eq!(xg, array![[-1., -1.], [1., 1.]], epsilon = 1e-12);

        let center = array![[1_999_925., -900_125.]];
        let xg = ps_to_speed(&center, &SPEED_GRID_BOUNDS).unwrap();
        assert_abs_diff_eq!(xg, array![[0., 0.]], epsilon = 1e-12);
    }

    #[test]
    fn test_speed_round_trip() {
        let x = ps_points(50);
        let xg = ps_to_speed(&x, &SPEED_GRID_BOUNDS).unwrap();
        assert!(xg.iter().all(|v| (-1. ..=1.).contains(v)));
        let back = speed_to_ps(&xg, &SPEED_GRID_BOUNDS).unwrap();
        assert_abs_diff_eq!(back, x, epsilon = 1e-6);
    }

    #[test]
    fn test_empty_input() {
        let x = Array2::<f64>::zeros((0, 2));
        assert_eq!(ps_to_norm(&x, &PS_BOUNDS).unwrap().shape(), &[0, 2]);
    }

    #[test]
    fn test_invalid_inputs() {
        let x = array![[1., 2., 3.]];
        assert!(matches!(
            ps_to_norm(&x, &PS_BOUNDS),
            Err(GeoError::InvalidShape(_))
        ));
        let flat = BoundingBox::new(0., 0., 0., 1.);
        assert!(matches!(
            to_grid_box(&array![[0.5, 0.5]], &flat),
            Err(GeoError::InvalidBounds(_))
        ));
    }
}
