//! Seam through which an external model feeds the infill criteria.
use crate::errors::{AcqError, Result};
use ndarray::{Array1, ArrayView2};

/// A trait for a surrogate of the objective function.
///
/// Criteria only need the predictive mean and variance at a set of points,
/// so any regression model able to provide them can be plugged in.
pub trait Surrogate: Sync {
    /// Predict output values at n points given as (n, xdim) matrix.
    fn predict(&self, x: &ArrayView2<f64>) -> Result<Array1<f64>>;
    /// Predict variance values at n points given as (n, xdim) matrix.
    fn predict_var(&self, x: &ArrayView2<f64>) -> Result<Array1<f64>>;
    /// Predict both output values and variance at n given `x` points of nx components
    fn predict_valvar(&self, x: &ArrayView2<f64>) -> Result<(Array1<f64>, Array1<f64>)> {
        Ok((self.predict(x)?, self.predict_var(x)?))
    }
}

/// A surrogate built from two pointwise functions returning
/// the predicted mean and variance at a given point.
///
/// ```
/// use icebo_acq::{FnSurrogate, Surrogate};
/// use ndarray::array;
///
/// let model = FnSurrogate::new(|x: &[f64]| x[0] * x[0], |_: &[f64]| 0.25);
/// let (mean, var) = model.predict_valvar(&array![[2.0], [3.0]].view()).unwrap();
/// assert_eq!(mean, array![4.0, 9.0]);
/// assert_eq!(var, array![0.25, 0.25]);
/// ```
pub struct FnSurrogate<M, V> {
    mean: M,
    var: V,
}

impl<M, V> FnSurrogate<M, V>
where
    M: Fn(&[f64]) -> f64 + Sync,
    V: Fn(&[f64]) -> f64 + Sync,
{
    /// Constructor given mean and variance functions
    pub fn new(mean: M, var: V) -> Self {
        FnSurrogate { mean, var }
    }
}

fn map_rows(x: &ArrayView2<f64>, f: impl Fn(&[f64]) -> f64) -> Array1<f64> {
    x.rows()
        .into_iter()
        .map(|row| {
            let row = row.as_standard_layout();
            // a standard layout row is always contiguous
            row.as_slice().map(&f).unwrap_or(f64::NAN)
        })
        .collect()
}

impl<M, V> Surrogate for FnSurrogate<M, V>
where
    M: Fn(&[f64]) -> f64 + Sync,
    V: Fn(&[f64]) -> f64 + Sync,
{
    fn predict(&self, x: &ArrayView2<f64>) -> Result<Array1<f64>> {
        Ok(map_rows(x, &self.mean))
    }

    fn predict_var(&self, x: &ArrayView2<f64>) -> Result<Array1<f64>> {
        let var = map_rows(x, &self.var);
        if var.iter().any(|v| *v < 0.) {
            return Err(AcqError::SurrogateError(
                "negative predicted variance".to_string(),
            ));
        }
        Ok(var)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_fn_surrogate_predict() {
        let model = FnSurrogate::new(|x: &[f64]| x[0] + x[1], |x: &[f64]| x[0].abs());
        let x = array![[1., 2.], [-3., 4.]];
        assert_eq!(model.predict(&x.view()).unwrap(), array![3., 1.]);
        assert_eq!(model.predict_var(&x.view()).unwrap(), array![1., 3.]);
    }

    #[test]
    fn test_fn_surrogate_non_contiguous_rows() {
        let model = FnSurrogate::new(|x: &[f64]| x[0] - x[1], |_: &[f64]| 1.);
        let x = array![[1., 2.], [5., 4.]];
        let xt = x.t();
        assert_eq!(model.predict(&xt).unwrap(), array![-4., -2.]);
    }

    #[test]
    fn test_fn_surrogate_negative_variance() {
        let model = FnSurrogate::new(|_: &[f64]| 0., |_: &[f64]| -1.);
        assert!(matches!(
            model.predict_var(&array![[0.]].view()),
            Err(AcqError::SurrogateError(_))
        ));
    }
}
