use crate::errors::{AcqError, Result};
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix2};
use ndarray_stats::{DeviationExt, QuantileExt};

/// Computes the (q, q) matrix of euclidean distances between the rows of `x`.
pub fn pairwise_distances(x: &ArrayBase<impl Data<Elem = f64>, Ix2>) -> Array2<f64> {
    let q = x.nrows();
    let mut dist = Array2::zeros((q, q));
    for i in 0..q {
        for j in (i + 1)..q {
            // only fails on zero-dimensional rows, which are at distance 0
            let dij = x.row(i).l2_dist(&x.row(j)).unwrap_or(0.);
            dist[[i, j]] = dij;
            dist[[j, i]] = dij;
        }
    }
    dist
}

/// Computes the similarity matrix `exp(-d_ij / lengthscale)` between the rows of `x`
/// with a zeroed diagonal so that a point is never compared to itself.
pub fn similarities(x: &ArrayBase<impl Data<Elem = f64>, Ix2>, lengthscale: f64) -> Array2<f64> {
    let mut sim = pairwise_distances(x).mapv(|d| (-d / lengthscale).exp());
    sim.diag_mut().fill(0.);
    sim
}

/// Computes the weight of each point of the batch `x` as one minus its mean
/// similarity to the batch, normalized by the largest weight.
///
/// Weights lie in `(0, 1]`, the most isolated point of the batch gets 1.
/// The mean is taken over the `q` columns, the zeroed diagonal included,
/// hence weights before normalization are at least `1/q`.
pub fn distance_weights(
    x: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    lengthscale: f64,
) -> Result<Array1<f64>> {
    check_lengthscale(lengthscale)?;
    check_batch(x)?;

    let sim = similarities(x, lengthscale);
    let w = sim
        .mean_axis(Axis(1))
        .ok_or_else(|| AcqError::InvalidValue("empty batch".to_string()))?
        .mapv(|m| 1. - m);
    let w_max = *w
        .max()
        .map_err(|err| AcqError::InvalidValue(format!("weights normalization: {err}")))?;
    Ok(w / w_max)
}

pub(crate) fn check_lengthscale(lengthscale: f64) -> Result<()> {
    if lengthscale.is_finite() && lengthscale > 0. {
        Ok(())
    } else {
        Err(AcqError::InvalidConfigError(format!(
            "lengthscale should be a positive finite number, got {lengthscale}"
        )))
    }
}

pub(crate) fn check_batch(x: &ArrayBase<impl Data<Elem = f64>, Ix2>) -> Result<()> {
    if x.nrows() == 0 {
        return Err(AcqError::InvalidValue(
            "candidate batch should contain at least one point".to_string(),
        ));
    }
    if x.iter().any(|v| !v.is_finite()) {
        return Err(AcqError::InvalidValue(
            "candidate batch contains non finite values".to_string(),
        ));
    }
    Ok(())
}
