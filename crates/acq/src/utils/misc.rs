use libm::erfc;

pub(crate) const SQRT_2PI: f64 = 2.5066282746310002;

/// Cumulative distribution function of Standard Normal at x
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Probability density function of Standard Normal at x
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / SQRT_2PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_norm_cdf() {
        assert_abs_diff_eq!(norm_cdf(0.), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(norm_cdf(1.96), 0.9750021048517795, epsilon = 1e-9);
        assert_abs_diff_eq!(norm_cdf(-1.96) + norm_cdf(1.96), 1., epsilon = 1e-12);
    }

    #[test]
    fn test_norm_pdf() {
        assert_abs_diff_eq!(norm_pdf(0.), 1. / SQRT_2PI, epsilon = 1e-12);
        assert_abs_diff_eq!(norm_pdf(1.), 0.24197072451914337, epsilon = 1e-12);
        assert_abs_diff_eq!(norm_pdf(-2.5), norm_pdf(2.5), epsilon = 1e-15);
    }
}
