//! Numerically stable evaluation of `log(φ(u) + u Φ(u))`, the part of
//! log expected improvement depending only on the standardized improvement `u`.
use libm::{erfc, exp, expm1, log, log1p};

use super::misc::{norm_cdf, norm_pdf};

const INV_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
// log(2π)/2
const HALF_LOG_2PI: f64 = 0.9189385332046727;
// log(π/2)/2
const HALF_LOG_HALF_PI: f64 = 0.2257913526447274;

/// Scaled complementary error function `exp(u²) erfc(u)`
fn erfcx(u: f64) -> f64 {
    if u < 25. {
        exp(u * u) * erfc(u)
    } else {
        // asymptotic expansion, exp(u²) overflows
        let inv_u2 = 1. / (u * u);
        (1. - 0.5 * inv_u2 + 0.75 * inv_u2 * inv_u2 - 1.875 * inv_u2 * inv_u2 * inv_u2)
            / (u * std::f64::consts::PI.sqrt())
    }
}

/// `log(1 - exp(x))` for x < 0
fn log1mexp(x: f64) -> f64 {
    if x > -std::f64::consts::LN_2 {
        log(-expm1(x))
    } else {
        log1p(-exp(x))
    }
}

/// Computes `log(φ(u) + u Φ(u))` without underflow for large negative `u`.
pub fn log_ei_helper(u: f64) -> f64 {
    if u > -1. {
        return log(norm_pdf(u) + u * norm_cdf(u));
    }
    let log_pdf = -0.5 * u * u - HALF_LOG_2PI;
    let tail = if u > -1e3 {
        let w = log(erfcx(-INV_SQRT_2 * u) * u.abs()) + HALF_LOG_HALF_PI;
        log1mexp(w)
    } else {
        // asymptotic expansion
        -2. * log(u.abs())
    };
    log_pdf + tail
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_log_ei_helper() {
        // reference values from trieste
        let cases = [
            (-2.0, -4.7687836),
            (-1.0, -2.4851208),
            (0.0, -0.9189385),
            (1.0, 0.08002624),
            (2.0, 0.69738346),
        ];
        for (u, expected) in cases {
            assert_abs_diff_eq!(log_ei_helper(u), expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_log_ei_helper_is_finite_far_in_the_tail() {
        for u in [-30., -100., -1e4] {
            assert!(log_ei_helper(u).is_finite(), "log_ei_helper({u}) not finite");
        }
        assert!(log_ei_helper(-40.) < log_ei_helper(-30.));
    }

    #[test]
    fn test_erfcx_continuity() {
        let below = erfcx(25. - 1e-9);
        let above = erfcx(25.);
        assert_abs_diff_eq!(below, above, epsilon = 1e-10);
    }
}
