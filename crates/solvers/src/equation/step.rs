use super::{Error, SINGULAR_DERIVATIVE_TOL};

/// Zero of the line through `(a, fa)` and `(b, fb)`.
pub(super) fn secant(a: f64, fa: f64, b: f64, fb: f64) -> Result<f64, Error> {
    #[allow(clippy::float_cmp)]
    if fa == fb {
        return Err(Error::DegenerateSecant { a, b, value: fa });
    }
    Ok(a - fa * (b - a) / (fb - fa))
}

/// Zero of the tangent at `(x, fx)` with slope `dfx`.
///
/// Returns `None` when the slope is too close to zero to step along.
pub(super) fn tangent(x: f64, fx: f64, dfx: f64) -> Option<f64> {
    (dfx.abs() >= SINGULAR_DERIVATIVE_TOL).then(|| x - fx / dfx)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn secant_interpolates_zero_crossing() {
        // Line through (1, -1) and (2, 2) crosses zero at 4/3.
        let x = secant(1.0, -1.0, 2.0, 2.0).expect("non-degenerate");
        assert_relative_eq!(x, 4.0 / 3.0);
    }

    #[test]
    fn secant_is_symmetric_in_endpoints() {
        let forward = secant(1.0, -1.0, 2.0, 2.0).expect("non-degenerate");
        let reverse = secant(2.0, 2.0, 1.0, -1.0).expect("non-degenerate");
        assert_relative_eq!(forward, reverse, epsilon = 1e-15);
    }

    #[test]
    fn horizontal_secant_is_an_error() {
        assert_eq!(
            secant(-1.0, 1.0, 1.0, 1.0),
            Err(Error::DegenerateSecant {
                a: -1.0,
                b: 1.0,
                value: 1.0
            })
        );
    }

    #[test]
    fn tangent_steps_to_line_zero() {
        // Tangent of x^2 - 2 at x = 1 has slope 2 and crosses zero at 1.5.
        let x = tangent(1.0, -1.0, 2.0).expect("non-singular");
        assert_relative_eq!(x, 1.5);
    }

    #[test]
    fn tangent_refuses_flat_slope() {
        assert_eq!(tangent(0.0, -2.0, 0.0), None);
        assert_eq!(tangent(0.0, -2.0, 1e-13), None);
        assert!(tangent(0.0, -2.0, SINGULAR_DERIVATIVE_TOL).is_some());
    }
}
