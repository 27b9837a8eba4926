use crate::Order;

/// Relative step used by [`central_difference`].
///
/// The absolute step at `x` is `DERIVATIVE_BUMP * max(1, |x|)`.
pub const DERIVATIVE_BUMP: f64 = 1.0e-4;

/// Approximates a derivative of `f` at `x` with a central difference.
///
/// - First order: `(f(x + h) - f(x - h)) / 2h`
/// - Second order: `(f(x + h) - 2 f(x) + f(x - h)) / h²`
///
/// The result may be non-finite if `f` is non-finite near `x`;
/// callers decide how to treat that.
///
/// # Errors
///
/// Returns the first error produced by `f`.
pub fn central_difference<F, E>(f: F, x: f64, order: Order) -> Result<f64, E>
where
    F: Fn(f64) -> Result<f64, E>,
{
    let h = DERIVATIVE_BUMP * x.abs().max(1.0);
    let up = f(x + h)?;
    let down = f(x - h)?;

    match order {
        Order::First => Ok((up - down) / (2.0 * h)),
        Order::Second => {
            let mid = f(x)?;
            Ok((up - 2.0 * mid + down) / (h * h))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    fn exp(x: f64) -> Result<f64, Infallible> {
        Ok(x.exp())
    }

    #[test]
    fn first_order_matches_analytic() {
        let slope = central_difference(exp, 1.0, Order::First).unwrap();
        assert_relative_eq!(slope, 1.0_f64.exp(), max_relative = 1e-7);
    }

    #[test]
    fn second_order_matches_analytic() {
        let curvature = central_difference(exp, 1.0, Order::Second).unwrap();
        assert_relative_eq!(curvature, 1.0_f64.exp(), max_relative = 1e-5);
    }

    #[test]
    fn step_scales_with_magnitude() {
        // A cubic has an exact central first difference up to h² · f'''/6.
        let cube = |x: f64| -> Result<f64, Infallible> { Ok(x.powi(3)) };
        let slope = central_difference(cube, 1.0e3, Order::First).unwrap();
        assert_relative_eq!(slope, 3.0e6, max_relative = 1e-6);
    }

    #[test]
    fn propagates_errors() {
        let failing = |x: f64| if x > 0.0 { Err("undefined") } else { Ok(x) };
        let result = central_difference(failing, 0.0, Order::First);
        assert_eq!(result, Err("undefined"));
    }
}
