//! Easing curves for camera animation interpolation.

/// Easing curve variants evaluated over a normalized time parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingCurve {
    /// Linear interpolation (no easing).
    Linear,
    /// Cubic ease-out: `1 - (1 - t)^3`. Fast start, gentle landing; this is
    /// the curve both camera animations sample.
    CubicOut,
    /// Cubic with two interior control values.
    /// Formula: `c1*3t(1-t)^2 + c2*3(1-t)t^2 + t^3`.
    /// `CubicOut` is the `c1 = c2 = 1` special case.
    CubicHermite {
        /// First interior control value.
        c1: f32,
        /// Second interior control value.
        c2: f32,
    },
}

impl EasingCurve {
    /// Evaluate the curve at time `t`.
    ///
    /// Input is clamped to `[0.0, 1.0]`; the result stays in `[0.0, 1.0]`
    /// for the built-in shapes.
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
            Self::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingCurve::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_cubic_out_endpoints() {
        let curve = EasingCurve::CubicOut;
        assert_eq!(curve.evaluate(0.0), 0.0);
        assert!((curve.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_out_shape() {
        // Ease-out: early progress should outrun linear time.
        let curve = EasingCurve::CubicOut;
        let result_at_quarter = curve.evaluate(0.25);
        assert!(
            result_at_quarter > 0.25,
            "ease-out should have value > 0.25 at t=0.25, got {result_at_quarter}"
        );
    }

    #[test]
    fn test_cubic_out_matches_hermite_special_case() {
        let out = EasingCurve::CubicOut;
        let hermite = EasingCurve::CubicHermite { c1: 1.0, c2: 1.0 };
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!(
                (out.evaluate(t) - hermite.evaluate(t)).abs() < 1e-6,
                "curves diverge at t={t}"
            );
        }
    }

    #[test]
    fn test_input_clamping() {
        let curve = EasingCurve::CubicOut;
        assert_eq!(curve.evaluate(-0.5), 0.0);
        assert!((curve.evaluate(1.5) - 1.0).abs() < 1e-6);
    }
}
