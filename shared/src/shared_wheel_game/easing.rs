use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::constants::{DEFAULT_EASING_X1, DEFAULT_EASING_X2, DEFAULT_EASING_Y1, DEFAULT_EASING_Y2};

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const SOLVE_EPSILON: f64 = 1e-7;

/// Deceleration profile of the spin. Purely visual, never touches the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EasingCurve {
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
    EaseOutQuart,
    Linear,
}

impl Default for EasingCurve {
    fn default() -> Self {
        EasingCurve::CubicBezier {
            x1: DEFAULT_EASING_X1,
            y1: DEFAULT_EASING_Y1,
            x2: DEFAULT_EASING_X2,
            y2: DEFAULT_EASING_Y2,
        }
    }
}

impl EasingCurve {
    /// Eased progress for linear time progress `t`. Input is clamped to [0, 1].
    pub fn progress(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match *self {
            EasingCurve::CubicBezier { x1, y1, x2, y2 } => {
                let s = solve_bezier_parameter(t, x1, x2);
                bezier(s, y1, y2)
            }
            EasingCurve::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
            EasingCurve::Linear => t,
        }
    }
}

/// Control point x-coordinates must stay inside [0, 1] or the curve is not
/// a function of time.
pub fn validate_easing(curve: &EasingCurve) -> Result<(), ValidationError> {
    if let EasingCurve::CubicBezier { x1, y1, x2, y2 } = *curve {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if !in_unit(x1) || !in_unit(x2) || !y1.is_finite() || !y2.is_finite() {
            return Err(ValidationError::new("invalid_easing_curve"));
        }
    }
    Ok(())
}

// One coordinate of a cubic Bézier anchored at 0 and 1
fn bezier(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

fn solve_bezier_parameter(x: f64, x1: f64, x2: f64) -> f64 {
    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let error = bezier(s, x1, x2) - x;
        if error.abs() < SOLVE_EPSILON {
            return s;
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= error / slope;
    }

    // x(s) is monotonic for x1, x2 in [0, 1]
    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..BISECTION_ITERATIONS {
        let value = bezier(s, x1, x2);
        if (value - x).abs() < SOLVE_EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [EasingCurve; 3] = [
        EasingCurve::CubicBezier { x1: 0.4, y1: 0.0, x2: 0.2, y2: 1.0 },
        EasingCurve::EaseOutQuart,
        EasingCurve::Linear,
    ];

    #[test]
    fn test_endpoints_are_fixed() {
        for curve in CURVES {
            assert_eq!(curve.progress(0.0), 0.0);
            assert_eq!(curve.progress(1.0), 1.0);
            assert_eq!(curve.progress(-3.0), 0.0);
            assert_eq!(curve.progress(5.0), 1.0);
        }
    }

    #[test]
    fn test_progress_is_monotonic() {
        for curve in CURVES {
            let mut previous = 0.0;
            for step in 1..=100 {
                let value = curve.progress(step as f64 / 100.0);
                assert!(value + 1e-9 >= previous, "{:?} at step {}", curve, step);
                previous = value;
            }
        }
    }

    #[test]
    fn test_default_curve_decelerates() {
        let curve = EasingCurve::default();
        // Front-loaded: more than half the distance is covered by the midpoint
        assert!(curve.progress(0.5) > 0.7);
        assert!(curve.progress(0.9) > 0.98);
    }

    #[test]
    fn test_symmetric_bezier_hits_midpoint() {
        let curve = EasingCurve::CubicBezier { x1: 0.42, y1: 0.0, x2: 0.58, y2: 1.0 };
        assert!((curve.progress(0.5) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_ease_out_quart() {
        assert!((EasingCurve::EaseOutQuart.progress(0.5) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn test_validation_rejects_out_of_range_control_points() {
        assert!(validate_easing(&EasingCurve::default()).is_ok());
        assert!(validate_easing(&EasingCurve::CubicBezier { x1: 1.5, y1: 0.0, x2: 0.2, y2: 1.0 }).is_err());
        // Overshooting y is allowed, like CSS
        assert!(validate_easing(&EasingCurve::CubicBezier { x1: 0.3, y1: -0.5, x2: 0.6, y2: 1.4 }).is_ok());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&EasingCurve::Linear).unwrap();
        assert_eq!(json, r#"{"kind":"linear"}"#);
        let parsed: EasingCurve =
            serde_json::from_str(r#"{"kind":"cubic_bezier","x1":0.1,"y1":0.7,"x2":1.0,"y2":0.1}"#).unwrap();
        assert_eq!(parsed, EasingCurve::CubicBezier { x1: 0.1, y1: 0.7, x2: 1.0, y2: 0.1 });
    }
}
