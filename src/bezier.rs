//! CSS-like unit cubic Bézier curves.
//!
//! A [`UnitBezier`] is a cubic Bézier whose first and last control points are
//! fixed at `(0,0)` and `(1,1)`.  Only the two interior control points are
//! configurable, which is exactly the shape of a CSS `cubic-bezier()` timing
//! function.
//!
//! Easing needs `y` as a function of `x`, but the curve is parametric in `t`,
//! so [`UnitBezier::solve`] first inverts `x(t)` numerically:
//!
//! 1. Newton-Raphson from `t = x`, which converges in a handful of steps for
//!    the monotonic curves used as easing functions.
//! 2. Bisection over `[0, 1]` when Newton runs out of iterations or the
//!    derivative is too flat to divide by.
//!
//! Neither phase can fail.  If the tolerance is never met the last estimate is
//! returned as is.

use log::trace;

/// Newton-Raphson iterations before falling back to bisection.
const NEWTON_ITERATIONS: usize = 8;

/// Slopes below this are treated as flat and hand over to bisection.
const MIN_SLOPE: f32 = 1e-6;

/// Upper bound on bisection steps.  `f32` has 24 bits of mantissa, so the
/// bracket collapses long before this.
const BISECTION_ITERATIONS: usize = 64;

/// A cubic Bézier from `(0,0)` to `(1,1)` with control points
/// `(p1x, p1y)` and `(p2x, p2y)`.
///
/// The polynomial coefficients are computed once in [`new`](Self::new) and
/// never change, so a curve can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitBezier {
    p1x: f32,
    p1y: f32,
    p2x: f32,
    p2y: f32,

    ax: f32,
    bx: f32,
    cx: f32,

    ay: f32,
    by: f32,
    cy: f32,
}

impl UnitBezier {
    /// Build a curve from its two interior control points.
    ///
    /// Coordinates are not validated.  Values outside `[0, 1]` still produce a
    /// curve, it just may not be monotonic in `x`.
    pub const fn new(p1x: f32, p1y: f32, p2x: f32, p2y: f32) -> Self {
        // B(t) = ((a*t + b)*t + c)*t with the endpoints at 0 and 1.
        let cx = 3.0 * p1x;
        let bx = 3.0 * (p2x - p1x) - cx;
        let ax = 1.0 - cx - bx;

        let cy = 3.0 * p1y;
        let by = 3.0 * (p2y - p1y) - cy;
        let ay = 1.0 - cy - by;

        Self {
            p1x,
            p1y,
            p2x,
            p2y,
            ax,
            bx,
            cx,
            ay,
            by,
            cy,
        }
    }

    /// The interior control points as `[p1x, p1y, p2x, p2y]`.
    pub fn control_points(&self) -> [f32; 4] {
        [self.p1x, self.p1y, self.p2x, self.p2y]
    }

    #[inline]
    fn sample_curve_x(&self, t: f32) -> f32 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    #[inline]
    fn sample_curve_y(&self, t: f32) -> f32 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    #[inline]
    fn sample_curve_derivative_x(&self, t: f32) -> f32 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    /// Find the curve parameter `t` at which `x(t)` is within `epsilon` of
    /// `x`.
    pub fn solve_curve_x(&self, x: f32, epsilon: f32) -> f32 {
        let mut t2 = x;
        for _ in 0..NEWTON_ITERATIONS {
            let x2 = self.sample_curve_x(t2) - x;
            if x2.abs() < epsilon {
                return t2;
            }
            let d2 = self.sample_curve_derivative_x(t2);
            if d2.abs() < MIN_SLOPE {
                break;
            }
            t2 -= x2 / d2;
        }

        let mut t0 = 0.0_f32;
        let mut t1 = 1.0_f32;
        t2 = x;

        if t2 < t0 {
            return t0;
        }
        if t2 > t1 {
            return t1;
        }

        for _ in 0..BISECTION_ITERATIONS {
            if t0 >= t1 {
                break;
            }
            let x2 = self.sample_curve_x(t2);
            if (x2 - x).abs() < epsilon {
                return t2;
            }
            if x > x2 {
                t0 = t2;
            } else {
                t1 = t2;
            }
            t2 = (t1 - t0) * 0.5 + t0;
        }

        trace!("bisection gave up at x={} (t={}, epsilon={})", x, t2, epsilon);
        t2
    }

    /// Map the time fraction `x` to the eased fraction `y`.
    ///
    /// `epsilon` bounds the error of the inversion of `x(t)`.
    pub fn solve(&self, x: f32, epsilon: f32) -> f32 {
        self.sample_curve_y(self.solve_curve_x(x, epsilon))
    }
}
