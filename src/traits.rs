//! The capability every timing function shares.
//!
//! Animation drivers only ever need one thing from an easing curve: turn a
//! linear time fraction into a warped one and blend two scalars with it.
//! [`Easing`] captures exactly that, so a [`Transition`](crate::transition::Transition)
//! can be driven by the built-in [`TimingFunction`](crate::timing::TimingFunction)s,
//! a bare [`UnitBezier`], or a test double.

use crate::bezier::UnitBezier;

/// Shortest duration used when deriving a solver tolerance.
///
/// Anything at or below zero (or NaN) is treated as one millisecond.
pub const MIN_DURATION_SECS: f32 = 0.001;

/// Solver tolerance for an animation lasting `duration_secs`.
///
/// Longer animations spread the same error over more frames, so the tolerance
/// shrinks as `1 / (200 * duration)`.
pub fn solve_epsilon(duration_secs: f32) -> f32 {
    1.0 / (200.0 * duration_secs.max(MIN_DURATION_SECS))
}

/// A curve that maps elapsed-time fractions to progress fractions.
///
/// Implementations must be pure: the same inputs always give the same output
/// and no call may fail.
pub trait Easing {
    /// Warp the time fraction `time` (nominally in `[0, 1]`) for an animation
    /// of `duration_secs` seconds.
    fn solve(&self, time: f32, duration_secs: f32) -> f32;

    /// Blend `start` and `end` by an already-warped `frame`.
    ///
    /// Exact at both ends: a frame of `0.0` gives `start` and `1.0` gives
    /// `end` for any finite endpoints.
    fn blend(&self, frame: f32, start: f32, end: f32) -> f32 {
        frame * end + (1.0 - frame) * start
    }

    /// Value of an animation from `start` to `end` at time fraction `time`.
    ///
    /// `duration_ms` only affects the solver tolerance.
    fn interpolate(&self, time: f32, duration_ms: u64, start: f32, end: f32) -> f32 {
        let frame = self.solve(time, duration_ms as f32 / 1000.0);
        self.blend(frame, start, end)
    }
}

impl Easing for UnitBezier {
    fn solve(&self, time: f32, duration_secs: f32) -> f32 {
        UnitBezier::solve(self, time, solve_epsilon(duration_secs))
    }
}

impl<E: Easing + ?Sized> Easing for &E {
    fn solve(&self, time: f32, duration_secs: f32) -> f32 {
        (**self).solve(time, duration_secs)
    }

    fn blend(&self, frame: f32, start: f32, end: f32) -> f32 {
        (**self).blend(frame, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    //  Mock Easing 

    /// A test double that records the durations it was asked to solve for.
    #[derive(Debug, Default)]
    struct MockEasing {
        durations: RefCell<Vec<f32>>,
    }

    impl Easing for MockEasing {
        fn solve(&self, time: f32, duration_secs: f32) -> f32 {
            self.durations.borrow_mut().push(duration_secs);
            time * time
        }
    }

    #[test]
    fn interpolate_converts_millis_to_seconds() {
        let e = MockEasing::default();
        let v = e.interpolate(0.5, 250, 0.0, 8.0);
        assert_eq!(v, 2.0);
        assert_eq!(*e.durations.borrow(), vec![0.25]);
    }

    #[test]
    fn default_blend_hits_endpoints() {
        let e = MockEasing::default();
        assert_eq!(e.blend(0.0, -5.0, 5.0), -5.0);
        assert_eq!(e.blend(1.0, -5.0, 5.0), 5.0);
        assert_eq!(e.blend(0.5, 2.0, 4.0), 3.0);
        assert_eq!(e.blend(0.0, 100.0, 0.7), 100.0);
        assert_eq!(e.blend(1.0, 100.0, 0.7), 0.7);
        assert_eq!(e.blend(1.0, -1.3, 2.9), 2.9);
    }

    #[test]
    fn epsilon_scales_with_duration() {
        assert!((solve_epsilon(1.0) - 0.005).abs() < 1e-9);
        assert!((solve_epsilon(5.0) - 0.001).abs() < 1e-9);
        assert!(solve_epsilon(2.0) < solve_epsilon(1.0));
    }

    #[test]
    fn epsilon_clamps_degenerate_durations() {
        let floor = solve_epsilon(MIN_DURATION_SECS);
        assert_eq!(solve_epsilon(0.0), floor);
        assert_eq!(solve_epsilon(-3.0), floor);
        assert_eq!(solve_epsilon(f32::NAN), floor);
        assert!(floor.is_finite());
    }

    #[test]
    fn unit_bezier_uses_duration_tolerance() {
        let c = UnitBezier::new(0.42, 0.0, 0.58, 1.0);
        let via_trait = Easing::solve(&c, 0.3, 2.0);
        let direct = c.solve(0.3, solve_epsilon(2.0));
        assert_eq!(via_trait.to_bits(), direct.to_bits());
    }

    #[test]
    fn zero_duration_still_interpolates() {
        let c = UnitBezier::new(0.42, 0.0, 0.58, 1.0);
        assert_eq!(c.interpolate(0.0, 0, 1.0, 3.0), 1.0);
        assert!(c.interpolate(1.0, 0, 1.0, 3.0).is_finite());
    }
}
