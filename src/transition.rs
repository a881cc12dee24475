//! Sampling an eased value over time.
//!
//! A [`Transition`] owns everything an animation driver needs to turn a wall
//! clock into a value: the easing curve, the duration and both endpoints.
//! The driver only tracks when the animation started.
//!
//! ```
//! use easel::timing::TimingFunction;
//! use easel::transition::Transition;
//! use std::time::Duration;
//!
//! let t = Transition::new(TimingFunction::EASE_OUT, Duration::from_millis(200), 0.0, 100.0);
//! assert_eq!(t.value_at(Duration::ZERO), 0.0);
//! assert_eq!(t.value_at(Duration::from_millis(200)), 100.0);
//! ```

use crate::timing::TimingFunction;
use crate::traits::Easing;
use std::time::Duration;

/// An animation of a single scalar from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition<E = TimingFunction> {
    easing: E,
    duration: Duration,
    from: f32,
    to: f32,
}

impl<E: Easing> Transition<E> {
    pub fn new(easing: E, duration: Duration, from: f32, to: f32) -> Self {
        Self {
            easing,
            duration,
            from,
            to,
        }
    }

    pub fn easing(&self) -> &E {
        &self.easing
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Fraction of the duration that has passed, capped at `1.0`.
    ///
    /// A zero-length transition is always complete.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased value after `elapsed`.
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        let duration_ms = u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX);
        self.easing
            .interpolate(self.progress(elapsed), duration_ms, self.from, self.to)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Iterate over the frames of this transition at `fps` frames per
    /// second, from the first frame at zero to a final frame exactly at the
    /// end.  An `fps` of zero is treated as one.
    pub fn frames(&self, fps: u32) -> Frames<'_, E> {
        Frames {
            transition: self,
            step: Duration::from_secs(1) / fps.max(1),
            index: 0,
            done: false,
        }
    }
}

/// One sampled frame of a [`Transition`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub elapsed: Duration,
    pub progress: f32,
    pub value: f32,
}

/// Iterator returned by [`Transition::frames`].
#[derive(Debug)]
pub struct Frames<'a, E> {
    transition: &'a Transition<E>,
    step: Duration,
    index: u32,
    done: bool,
}

impl<E: Easing> Iterator for Frames<'_, E> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.done {
            return None;
        }
        let t = self.transition;
        let elapsed = self
            .step
            .checked_mul(self.index)
            .map_or(t.duration, |e| e.min(t.duration));
        if elapsed >= t.duration {
            self.done = true;
        }
        self.index = self.index.saturating_add(1);
        Some(Frame {
            elapsed,
            progress: t.progress(elapsed),
            value: t.value_at(elapsed),
        })
    }
}
