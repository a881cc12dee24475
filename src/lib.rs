//! **easel**: cubic Bézier timing functions for animation easing.
//!
//! An animation driver samples the wall clock, computes the elapsed fraction
//! `elapsed / duration` and asks a timing function where the animated value
//! should be.  easel provides that last step.
//!
//! # Architecture
//!
//! * [`bezier::UnitBezier`]: a cubic Bézier from `(0,0)` to `(1,1)` and the
//!   Newton/bisection solver that inverts it.
//! * [`traits::Easing`]: the one capability drivers depend on: warp a time
//!   fraction and blend two scalars with it.
//! * [`timing::TimingFunction`]: linear and cubic-bezier easing with the
//!   CSS presets, parseable from names and `cubic-bezier(...)` literals.
//! * [`transition::Transition`]: a scalar animation sampled by elapsed
//!   [`Duration`](std::time::Duration).
//! * [`config`]: JSON configuration for user-defined curves and the
//!   `easel` sampler binary.

pub mod bezier;
pub mod config;
pub mod timing;
pub mod traits;
pub mod transition;
