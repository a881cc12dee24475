//! Named timing functions.
//!
//! [`TimingFunction`] is either a plain linear blend or a [`UnitBezier`]
//! ease.  The presets match the WebKit/CSS control points so content authored
//! against those curves animates identically.
//!
//! # Textual form
//!
//! Timing functions parse from and display as the names used in config files
//! and on the command line:
//!
//! ```text
//! linear
//! default
//! ease-in
//! ease-out
//! ease-in-out
//! cubic-bezier(0.2, 0.9, 0.3, 1)
//! ```
//!
//! Names are matched case-insensitively and ignore whitespace, `_` and `-`,
//! so `EaseInOut` and `ease_in_out` are both accepted.

use crate::bezier::UnitBezier;
use crate::traits::{solve_epsilon, Easing};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An easing curve plus its interpolation policy.
///
/// Values are immutable and `Copy`; one instance can drive any number of
/// animations since duration and elapsed time are passed in per call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimingFunction {
    /// Progress equals elapsed time.
    Linear,
    /// Progress follows a cubic Bézier from `(0,0)` to `(1,1)`.
    CubicBezier(UnitBezier),
}

/// Presets and their names, in the order they are tried when formatting.
const PRESETS: [(&str, TimingFunction); 5] = [
    ("linear", TimingFunction::LINEAR),
    ("default", TimingFunction::DEFAULT),
    ("ease-in", TimingFunction::EASE_IN),
    ("ease-out", TimingFunction::EASE_OUT),
    ("ease-in-out", TimingFunction::EASE_IN_OUT),
];

impl TimingFunction {
    pub const LINEAR: Self = Self::Linear;
    pub const DEFAULT: Self = Self::cubic_bezier(0.25, 0.10, 0.25, 0.10);
    pub const EASE_IN: Self = Self::cubic_bezier(0.42, 0.00, 1.00, 1.00);
    pub const EASE_OUT: Self = Self::cubic_bezier(0.00, 0.00, 0.58, 1.00);
    pub const EASE_IN_OUT: Self = Self::cubic_bezier(0.42, 0.00, 0.58, 1.00);

    /// A custom cubic-bezier timing function.
    pub const fn cubic_bezier(p1x: f32, p1y: f32, p2x: f32, p2y: f32) -> Self {
        Self::CubicBezier(UnitBezier::new(p1x, p1y, p2x, p2y))
    }

    /// The underlying curve, or `None` for [`Linear`](Self::Linear).
    pub fn curve(&self) -> Option<&UnitBezier> {
        match self {
            Self::Linear => None,
            Self::CubicBezier(curve) => Some(curve),
        }
    }

    /// Preset name if this function has the same control points as one.
    pub fn name(&self) -> Option<&'static str> {
        PRESETS
            .iter()
            .find(|(_, preset)| preset == self)
            .map(|(name, _)| *name)
    }
}

impl Default for TimingFunction {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Easing for TimingFunction {
    fn solve(&self, time: f32, duration_secs: f32) -> f32 {
        match self {
            Self::Linear => time,
            Self::CubicBezier(curve) => curve.solve(time, solve_epsilon(duration_secs)),
        }
    }
}

//  Textual form 

/// Error from parsing a [`TimingFunction`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseTimingError {
    #[error("unknown timing function: {0:?}")]
    UnknownName(String),
    #[error("cubic-bezier: expected four numbers, got {0:?}")]
    ControlPoints(String),
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            return f.write_str(name);
        }
        match self {
            Self::Linear => f.write_str("linear"),
            Self::CubicBezier(curve) => {
                let [p1x, p1y, p2x, p2y] = curve.control_points();
                write!(f, "cubic-bezier({}, {}, {}, {})", p1x, p1y, p2x, p2y)
            }
        }
    }
}

/// Parse the argument list of `cubic-bezier(...)`.
fn parse_control_points(args: &str) -> Result<TimingFunction, ParseTimingError> {
    let bad = || ParseTimingError::ControlPoints(args.to_string());
    let points = args
        .split(',')
        .map(|p| p.trim().parse::<f32>().map_err(|_| bad()))
        .collect::<Result<Vec<_>, _>>()?;
    match points.as_slice() {
        &[p1x, p1y, p2x, p2y] if points.iter().all(|p| p.is_finite()) => {
            Ok(TimingFunction::cubic_bezier(p1x, p1y, p2x, p2y))
        }
        _ => Err(bad()),
    }
}

impl FromStr for TimingFunction {
    type Err = ParseTimingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some((head, rest)) = trimmed.split_once('(') {
            if head.trim().eq_ignore_ascii_case("cubic-bezier") {
                return match rest.trim_end().strip_suffix(')') {
                    Some(args) => parse_control_points(args),
                    None => Err(ParseTimingError::ControlPoints(rest.to_string())),
                };
            }
        }

        let normalized: String = trimmed
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(|c| c.to_lowercase())
            .collect();
        match normalized.as_str() {
            "linear" => Ok(Self::LINEAR),
            "default" => Ok(Self::DEFAULT),
            "easein" => Ok(Self::EASE_IN),
            "easeout" => Ok(Self::EASE_OUT),
            "easeinout" => Ok(Self::EASE_IN_OUT),
            _ => Err(ParseTimingError::UnknownName(trimmed.to_string())),
        }
    }
}

impl Serialize for TimingFunction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Accepts a name (`"ease-in"`), `"cubic-bezier(a, b, c, d)"`, an array
/// `[a, b, c, d]`, or an object `{"x1", "y1", "x2", "y2"}`.
impl<'de> Deserialize<'de> for TimingFunction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{MapAccess, SeqAccess, Visitor};
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = TimingFunction;
            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "timing function name, cubic-bezier string, [x1, y1, x2, y2] or {{x1, y1, x2, y2}}")
            }
            fn visit_str<E>(self, s: &str) -> Result<TimingFunction, E>
            where
                E: DeError,
            {
                s.parse().map_err(E::custom)
            }
            fn visit_seq<A>(self, mut seq: A) -> Result<TimingFunction, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut points = [0.0_f32; 4];
                for (i, slot) in points.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| A::Error::invalid_length(i, &self))?;
                }
                if seq.next_element::<serde::de::IgnoredAny>()?.is_some() {
                    return Err(A::Error::invalid_length(5, &self));
                }
                let [p1x, p1y, p2x, p2y] = points;
                Ok(TimingFunction::cubic_bezier(p1x, p1y, p2x, p2y))
            }
            fn visit_map<A>(self, mut map: A) -> Result<TimingFunction, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut x1 = None;
                let mut y1 = None;
                let mut x2 = None;
                let mut y2 = None;
                while let Some(k) = map.next_key::<String>()? {
                    match k.as_str() {
                        "x1" => x1 = Some(map.next_value()?),
                        "y1" => y1 = Some(map.next_value()?),
                        "x2" => x2 = Some(map.next_value()?),
                        "y2" => y2 = Some(map.next_value()?),
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }
                Ok(TimingFunction::cubic_bezier(
                    x1.ok_or_else(|| A::Error::missing_field("x1"))?,
                    y1.ok_or_else(|| A::Error::missing_field("y1"))?,
                    x2.ok_or_else(|| A::Error::missing_field("x2"))?,
                    y2.ok_or_else(|| A::Error::missing_field("y2"))?,
                ))
            }
        }
        deserializer.deserialize_any(V)
    }
}
