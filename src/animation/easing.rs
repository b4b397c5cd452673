//! Named easing curves backed by raylib's Penner functions.

use raylib::prelude::ease;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

type EaseFn = fn(f32, f32, f32, f32) -> f32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Easing {
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    #[default]
    CubicOut,
    CubicInOut,
    SineIn,
    SineOut,
    SineInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    BackIn,
    BackOut,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown easing '{0}'")]
pub struct ParseEasingError(pub String);

impl Easing {
    /// The raylib easing function this curve delegates to.
    pub fn ease_fn(self) -> EaseFn {
        match self {
            Easing::Linear => ease::linear_none,
            Easing::QuadIn => ease::quad_in,
            Easing::QuadOut => ease::quad_out,
            Easing::QuadInOut => ease::quad_in_out,
            Easing::CubicIn => ease::cubic_in,
            Easing::CubicOut => ease::cubic_out,
            Easing::CubicInOut => ease::cubic_in_out,
            Easing::SineIn => ease::sine_in,
            Easing::SineOut => ease::sine_out,
            Easing::SineInOut => ease::sine_in_out,
            Easing::ExpoIn => ease::expo_in,
            Easing::ExpoOut => ease::expo_out,
            Easing::ExpoInOut => ease::expo_in_out,
            Easing::BackIn => ease::back_in,
            Easing::BackOut => ease::back_out,
        }
    }

    /// Eased progress for `t` in `0.0..=1.0`. Input outside the range is clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return 1.0;
        }
        (self.ease_fn())(t, 0.0, 1.0, 1.0)
    }

    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "none",
            Easing::QuadIn => "quad.in",
            Easing::QuadOut => "quad.out",
            Easing::QuadInOut => "quad.inOut",
            Easing::CubicIn => "cubic.in",
            Easing::CubicOut => "cubic.out",
            Easing::CubicInOut => "cubic.inOut",
            Easing::SineIn => "sine.in",
            Easing::SineOut => "sine.out",
            Easing::SineInOut => "sine.inOut",
            Easing::ExpoIn => "expo.in",
            Easing::ExpoOut => "expo.out",
            Easing::ExpoInOut => "expo.inOut",
            Easing::BackIn => "back.in",
            Easing::BackOut => "back.out",
        }
    }
}

impl FromStr for Easing {
    type Err = ParseEasingError;

    /// Accepts the canonical names plus the `powerN` aliases used by page
    /// scripts: `power1` is quadratic and `power2` cubic. raylib has no
    /// quartic curve, so `power3` maps to the exponential one, the nearest
    /// steeper shape. A bare `powerN` means its `.out` variant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let easing = match s.trim() {
            "none" | "linear" => Easing::Linear,
            "quad.in" | "power1.in" => Easing::QuadIn,
            "quad.out" | "power1.out" | "power1" => Easing::QuadOut,
            "quad.inOut" | "power1.inOut" => Easing::QuadInOut,
            "cubic.in" | "power2.in" => Easing::CubicIn,
            "cubic.out" | "power2.out" | "power2" => Easing::CubicOut,
            "cubic.inOut" | "power2.inOut" => Easing::CubicInOut,
            "sine.in" => Easing::SineIn,
            "sine.out" | "sine" => Easing::SineOut,
            "sine.inOut" => Easing::SineInOut,
            "expo.in" | "power3.in" => Easing::ExpoIn,
            "expo.out" | "power3.out" | "power3" => Easing::ExpoOut,
            "expo.inOut" | "power3.inOut" => Easing::ExpoInOut,
            "back.in" => Easing::BackIn,
            "back.out" | "back" => Easing::BackOut,
            other => return Err(ParseEasingError(other.to_string())),
        };
        Ok(easing)
    }
}

impl TryFrom<String> for Easing {
    type Error = ParseEasingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Easing> for String {
    fn from(easing: Easing) -> Self {
        easing.name().to_string()
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
