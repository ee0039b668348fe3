use crate::foundation::error::{EmberError, EmberResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Easing curves available to tweens.
pub enum Ease {
    /// Identity curve.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    #[default]
    OutQuad,
    /// Quadratic ease-in-out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in-out.
    InOutCubic,
    /// Quartic ease-in.
    InQuart,
    /// Quartic ease-out.
    OutQuart,
    /// Quartic ease-in-out.
    InOutQuart,
    /// Quintic ease-in.
    InQuint,
    /// Quintic ease-out.
    OutQuint,
    /// Quintic ease-in-out.
    InOutQuint,
    /// Sine ease-in.
    InSine,
    /// Sine ease-out.
    OutSine,
    /// Sine ease-in-out.
    InOutSine,
    /// Exponential ease-in.
    InExpo,
    /// Exponential ease-out.
    OutExpo,
    /// Exponential ease-in-out.
    InOutExpo,
}

fn pow_in(t: f64, p: i32) -> f64 {
    t.powi(p)
}

fn pow_out(t: f64, p: i32) -> f64 {
    1.0 - (1.0 - t).powi(p)
}

fn pow_in_out(t: f64, p: i32) -> f64 {
    if t < 0.5 {
        2f64.powi(p - 1) * t.powi(p)
    } else {
        1.0 - ((-2.0 * t + 2.0).powi(p) / 2.0)
    }
}

impl Ease {
    /// Map linear progress `t` in `[0, 1]` onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        use std::f64::consts::PI;

        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => pow_in(t, 2),
            Self::OutQuad => pow_out(t, 2),
            Self::InOutQuad => pow_in_out(t, 2),
            Self::InCubic => pow_in(t, 3),
            Self::OutCubic => pow_out(t, 3),
            Self::InOutCubic => pow_in_out(t, 3),
            Self::InQuart => pow_in(t, 4),
            Self::OutQuart => pow_out(t, 4),
            Self::InOutQuart => pow_in_out(t, 4),
            Self::InQuint => pow_in(t, 5),
            Self::OutQuint => pow_out(t, 5),
            Self::InOutQuint => pow_in_out(t, 5),
            Self::InSine => 1.0 - ((t * PI) / 2.0).cos(),
            Self::OutSine => ((t * PI) / 2.0).sin(),
            Self::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Self::InExpo => {
                if t == 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * t - 10.0)
                }
            }
            Self::OutExpo => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Self::InOutExpo => {
                if t == 0.0 || t == 1.0 {
                    t
                } else if t < 0.5 {
                    2f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
        }
    }

    /// Parse a GSAP-style ease name (`power2.out`, `sine.inOut`, `none`, ...).
    ///
    /// A bare family name (`power3`) means its `.out` variant.
    pub fn parse(name: &str) -> EmberResult<Self> {
        let name = name.trim();
        let (family, dir) = name.split_once('.').unwrap_or((name, "out"));
        let family = family.to_ascii_lowercase();
        let dir = dir.to_ascii_lowercase();

        if matches!(family.as_str(), "none" | "linear" | "power0") {
            return Ok(Self::Linear);
        }

        let variants = match family.as_str() {
            "power1" | "quad" => [Self::InQuad, Self::OutQuad, Self::InOutQuad],
            "power2" | "cubic" => [Self::InCubic, Self::OutCubic, Self::InOutCubic],
            "power3" | "quart" => [Self::InQuart, Self::OutQuart, Self::InOutQuart],
            "power4" | "quint" | "strong" => [Self::InQuint, Self::OutQuint, Self::InOutQuint],
            "sine" => [Self::InSine, Self::OutSine, Self::InOutSine],
            "expo" => [Self::InExpo, Self::OutExpo, Self::InOutExpo],
            _ => {
                return Err(EmberError::validation(format!("unknown ease '{name}'")));
            }
        };

        match dir.as_str() {
            "in" => Ok(variants[0]),
            "out" => Ok(variants[1]),
            "inout" => Ok(variants[2]),
            _ => Err(EmberError::validation(format!(
                "unknown ease direction in '{name}'"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
