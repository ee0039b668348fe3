use crate::{
    animation::ease::Ease,
    animation::value::{AnimationOptions, StyleState},
    document::node::{Document, NodeId},
};

/// Handle of a running tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct TweenId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Timing parameters of one tween.
pub struct TweenVars {
    /// Per-node duration in seconds.
    pub duration_s: f64,
    /// Easing curve.
    pub ease: Ease,
    /// Start offset in seconds between consecutive target nodes.
    pub stagger_s: f64,
}

impl Default for TweenVars {
    fn default() -> Self {
        Self {
            duration_s: 0.5,
            ease: Ease::default(),
            stagger_s: 0.0,
        }
    }
}

impl TweenVars {
    /// Read `duration`, `easing` and `stagger` from resolved options.
    ///
    /// Options arrive as text when set through markup, so values are parsed here;
    /// unusable values fall back to the defaults with a warning.
    pub fn from_options(options: &AnimationOptions) -> Self {
        let defaults = Self::default();

        let duration_s = read_seconds(options, "duration").unwrap_or(defaults.duration_s);
        let stagger_s = read_seconds(options, "stagger").unwrap_or(defaults.stagger_s);
        let ease = match options.get("easing") {
            None => defaults.ease,
            Some(v) => Ease::parse(&v.to_string()).unwrap_or_else(|err| {
                tracing::warn!(%err, "falling back to the default ease");
                defaults.ease
            }),
        };

        Self {
            duration_s,
            ease,
            stagger_s,
        }
    }
}

fn read_seconds(options: &AnimationOptions, key: &str) -> Option<f64> {
    let raw = options.get(key)?;
    match raw.as_f64() {
        Some(v) if v.is_finite() && v >= 0.0 => Some(v),
        _ => {
            tracing::warn!(option = key, value = %raw, "ignoring unusable timing option");
            None
        }
    }
}

/// The tween engine contract.
///
/// Engines own their frame loop; the runtime only drives time forward with [`tick`]
/// and consumes completion reports.
///
/// [`tick`]: TweenEngine::tick
pub trait TweenEngine {
    /// Apply `state` to every node immediately, without a transition.
    fn set(&mut self, doc: &mut Document, nodes: &[NodeId], state: &StyleState);

    /// Start a transition of every node towards `state`.
    fn to(&mut self, doc: &Document, nodes: &[NodeId], state: StyleState, vars: TweenVars)
    -> TweenId;

    /// Advance time by `dt_ms`, writing interpolated values, and return the tweens that
    /// finished during this step. Each id is reported exactly once.
    fn tick(&mut self, doc: &mut Document, dt_ms: f64) -> Vec<TweenId>;

    /// `true` while any tween is running.
    fn is_active(&self) -> bool;
}

#[cfg(test)]
#[path = "../../tests/unit/tween/engine.rs"]
mod tests;
