use std::fmt;

use crate::{
    animation::definition::{AnimationDefinition, HookCtx},
    animation::placeholder::substitute,
    animation::value::StyleState,
    foundation::error::{EmberError, EmberResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Lifecycle state of an animated element.
pub enum Phase {
    /// Pre-visible styling, applied immediately on load.
    Initial,
    /// Resting styling, tweened to once the group is visible.
    Completed,
}

impl Phase {
    /// Stable lower-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the effective style state of `phase`: evaluate the phase state, overlay the
/// non-`None` entries of `always`, then resolve placeholders.
pub fn build_phase_state(
    def: &AnimationDefinition,
    ctx: &HookCtx<'_>,
    phase: Phase,
) -> EmberResult<StyleState> {
    let source = match phase {
        Phase::Initial => def.initial.as_ref(),
        Phase::Completed => def.completed.as_ref(),
    }
    .ok_or_else(|| {
        EmberError::animation(format!(
            "animation '{}' has no {phase} state",
            def.name
        ))
    })?;

    let mut state = source.evaluate(ctx)?;

    if let Some(always) = &def.always {
        let overlay = always.evaluate(ctx)?;
        for (key, value) in overlay.0 {
            if let Some(value) = value {
                state.0.insert(key, value);
            }
        }
    }

    Ok(substitute(&state, ctx.options))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/phase.rs"]
mod tests;
