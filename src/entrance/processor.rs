use std::sync::Arc;

use crate::{
    animation::definition::{AnimationDefinition, HookCtx},
    animation::options::OptionsResolver,
    animation::phase::{Phase, build_phase_state},
    animation::value::{AnimationOptions, StyleState},
    document::node::{Document, NodeId},
    entrance::element::EntranceElement,
    foundation::error::EmberResult,
    runtime::context::RuntimeContext,
    tween::engine::{TweenEngine, TweenId, TweenVars},
};

/// Class marking an element whose completed tween has been armed.
pub fn started_class(role: &str) -> String {
    format!("ember-{role}--started")
}

/// Class marking an element whose completed tween has finished.
pub fn completed_class(role: &str) -> String {
    format!("ember-{role}--completed")
}

/// Result of processing one phase for one element.
#[derive(Debug)]
pub enum PhaseOutcome {
    /// No definition is registered for the element's animation.
    Skipped,
    /// The initial state was applied to the target nodes.
    Applied,
    /// The completed tween is ready to start once its delay elapses.
    Armed(ArmedTween),
}

/// A completed-phase tween waiting for its start delay, then running until completion.
///
/// Everything the tween needs is captured when it is armed: later option or settings
/// changes do not affect it.
#[derive(Clone, Debug)]
pub struct ArmedTween {
    /// Role the element was processed under.
    pub role: String,
    /// The element being animated.
    pub element: EntranceElement,
    /// Delay in milliseconds from arming to start.
    pub start_delay_ms: u64,
    /// Nodes the tween writes to.
    pub nodes: Vec<NodeId>,
    /// Target state.
    pub state: StyleState,
    /// Timing.
    pub vars: TweenVars,
    options: AnimationOptions,
    def: Arc<AnimationDefinition>,
}

impl ArmedTween {
    /// Hand the tween to the engine.
    pub fn start(&self, doc: &Document, engine: &mut dyn TweenEngine) -> TweenId {
        tracing::debug!(anim = %self.element.anim, node = self.element.node.index(), "starting completed tween");
        engine.to(doc, &self.nodes, self.state.clone(), self.vars)
    }

    /// Completion continuation: run `on_complete`, then swap the state classes.
    pub fn finish(&self, doc: &mut Document) -> EmberResult<()> {
        if let Some(hook) = &self.def.hooks.on_complete {
            hook(doc, &self.element, &self.options)?;
        }
        doc.remove_class(self.element.node, &started_class(&self.role));
        doc.add_class(self.element.node, &completed_class(&self.role));
        Ok(())
    }
}

/// Runs the two-phase state machine of one element.
pub struct AnimationPhaseProcessor<'a> {
    ctx: &'a RuntimeContext,
}

impl<'a> AnimationPhaseProcessor<'a> {
    /// Processor reading definitions and settings from `ctx`.
    pub fn new(ctx: &'a RuntimeContext) -> Self {
        Self { ctx }
    }

    /// Process `phase` for `element`.
    ///
    /// Unknown animations are skipped silently. Hook and state errors propagate.
    #[tracing::instrument(skip_all, fields(role = %role, anim = %element.anim, phase = %phase))]
    pub fn process(
        &self,
        doc: &mut Document,
        engine: &mut dyn TweenEngine,
        role: &str,
        element: &EntranceElement,
        phase: Phase,
    ) -> EmberResult<PhaseOutcome> {
        let Some(def) = self.ctx.registry.lookup(role, &element.anim) else {
            tracing::debug!(
                known = ?self.ctx.registry.names(role),
                "no animation registered, skipping"
            );
            return Ok(PhaseOutcome::Skipped);
        };

        let options = OptionsResolver::new(self.ctx).resolve(doc, element, &def)?;

        if phase == Phase::Initial
            && let Some(hook) = &def.hooks.on_setup
        {
            hook(doc, element, &options)?;
        }

        let (nodes, state) = {
            let ctx = HookCtx {
                doc: &*doc,
                element,
                options: &options,
            };
            let nodes = match &def.hooks.on_get_nodes {
                Some(hook) => hook(&ctx)?,
                None => vec![element.node],
            };
            (nodes, build_phase_state(&def, &ctx, phase)?)
        };

        match phase {
            Phase::Initial => {
                engine.set(doc, &nodes, &state);
                Ok(PhaseOutcome::Applied)
            }
            Phase::Completed => {
                doc.add_class(element.node, &started_class(role));
                let pad = i64::try_from(self.ctx.settings.tween_start_pad_ms).unwrap_or(i64::MAX);
                let start_delay_ms = u64::try_from(element.delay.saturating_add(pad)).unwrap_or(0);
                Ok(PhaseOutcome::Armed(ArmedTween {
                    role: role.to_string(),
                    element: element.clone(),
                    start_delay_ms,
                    nodes,
                    state,
                    vars: TweenVars::from_options(&options),
                    options,
                    def,
                }))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/entrance/processor.rs"]
mod tests;
