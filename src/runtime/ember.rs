use std::collections::BTreeMap;

use crate::{
    animation::definition::AnimationDefinition,
    animation::library::builtin_animations,
    animation::phase::Phase,
    config::settings::{Settings, SettingsPatch},
    document::node::Document,
    document::viewport::Viewport,
    entrance::builder::EntranceGroupBuilder,
    entrance::element::EntranceGroup,
    entrance::processor::{AnimationPhaseProcessor, ArmedTween, PhaseOutcome},
    entrance::scheduler::VisibilityScheduler,
    foundation::error::{EmberError, EmberResult, RegistrationError},
    runtime::clock::TimerQueue,
    runtime::context::RuntimeContext,
    tween::engine::{TweenEngine, TweenId},
    tween::tweener::Tweener,
};

#[derive(Debug)]
enum Task {
    StartObserving,
    StartTween(Box<ArmedTween>),
}

/// Top-level entrance runtime over one document.
///
/// Owns the runtime context, the document, the tween engine and a virtual clock. Nothing
/// happens on its own: time moves forward through [`Ember::advance`] and the viewport
/// through [`Ember::scroll_to`].
pub struct Ember {
    ctx: RuntimeContext,
    document: Document,
    viewport: Viewport,
    engine: Box<dyn TweenEngine>,
    groups: Vec<EntranceGroup>,
    scheduler: VisibilityScheduler,
    timers: TimerQueue<Task>,
    in_flight: BTreeMap<TweenId, ArmedTween>,
    initialized: bool,
    observing: bool,
    completed_elements: usize,
}

impl Ember {
    /// Runtime with default settings, an empty registry and the built-in [`Tweener`].
    pub fn new(document: Document, viewport: Viewport) -> Self {
        Self::with_engine(document, viewport, Box::new(Tweener::new()))
    }

    /// Runtime driving a custom tween engine.
    pub fn with_engine(
        document: Document,
        viewport: Viewport,
        engine: Box<dyn TweenEngine>,
    ) -> Self {
        Self {
            ctx: RuntimeContext::default(),
            document,
            viewport,
            engine,
            groups: Vec::new(),
            scheduler: VisibilityScheduler::new(),
            timers: TimerQueue::new(),
            in_flight: BTreeMap::new(),
            initialized: false,
            observing: false,
            completed_elements: 0,
        }
    }

    /// Merge `patch` into the settings.
    pub fn set_defaults(&mut self, patch: SettingsPatch) {
        self.ctx.set_defaults(patch);
    }

    /// Register `defs` under `role`. Problems are logged and returned; the rest still register.
    pub fn register_animations(
        &mut self,
        role: &str,
        defs: impl IntoIterator<Item = AnimationDefinition>,
    ) -> Vec<RegistrationError> {
        self.ctx.register_animations(role, defs)
    }

    /// Register the bundled entrance animations.
    pub fn register_builtin_animations(&mut self) -> Vec<RegistrationError> {
        self.ctx
            .register_animations(crate::ENTRANCE_ROLE, builtin_animations())
    }

    /// Gather groups, apply every initial state and arm the observation timer.
    ///
    /// A failed gather leaves the runtime uninitialized, so `init` may be called again.
    #[tracing::instrument(skip(self))]
    pub fn init(&mut self) -> EmberResult<()> {
        if self.initialized {
            return Err(EmberError::validation("ember is already initialized"));
        }

        self.groups = EntranceGroupBuilder::new(&self.ctx).gather_all(
            &mut self.document,
            self.engine.as_mut(),
            &self.viewport,
        )?;
        self.initialized = true;
        self.timers
            .schedule(self.ctx.settings.observe_delay_ms, Task::StartObserving);
        tracing::info!(groups = self.groups.len(), "entrances initialized");
        Ok(())
    }

    /// Move virtual time forward by `dt_ms`, firing timers and ticking the engine in order.
    #[tracing::instrument(skip(self))]
    pub fn advance(&mut self, dt_ms: u64) -> EmberResult<()> {
        let target = self.timers.now_ms().saturating_add(dt_ms);
        loop {
            let now = self.timers.now_ms();
            match self.timers.next_due().filter(|due| *due <= target) {
                Some(due) => {
                    if due > now {
                        self.tick_engine(due - now)?;
                        self.timers.advance_to(due);
                    }
                    if let Some(task) = self.timers.pop_due(target) {
                        self.run_task(task)?;
                    }
                }
                None => {
                    if target > now {
                        self.tick_engine(target - now)?;
                    }
                    self.timers.advance_to(target);
                    return Ok(());
                }
            }
        }
    }

    /// Scroll the viewport to `y` and re-test observed groups.
    #[tracing::instrument(skip(self))]
    pub fn scroll_to(&mut self, y: f64) -> EmberResult<()> {
        self.viewport.scroll_y = y;
        if self.observing {
            self.check_visibility()?;
        }
        Ok(())
    }

    /// Advance in steps of `step_ms` until nothing is pending or `limit_ms` elapsed.
    /// Returns the elapsed time.
    pub fn run_until_idle(&mut self, step_ms: u64, limit_ms: u64) -> EmberResult<u64> {
        let step_ms = step_ms.max(1);
        let mut elapsed = 0;
        while !self.is_idle() && elapsed < limit_ms {
            let dt = step_ms.min(limit_ms - elapsed);
            self.advance(dt)?;
            elapsed += dt;
        }
        Ok(elapsed)
    }

    /// `true` when no timer, armed tween or running tween is pending.
    pub fn is_idle(&self) -> bool {
        self.timers.is_empty() && self.in_flight.is_empty() && !self.engine.is_active()
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    /// `true` once observation has started.
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Groups built by [`Ember::init`], in document order.
    pub fn groups(&self) -> &[EntranceGroup] {
        &self.groups
    }

    /// `true` once the group at `index` became visible.
    pub fn group_fired(&self, index: usize) -> bool {
        self.scheduler.has_fired(index)
    }

    /// Number of elements whose completed tween finished.
    pub fn completed_elements(&self) -> usize {
        self.completed_elements
    }

    /// The animated document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Current viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.ctx.settings
    }

    /// Runtime context (settings and registry).
    pub fn context(&self) -> &RuntimeContext {
        &self.ctx
    }

    fn run_task(&mut self, task: Task) -> EmberResult<()> {
        match task {
            Task::StartObserving => {
                for i in 0..self.groups.len() {
                    self.scheduler.observe(i);
                }
                self.observing = true;
                tracing::debug!(groups = self.groups.len(), "observing entrance groups");
                self.check_visibility()
            }
            Task::StartTween(armed) => {
                let id = armed.start(&self.document, self.engine.as_mut());
                self.in_flight.insert(id, *armed);
                Ok(())
            }
        }
    }

    fn check_visibility(&mut self) -> EmberResult<()> {
        let visible = self.scheduler.take_visible(
            &self.document,
            &self.viewport,
            &self.ctx.settings.root_margin,
            &self.groups,
        );

        let processor = AnimationPhaseProcessor::new(&self.ctx);
        for index in visible {
            for element in &self.groups[index].elements {
                let outcome = processor.process(
                    &mut self.document,
                    self.engine.as_mut(),
                    crate::ENTRANCE_ROLE,
                    element,
                    Phase::Completed,
                )?;
                if let PhaseOutcome::Armed(armed) = outcome {
                    self.timers
                        .schedule(armed.start_delay_ms, Task::StartTween(Box::new(armed)));
                }
            }
        }
        Ok(())
    }

    fn tick_engine(&mut self, dt_ms: u64) -> EmberResult<()> {
        // Drain first: a failing hook must not strand the other finished tweens.
        let finished: Vec<ArmedTween> = self
            .engine
            .tick(&mut self.document, dt_ms as f64)
            .into_iter()
            .filter_map(|id| self.in_flight.remove(&id))
            .collect();

        let mut first_err = None;
        for armed in finished {
            match armed.finish(&mut self.document) {
                Ok(()) => self.completed_elements += 1,
                Err(err) => {
                    tracing::warn!(anim = %armed.element.anim, error = %err, "completion hook failed");
                    first_err.get_or_insert(err);
                }
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/ember.rs"]
mod tests;
