//! Scroll-triggered entrance animations over an in-memory document.
//!
//! Containers marked as entrance groups animate their elements from an initial visual
//! state to a resting state once they scroll into view, with per-element delays staggered
//! by document order.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: [`Settings`] plus registered [`AnimationDefinition`]s form the
//!    [`RuntimeContext`].
//! 2. **Gather**: [`EntranceGroupBuilder`] discovers groups, resolves each element's
//!    animation and delay, and applies the initial phase state.
//! 3. **Observe**: after a settle delay, [`VisibilityScheduler`] reports groups entering the
//!    viewport (at most once per group).
//! 4. **Complete**: [`AnimationPhaseProcessor`] arms a tween per element; the
//!    [`TweenEngine`] runs it and the completion continuation swaps the state classes.
//!
//! [`Ember`] ties these together over a deterministic virtual clock.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod document;
mod entrance;
mod foundation;
mod runtime;
mod tween;

/// Role under which entrance animations are registered.
pub const ENTRANCE_ROLE: &str = "entrance";

pub use animation::definition::{
    AnimationDefinition, AnimationHooks, HookCtx, MutateHook, NodesHook, ParseOptionsHook,
    StateFn, StateSource, StaticDefinition, load_animation_pack, read_animation_pack,
};
pub use animation::ease::Ease;
pub use animation::library::{
    builtin_animations, fade, fade_letters, fade_motion, fade_words, roll, slide_words,
    split_text,
};
pub use animation::options::{ANIMATION_NAME_KEY, OPTION_DATASET_PREFIX, OptionsResolver};
pub use animation::phase::{Phase, build_phase_state};
pub use animation::placeholder::substitute;
pub use animation::registry::AnimationRegistry;
pub use animation::value::{
    AnimationOptions, OptionValue, StyleKey, StyleOverlay, StyleState, StyleTemplate, StyleValue,
};
pub use config::settings::{
    Length, PerAnimationOptions, RootMargin, SelectorConfig, Settings, SettingsPatch,
};
pub use document::node::{Document, ElementData, NodeId, NodeKind};
pub use document::page::{NodeSpec, Page, ScrollStep};
pub use document::selector::Selector;
pub use document::viewport::Viewport;
pub use entrance::builder::EntranceGroupBuilder;
pub use entrance::element::{EntranceElement, EntranceGroup};
pub use entrance::processor::{
    AnimationPhaseProcessor, ArmedTween, PhaseOutcome, completed_class, started_class,
};
pub use entrance::scheduler::{VisibilityScheduler, is_intersecting, root_rect};
pub use foundation::attr::{dataset_key, parse_leading_int};
pub use foundation::error::{EmberError, EmberResult, RegistrationError};
pub use runtime::clock::TimerQueue;
pub use runtime::context::RuntimeContext;
pub use runtime::ember::Ember;
pub use tween::engine::{TweenEngine, TweenId, TweenVars};
pub use tween::interp::Lerp;
pub use tween::tweener::Tweener;
