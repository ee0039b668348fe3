use std::{
    collections::BTreeMap,
    fmt,
    fs::File,
    io::{BufReader, Read},
    path::Path,
    sync::Arc,
};

use crate::{
    animation::value::{AnimationOptions, OptionValue, StyleOverlay, StyleTemplate},
    document::node::{Document, NodeId},
    entrance::element::EntranceElement,
    foundation::error::{EmberError, EmberResult},
};

/// Read-only view handed to computed states and read-only hooks.
#[derive(Clone, Copy)]
pub struct HookCtx<'a> {
    /// The document the element lives in.
    pub doc: &'a Document,
    /// The element being processed.
    pub element: &'a EntranceElement,
    /// Effective options for this invocation.
    pub options: &'a AnimationOptions,
}

/// Computes a state from the element and its options.
pub type StateFn<T> = Arc<dyn Fn(&HookCtx<'_>) -> EmberResult<T> + Send + Sync>;
/// Restructures the element before the initial state is applied, or restores it on completion.
pub type MutateHook =
    Arc<dyn Fn(&mut Document, &EntranceElement, &AnimationOptions) -> EmberResult<()> + Send + Sync>;
/// Chooses the nodes a phase state is applied to.
pub type NodesHook = Arc<dyn Fn(&HookCtx<'_>) -> EmberResult<Vec<NodeId>> + Send + Sync>;
/// Adjusts the effective options after every declarative layer was merged.
pub type ParseOptionsHook = Arc<
    dyn Fn(&Document, &EntranceElement, &mut AnimationOptions) -> EmberResult<()> + Send + Sync,
>;

/// A state that is either declared up front or computed per element.
#[derive(Clone)]
pub enum StateSource<T> {
    /// Declared state.
    Static(T),
    /// State computed from `(element, options)`.
    Computed(StateFn<T>),
}

impl<T: Clone> StateSource<T> {
    /// Produce the state for one invocation.
    pub fn evaluate(&self, ctx: &HookCtx<'_>) -> EmberResult<T> {
        match self {
            Self::Static(s) => Ok(s.clone()),
            Self::Computed(f) => f(ctx),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for StateSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(s) => f.debug_tuple("Static").field(s).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Optional lifecycle hooks. Callers check presence before invoking.
#[derive(Clone, Default)]
pub struct AnimationHooks {
    /// Runs before the initial state is built.
    pub on_setup: Option<MutateHook>,
    /// Chooses target nodes instead of the element itself.
    pub on_get_nodes: Option<NodesHook>,
    /// Runs once the completed tween finishes.
    pub on_complete: Option<MutateHook>,
    /// Last-write adjustment of the effective options; may overwrite anything,
    /// including `animationName`.
    pub on_parse_options: Option<ParseOptionsHook>,
}

impl fmt::Debug for AnimationHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationHooks")
            .field("on_setup", &self.on_setup.is_some())
            .field("on_get_nodes", &self.on_get_nodes.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .field("on_parse_options", &self.on_parse_options.is_some())
            .finish()
    }
}

/// Declarative description of one animation.
///
/// Definitions are immutable once registered; the registry tags them with their role.
#[derive(Clone, Debug)]
pub struct AnimationDefinition {
    /// Name, unique within its role.
    pub name: String,
    /// Role assigned on registration.
    pub role: Option<String>,
    /// Option defaults of this animation.
    pub default_options: BTreeMap<String, OptionValue>,
    /// State applied immediately on load.
    pub initial: Option<StateSource<StyleTemplate>>,
    /// State tweened to once the group becomes visible.
    pub completed: Option<StateSource<StyleTemplate>>,
    /// Properties overlaid on both phases. `None` entries are skipped.
    pub always: Option<StateSource<StyleOverlay>>,
    /// Lifecycle hooks.
    pub hooks: AnimationHooks,
}

impl AnimationDefinition {
    /// Start a definition with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: None,
            default_options: BTreeMap::new(),
            initial: None,
            completed: None,
            always: None,
            hooks: AnimationHooks::default(),
        }
    }

    /// Add an option default.
    pub fn default_option(mut self, key: &str, value: impl Into<OptionValue>) -> Self {
        self.default_options.insert(key.to_string(), value.into());
        self
    }

    /// Declare a static initial state.
    pub fn initial(mut self, state: StyleTemplate) -> Self {
        self.initial = Some(StateSource::Static(state));
        self
    }

    /// Compute the initial state per element.
    pub fn initial_with(
        mut self,
        f: impl Fn(&HookCtx<'_>) -> EmberResult<StyleTemplate> + Send + Sync + 'static,
    ) -> Self {
        self.initial = Some(StateSource::Computed(Arc::new(f)));
        self
    }

    /// Declare a static completed state.
    pub fn completed(mut self, state: StyleTemplate) -> Self {
        self.completed = Some(StateSource::Static(state));
        self
    }

    /// Compute the completed state per element.
    pub fn completed_with(
        mut self,
        f: impl Fn(&HookCtx<'_>) -> EmberResult<StyleTemplate> + Send + Sync + 'static,
    ) -> Self {
        self.completed = Some(StateSource::Computed(Arc::new(f)));
        self
    }

    /// Declare a static persistent overlay.
    pub fn always(mut self, overlay: StyleOverlay) -> Self {
        self.always = Some(StateSource::Static(overlay));
        self
    }

    /// Compute the persistent overlay per element.
    pub fn always_with(
        mut self,
        f: impl Fn(&HookCtx<'_>) -> EmberResult<StyleOverlay> + Send + Sync + 'static,
    ) -> Self {
        self.always = Some(StateSource::Computed(Arc::new(f)));
        self
    }

    /// Install the setup hook.
    pub fn on_setup(
        mut self,
        f: impl Fn(&mut Document, &EntranceElement, &AnimationOptions) -> EmberResult<()>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.hooks.on_setup = Some(Arc::new(f));
        self
    }

    /// Install the target-node hook.
    pub fn on_get_nodes(
        mut self,
        f: impl Fn(&HookCtx<'_>) -> EmberResult<Vec<NodeId>> + Send + Sync + 'static,
    ) -> Self {
        self.hooks.on_get_nodes = Some(Arc::new(f));
        self
    }

    /// Install the completion hook.
    pub fn on_complete(
        mut self,
        f: impl Fn(&mut Document, &EntranceElement, &AnimationOptions) -> EmberResult<()>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.hooks.on_complete = Some(Arc::new(f));
        self
    }

    /// Install the option post-processing hook.
    pub fn on_parse_options(
        mut self,
        f: impl Fn(&Document, &EntranceElement, &mut AnimationOptions) -> EmberResult<()>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.hooks.on_parse_options = Some(Arc::new(f));
        self
    }
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
/// JSON form of a hook-free animation definition.
pub struct StaticDefinition {
    /// Animation name. Missing names are reported at registration.
    #[serde(default)]
    pub name: String,
    /// Option defaults.
    #[serde(default)]
    pub default_options: BTreeMap<String, OptionValue>,
    /// Initial state.
    #[serde(default)]
    pub initial: Option<StyleTemplate>,
    /// Completed state.
    #[serde(default)]
    pub completed: Option<StyleTemplate>,
    /// Persistent overlay.
    #[serde(default)]
    pub always: Option<StyleOverlay>,
}

impl From<StaticDefinition> for AnimationDefinition {
    fn from(s: StaticDefinition) -> Self {
        Self {
            name: s.name,
            role: None,
            default_options: s.default_options,
            initial: s.initial.map(StateSource::Static),
            completed: s.completed.map(StateSource::Static),
            always: s.always.map(StateSource::Static),
            hooks: AnimationHooks::default(),
        }
    }
}

/// Parse a JSON array of [`StaticDefinition`]s.
pub fn read_animation_pack<R: Read>(r: R) -> EmberResult<Vec<AnimationDefinition>> {
    let defs: Vec<StaticDefinition> = serde_json::from_reader(r)
        .map_err(|e| EmberError::serde(format!("animation pack JSON: {e}")))?;
    Ok(defs.into_iter().map(AnimationDefinition::from).collect())
}

/// Load a JSON animation pack from disk.
pub fn load_animation_pack(path: impl AsRef<Path>) -> EmberResult<Vec<AnimationDefinition>> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| {
        EmberError::validation(format!("open animation pack '{}': {e}", path.display()))
    })?;
    read_animation_pack(BufReader::new(f))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/definition.rs"]
mod tests;
