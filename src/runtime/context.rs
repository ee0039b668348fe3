use crate::{
    animation::definition::AnimationDefinition,
    animation::registry::AnimationRegistry,
    config::settings::{Settings, SettingsPatch},
    foundation::error::RegistrationError,
};

/// Settings and registered animations shared by every resolution step.
///
/// Built once, configured before `init`, then read-mostly. Late changes are visible to
/// the next resolution immediately; nothing is snapshotted.
#[derive(Clone, Debug, Default)]
pub struct RuntimeContext {
    /// Process-wide settings.
    pub settings: Settings,
    /// Registered animation definitions.
    pub registry: AnimationRegistry,
}

impl RuntimeContext {
    /// Context with the given settings and an empty registry.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            registry: AnimationRegistry::default(),
        }
    }

    /// Merge a settings patch.
    pub fn set_defaults(&mut self, patch: SettingsPatch) {
        self.settings.merge(patch);
    }

    /// Register every definition under `role`, collecting reported problems.
    pub fn register_animations(
        &mut self,
        role: &str,
        defs: impl IntoIterator<Item = AnimationDefinition>,
    ) -> Vec<RegistrationError> {
        defs.into_iter()
            .flat_map(|d| self.registry.register(role, d))
            .collect()
    }
}
