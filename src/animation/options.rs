use crate::{
    animation::definition::AnimationDefinition,
    animation::value::{AnimationOptions, OptionValue},
    document::node::Document,
    entrance::element::EntranceElement,
    foundation::attr::lower_first,
    foundation::error::EmberResult,
    runtime::context::RuntimeContext,
};

/// Dataset prefix of per-element option overrides (`data-entrance-anim-<option>`).
pub const OPTION_DATASET_PREFIX: &str = "entranceAnim";

/// Option key always seeded with the element's resolved animation name.
pub const ANIMATION_NAME_KEY: &str = "animationName";

/// Merges the option layers for one element and one definition.
pub struct OptionsResolver<'a> {
    ctx: &'a RuntimeContext,
}

impl<'a> OptionsResolver<'a> {
    /// Resolver reading settings from `ctx`.
    pub fn new(ctx: &'a RuntimeContext) -> Self {
        Self { ctx }
    }

    /// Produce the effective options.
    ///
    /// Layers in descending priority, first write wins: element attributes, per role and
    /// name settings, the definition's defaults, global defaults. The definition's
    /// `on_parse_options` hook then runs last and may overwrite anything.
    pub fn resolve(
        &self,
        doc: &Document,
        element: &EntranceElement,
        def: &AnimationDefinition,
    ) -> EmberResult<AnimationOptions> {
        let mut options = AnimationOptions::new();
        options.set(ANIMATION_NAME_KEY, element.anim.clone());

        for (key, value) in doc.dataset(element.node) {
            let Some(rest) = key.strip_prefix(OPTION_DATASET_PREFIX) else {
                continue;
            };
            if rest.is_empty() {
                continue;
            }
            options.set(lower_first(rest), OptionValue::Text(value));
        }

        let settings = &self.ctx.settings;
        if let Some(per) = def
            .role
            .as_deref()
            .and_then(|role| settings.per_animation(role, &def.name))
        {
            for (k, v) in per {
                options.set_if_absent(k, v);
            }
        }

        for (k, v) in &def.default_options {
            options.set_if_absent(k, v);
        }

        for (k, v) in &settings.animation_options {
            options.set_if_absent(k, v);
        }

        if let Some(hook) = &def.hooks.on_parse_options {
            hook(doc, element, &mut options)?;
        }

        Ok(options)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/options.rs"]
mod tests;
