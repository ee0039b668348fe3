use crate::animation::value::{AnimationOptions, StyleKey, StyleState, StyleTemplate, StyleValue};

/// Resolve every placeholder of `template` against `options`.
///
/// A key placeholder whose option is absent or falsy drops the property. A value
/// placeholder drops the property only when its option is absent; `0` is a valid value.
/// The key is checked first, and a property survives only if both resolve.
pub fn substitute(template: &StyleTemplate, options: &AnimationOptions) -> StyleState {
    let mut out = StyleState::new();

    for (key, value) in &template.0 {
        let key = match key {
            StyleKey::Literal(k) => k.clone(),
            StyleKey::Placeholder(name) => match options.get(name) {
                Some(v) if v.is_truthy() => v.to_string(),
                _ => {
                    tracing::trace!(option = %name, "unresolved key placeholder, dropping property");
                    continue;
                }
            },
        };

        let value = match value {
            StyleValue::Literal(v) => v.clone(),
            StyleValue::Placeholder(name) => match options.get(name) {
                Some(v) => v.clone(),
                None => {
                    tracing::trace!(option = %name, property = %key, "unresolved value placeholder, dropping property");
                    continue;
                }
            },
        };

        out.insert(key, value);
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/animation/placeholder.rs"]
mod tests;
