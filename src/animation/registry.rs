use std::{collections::BTreeMap, sync::Arc};

use crate::{animation::definition::AnimationDefinition, foundation::error::RegistrationError};

/// Animation definitions keyed by `(role, name)`.
///
/// Roles must be declared up front; registering into an unknown role is reported and ignored.
#[derive(Clone, Debug)]
pub struct AnimationRegistry {
    roles: BTreeMap<String, BTreeMap<String, Arc<AnimationDefinition>>>,
}

impl Default for AnimationRegistry {
    fn default() -> Self {
        Self::with_roles([crate::ENTRANCE_ROLE])
    }
}

impl AnimationRegistry {
    /// Registry with an empty bucket for each role.
    pub fn with_roles<'a>(roles: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            roles: roles
                .into_iter()
                .map(|r| (r.to_string(), BTreeMap::new()))
                .collect(),
        }
    }

    /// Declare an additional role bucket. Existing buckets are left untouched.
    pub fn add_role(&mut self, role: &str) {
        self.roles.entry(role.to_string()).or_default();
    }

    /// `true` when the role has a bucket.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains_key(role)
    }

    /// Register `def` under `role` and return every problem found.
    ///
    /// Problems are logged, never fatal. An unknown role, a missing name or a duplicate
    /// `(role, name)` leave the registry unchanged (the first definition is kept); a
    /// definition missing a phase state is still stored and fails later when processed.
    pub fn register(
        &mut self,
        role: &str,
        mut def: AnimationDefinition,
    ) -> Vec<RegistrationError> {
        let mut issues = Vec::new();

        if !self.has_role(role) {
            issues.push(RegistrationError::UnknownRole(role.to_string()));
        }
        if def.name.is_empty() {
            issues.push(RegistrationError::MissingName);
        }
        if self.lookup(role, &def.name).is_some() {
            issues.push(RegistrationError::Duplicate {
                role: role.to_string(),
                name: def.name.clone(),
            });
        }
        if def.initial.is_none() {
            issues.push(RegistrationError::MissingInitial(def.name.clone()));
        }
        if def.completed.is_none() {
            issues.push(RegistrationError::MissingCompleted(def.name.clone()));
        }

        for issue in &issues {
            tracing::error!(role, animation = %def.name, "{issue}");
        }

        let storable = !issues.iter().any(|i| {
            matches!(
                i,
                RegistrationError::UnknownRole(_)
                    | RegistrationError::MissingName
                    | RegistrationError::Duplicate { .. }
            )
        });
        if storable {
            if let Some(bucket) = self.roles.get_mut(role) {
                def.role = Some(role.to_string());
                bucket.insert(def.name.clone(), Arc::new(def));
            }
        }

        issues
    }

    /// Look up a definition. A miss is not an error: callers skip the element.
    pub fn lookup(&self, role: &str, name: &str) -> Option<Arc<AnimationDefinition>> {
        self.roles.get(role)?.get(name).cloned()
    }

    /// Names registered under `role`, sorted.
    pub fn names(&self, role: &str) -> Vec<&str> {
        self.roles
            .get(role)
            .map(|b| b.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/registry.rs"]
mod tests;
