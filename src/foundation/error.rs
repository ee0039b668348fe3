/// Convenience result type used across the crate.
pub type EmberResult<T> = Result<T, EmberError>;

/// Top-level error taxonomy used by runtime APIs.
#[derive(thiserror::Error, Debug)]
pub enum EmberError {
    /// Invalid user-provided configuration or page data.
    #[error("validation error: {0}")]
    Validation(String),

    /// An animation definition was rejected by the registry.
    #[error("registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// Errors raised while building phase state or running animation hooks.
    #[error("animation error: {0}")]
    Animation(String),

    /// Invalid node handles or tree operations.
    #[error("document error: {0}")]
    Document(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EmberError {
    /// Build a [`EmberError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`EmberError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`EmberError::Document`] value.
    pub fn document(msg: impl Into<String>) -> Self {
        Self::Document(msg.into())
    }

    /// Build a [`EmberError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

/// Problems reported while registering an animation definition.
///
/// Registration never aborts the caller: every problem is logged and returned so the
/// caller can inspect it, and registration of the remaining definitions proceeds.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// The role has no bucket in the registry.
    #[error("invalid animation role '{0}'")]
    UnknownRole(String),
    /// The definition has no usable name.
    #[error("the animation name must be a non-empty string")]
    MissingName,
    /// A definition with the same `(role, name)` is already registered.
    #[error("the animation '{name}' is already registered for role '{role}'")]
    Duplicate {
        /// Role bucket.
        role: String,
        /// Animation name.
        name: String,
    },
    /// The definition does not declare an `initial` phase state.
    #[error("the animation '{0}' is missing the initial state")]
    MissingInitial(String),
    /// The definition does not declare a `completed` phase state.
    #[error("the animation '{0}' is missing the completed state")]
    MissingCompleted(String),
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
