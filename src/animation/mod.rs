pub(crate) mod definition;
pub(crate) mod ease;
pub(crate) mod library;
pub(crate) mod options;
pub(crate) mod phase;
pub(crate) mod placeholder;
pub(crate) mod registry;
pub(crate) mod value;
