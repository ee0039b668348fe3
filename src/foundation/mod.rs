pub(crate) mod attr;
pub(crate) mod error;
