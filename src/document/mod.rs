pub(crate) mod node;
pub(crate) mod page;
pub(crate) mod selector;
pub(crate) mod viewport;
