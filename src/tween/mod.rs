pub(crate) mod engine;
pub(crate) mod interp;
pub(crate) mod tweener;
