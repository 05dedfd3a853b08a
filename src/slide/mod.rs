//! The slide record as persisted by the content manager.

pub(crate) mod model;
