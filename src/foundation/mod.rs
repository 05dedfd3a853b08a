//! Shared building blocks: error taxonomy, geometry primitives and authoring defaults.

pub(crate) mod core;
pub mod defaults;
pub(crate) mod error;
