//! Final placement of a slide's media and text layers for one instant.
//!
//! Both composers follow the same pattern: resolve the layer's effective animation
//! config, sample the calculator, and fold in geometry and resolution scale.

pub(crate) mod media;
pub(crate) mod text;
