//! Fitting media into a display surface and mapping virtual to actual pixels.

pub(crate) mod cover;
pub(crate) mod resolution;
