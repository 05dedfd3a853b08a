//! Time-parameterized animation: kinds, configuration, and the stateless calculator.

pub(crate) mod calc;
pub(crate) mod config;
pub(crate) mod effective;
pub(crate) mod kind;
pub(crate) mod state;
