//! Authentication primitives and hardening defaults.

pub mod headers;
pub mod token;
