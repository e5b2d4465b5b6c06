//! Backdrop layers.

pub mod nebula;
pub mod starfield;
