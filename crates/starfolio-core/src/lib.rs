//! Core types for the starfolio terminal portfolio.
//!
//! Shared by the background, font, config and application crates: the
//! generated star descriptor, colour themes, animation timing and the
//! compiled-in page content.

mod content;
mod motion;
mod star;
mod theme;

pub use content::{Card, CardTone, Link, PROFILE, Profile, Section, SectionMotion};
pub use motion::{CubicBezier, Transition};
pub use star::{
    DEFAULT_STAR_COUNT, MAX_ANIMATION_DELAY, MAX_OPACITY, MAX_POSITION, MAX_SIZE, MIN_OPACITY,
    MIN_SIZE, StarDescriptor,
};
pub use theme::{AnimationSpeed, ColorTheme};
