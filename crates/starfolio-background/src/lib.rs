//! Background rendering for the starfolio page.
//!
//! This crate provides the procedural starfield (a batch of randomly placed
//! stars regenerated whenever the viewport changes size) drawn over a
//! drifting nebula backdrop, plus the colour helpers the page uses to fade
//! content in against that backdrop.

mod animations;
mod chars;
mod color;
mod state;

pub use animations::starfield::generate_stars;
pub use color::{blend, gradient, hsl_to_rgb, rgb};
pub use state::BackgroundState;
