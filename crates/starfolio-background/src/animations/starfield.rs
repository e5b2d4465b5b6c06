//! Procedural starfield (stateful: one batch per viewport size).

use rand::Rng;
use ratatui::style::Color;
use starfolio_core::{
    AnimationSpeed, MAX_ANIMATION_DELAY, MAX_OPACITY, MAX_POSITION, MAX_SIZE, MIN_OPACITY,
    MIN_SIZE, StarDescriptor,
};

use crate::chars::STAR_CHARS;
use crate::color::blend;

/// Star light at full brightness.
const STAR_LIGHT: Color = Color::Rgb(226, 232, 255);

/// Generate a fresh batch of `count` stars.
///
/// Every field is an independent uniform draw from `rng`, so a seeded
/// generator always yields the same batch.
pub fn generate_stars<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<StarDescriptor> {
    (0..count)
        .map(|i| StarDescriptor {
            id: i as u32,
            x: rng.gen_range(0.0..MAX_POSITION),
            y: rng.gen_range(0.0..MAX_POSITION),
            size: rng.gen_range(MIN_SIZE..MAX_SIZE),
            opacity: rng.gen_range(MIN_OPACITY..MAX_OPACITY),
            animation_delay: rng.gen_range(0.0..MAX_ANIMATION_DELAY),
        })
        .collect()
}

/// Current brightness of a star (0..=1), pulsing once per twinkle period.
pub fn brightness(star: &StarDescriptor, elapsed_ms: u64, speed: AnimationSpeed) -> f32 {
    let period = speed.star_twinkle_period_ms() as f32 / 1000.0;
    let t = elapsed_ms as f32 / 1000.0 + star.animation_delay;
    let phase = (t / period).fract();
    let pulse = 0.5 + 0.5 * (phase * 2.0 * std::f32::consts::PI).cos();
    star.opacity * (0.35 + 0.65 * pulse)
}

/// Pick the glyph and colour for a star drawn over `backdrop`.
pub fn render_star(
    star: &StarDescriptor,
    elapsed_ms: u64,
    speed: AnimationSpeed,
    backdrop: Color,
) -> (char, Color) {
    let level = brightness(star, elapsed_ms, speed);

    // Size classes: [1, 1.67), [1.67, 2.33), [2.33, 3]
    let class = (((star.size - MIN_SIZE) / (MAX_SIZE - MIN_SIZE)) * 3.0).min(2.0) as usize;
    let bright = usize::from(level > 0.5);
    let ch = STAR_CHARS[class * 2 + bright];

    (ch, blend(backdrop, STAR_LIGHT, level))
}
