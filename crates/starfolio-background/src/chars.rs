//! Character constants for background animations.

/// Star glyphs as (dim, bright) pairs from the smallest size class up.
pub const STAR_CHARS: &[char] = &['·', '•', '+', '*', '✧', '✦'];
