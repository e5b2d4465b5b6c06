//! Generated star descriptor.

/// Number of stars in a default batch.
pub const DEFAULT_STAR_COUNT: usize = 150;

/// Upper bound of a star position, as a percentage of the viewport.
pub const MAX_POSITION: f32 = 100.0;
/// Smallest star size.
pub const MIN_SIZE: f32 = 1.0;
/// Largest star size.
pub const MAX_SIZE: f32 = 3.0;
/// Dimmest star opacity.
pub const MIN_OPACITY: f32 = 0.2;
/// Brightest star opacity.
pub const MAX_OPACITY: f32 = 1.0;
/// Twinkle offset upper bound in seconds (exclusive).
pub const MAX_ANIMATION_DELAY: f32 = 4.0;

/// Visual parameters of a single point of light.
///
/// Descriptors only live for one generation batch; the whole batch is
/// replaced when the viewport changes size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarDescriptor {
    /// Unique within its batch.
    pub id: u32,
    /// Horizontal position, 0..=100 percent of the viewport width.
    pub x: f32,
    /// Vertical position, 0..=100 percent of the viewport height.
    pub y: f32,
    /// Size, 1..=3.
    pub size: f32,
    /// Opacity, 0.2..=1.0.
    pub opacity: f32,
    /// Twinkle phase offset in seconds, 0..4.
    pub animation_delay: f32,
}

impl StarDescriptor {
    /// Map the star onto a grid of `width` x `height` cells.
    ///
    /// Returns `None` for an empty grid.
    pub fn cell(&self, width: u16, height: u16) -> Option<(u16, u16)> {
        if width == 0 || height == 0 {
            return None;
        }
        let col = (self.x / MAX_POSITION * width as f32) as u16;
        let row = (self.y / MAX_POSITION * height as f32) as u16;
        Some((col.min(width - 1), row.min(height - 1)))
    }

    /// Whether every field lies within its declared range.
    pub fn is_in_range(&self) -> bool {
        (0.0..=MAX_POSITION).contains(&self.x)
            && (0.0..=MAX_POSITION).contains(&self.y)
            && (MIN_SIZE..=MAX_SIZE).contains(&self.size)
            && (MIN_OPACITY..=MAX_OPACITY).contains(&self.opacity)
            && (0.0..MAX_ANIMATION_DELAY).contains(&self.animation_delay)
    }
}
