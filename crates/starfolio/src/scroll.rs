//! Page scroll position.

use std::time::Duration;

/// Distance units per terminal row.
pub const ROW_UNITS: f32 = 20.0;

/// Distance scrolled by one mouse wheel notch.
pub const WHEEL_STEP: f32 = 3.0 * ROW_UNITS;

/// Time constant of smooth scrolling.
const SMOOTH_TAU: Duration = Duration::from_millis(120);

/// Scroll offset in distance units, with optional smooth travel to a target.
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    offset: f32,
    target: f32,
    max: f32,
}

impl ScrollState {
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(&self) -> f32 {
        self.max
    }

    /// First page row shown at the top of the viewport.
    pub fn row(&self) -> u16 {
        (self.offset / ROW_UNITS).floor() as u16
    }

    pub fn is_animating(&self) -> bool {
        self.offset != self.target
    }

    /// Update the scrollable extent; returns whether the offset had to move.
    pub fn set_extent(&mut self, page_rows: u16, viewport_rows: u16) -> bool {
        self.max = page_rows.saturating_sub(viewport_rows) as f32 * ROW_UNITS;
        self.target = self.target.clamp(0.0, self.max);
        let clamped = self.offset.clamp(0.0, self.max);
        let moved = clamped != self.offset;
        self.offset = clamped;
        moved
    }

    /// Jump to `offset`; returns whether the offset changed.
    pub fn scroll_to(&mut self, offset: f32) -> bool {
        let offset = offset.clamp(0.0, self.max);
        let moved = offset != self.offset;
        self.offset = offset;
        self.target = offset;
        moved
    }

    pub fn scroll_by(&mut self, delta: f32) -> bool {
        self.scroll_to(self.offset + delta)
    }

    /// Glide towards `offset` over the next few ticks.
    pub fn smooth_scroll_to(&mut self, offset: f32) {
        self.target = offset.clamp(0.0, self.max);
    }

    /// Advance smooth scrolling by `dt`; returns whether the offset changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.is_animating() {
            return false;
        }
        let remaining = self.target - self.offset;
        if remaining.abs() < 0.5 {
            self.offset = self.target;
            return true;
        }
        let k = 1.0 - (-dt.as_secs_f32() / SMOOTH_TAU.as_secs_f32()).exp();
        self.offset += remaining * k;
        k > 0.0
    }
}
