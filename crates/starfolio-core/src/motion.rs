//! Eased entrance transitions.

use std::time::Duration;

/// A CSS-style cubic bezier timing curve anchored at (0, 0) and (1, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    /// The soft ease-out curve used by every entrance on the page.
    pub const SOFT_OUT: Self = Self::new(0.25, 0.46, 0.45, 0.94);

    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f32, a2: f32, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a1 + 3.0 * inv * s * s * a2 + s * s * s
    }

    fn slope(a1: f32, a2: f32, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * a1 + 6.0 * inv * s * (a2 - a1) + 3.0 * s * s * (1.0 - a2)
    }

    /// Eased value for linear progress `t` (clamped to 0..=1).
    pub fn ease(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }

        // Newton-Raphson on x(s) = t, falling back to bisection on flat slopes.
        let mut s = t;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, s) - t;
            if err.abs() < 1e-5 {
                return Self::sample(self.y1, self.y2, s);
            }
            let d = Self::slope(self.x1, self.x2, s);
            if d.abs() < 1e-6 {
                break;
            }
            s = (s - err / d).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        s = t;
        for _ in 0..32 {
            let x = Self::sample(self.x1, self.x2, s);
            if (x - t).abs() < 1e-5 {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        Self::sample(self.y1, self.y2, s)
    }
}

/// An entrance: fade in while rising `rise` distance units into place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: CubicBezier,
    /// Starting vertical offset in distance units below the resting place.
    pub rise: f32,
}

impl Transition {
    pub const fn new(duration_ms: u64, delay_ms: u64, rise: f32) -> Self {
        Self {
            duration: Duration::from_millis(duration_ms),
            delay: Duration::from_millis(delay_ms),
            easing: CubicBezier::SOFT_OUT,
            rise,
        }
    }

    /// Eased progress in 0..=1, `elapsed` measured from the trigger.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let linear = active.as_secs_f32() / self.duration.as_secs_f32();
        self.easing.ease(linear)
    }

    /// Remaining vertical offset in distance units.
    pub fn offset(&self, elapsed: Duration) -> f32 {
        self.rise * (1.0 - self.progress(elapsed))
    }
}
