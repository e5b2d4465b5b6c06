//! Nebula backdrop (stateless, computed from position and time).

use ratatui::style::Color;
use starfolio_core::{AnimationSpeed, ColorTheme};

use crate::color::{blend, gradient, hsl_to_rgb, rgb};

/// A soft glow drifting around its anchor point.
struct Glow {
    /// Anchor in normalised viewport coordinates.
    anchor: (f32, f32),
    /// Radius as a fraction of the viewport width.
    radius: f32,
    hue: f32,
    /// Phase offset so the glows do not move in lockstep.
    phase: f32,
}

const GLOWS: [Glow; 3] = [
    Glow {
        anchor: (0.2, 0.3),
        radius: 0.35,
        hue: 275.0,
        phase: 0.0,
    },
    Glow {
        anchor: (0.75, 0.2),
        radius: 0.3,
        hue: 220.0,
        phase: 0.33,
    },
    Glow {
        anchor: (0.6, 0.75),
        radius: 0.4,
        hue: 320.0,
        phase: 0.66,
    },
];

/// Strongest share of a glow's colour mixed into the backdrop.
const GLOW_STRENGTH: f32 = 0.35;

/// Base page colour at `page_y` (0 = top of the page, 1 = bottom).
pub fn backdrop_color(theme: ColorTheme, page_y: f32) -> Color {
    let stops = theme.backdrop().map(rgb);
    gradient(&stops, page_y)
}

/// Backdrop colour of the viewport cell at (`x`, `y`).
///
/// `page_y` positions the cell on the page gradient; the glows stay fixed
/// to the viewport while the gradient scrolls with the page.
#[allow(clippy::too_many_arguments)]
pub fn render_backdrop_color(
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    page_y: f32,
    theme: ColorTheme,
    elapsed_ms: u64,
    speed: AnimationSpeed,
) -> Color {
    let base = backdrop_color(theme, page_y);

    let x_norm = x as f32 / width.max(1) as f32;
    // Terminal cells are about twice as tall as they are wide.
    let aspect = height as f32 * 2.0 / width.max(1) as f32;
    let y_norm = y as f32 / height.max(1) as f32;

    let period = speed.nebula_drift_period_ms();
    let time_phase = (elapsed_ms % period) as f32 / period as f32;

    GLOWS.iter().fold(base, |color, glow| {
        let angle = (time_phase + glow.phase) * 2.0 * std::f32::consts::PI;
        let cx = glow.anchor.0 + angle.sin() * 0.08;
        let cy = glow.anchor.1 + angle.cos() * 0.06;

        let dx = x_norm - cx;
        let dy = (y_norm - cy) * aspect;
        let dist = (dx * dx + dy * dy).sqrt() / glow.radius;
        let intensity = (-dist * dist).exp() * GLOW_STRENGTH;

        if intensity < 0.01 {
            color
        } else {
            blend(color, hsl_to_rgb(glow.hue, 0.7, 0.3), intensity)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_runs_from_top_stop_to_black() {
        let theme = ColorTheme::Nebula;
        let [top, _, bottom] = theme.backdrop();
        assert_eq!(backdrop_color(theme, 0.0), rgb(top));
        assert_eq!(backdrop_color(theme, 1.0), rgb(bottom));
    }

    #[test]
    fn glows_brighten_their_anchor() {
        let theme = ColorTheme::Nebula;
        let plain = backdrop_color(theme, 0.5);
        let lit = render_backdrop_color(16, 6, 80, 24, 0.5, theme, 0, AnimationSpeed::Medium);
        assert_ne!(plain, lit);
    }

    #[test]
    fn backdrop_is_always_rgb() {
        for y in 0..24 {
            for x in (0..80).step_by(7) {
                let color =
                    render_backdrop_color(x, y, 80, 24, 0.3, ColorTheme::Ember, 1234, AnimationSpeed::Fast);
                assert!(matches!(color, Color::Rgb(..)));
            }
        }
    }
}
