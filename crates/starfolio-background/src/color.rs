//! Color utility functions for background animations.

use ratatui::style::Color;

/// Build an RGB colour from a triple.
pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
}

/// Blend `from` towards `to`; `t` of 0 is `from`, 1 is `to`.
///
/// Non-RGB colours cannot be mixed, so the nearer endpoint wins.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            Color::Rgb(lerp(r1, r2, t), lerp(g1, g2, t), lerp(b1, b2, t))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// Sample an evenly spaced multi-stop gradient at `t` (0..=1).
pub fn gradient(stops: &[Color], t: f32) -> Color {
    match stops {
        [] => Color::Reset,
        [only] => *only,
        _ => {
            let t = t.clamp(0.0, 1.0);
            let spans = (stops.len() - 1) as f32;
            let pos = t * spans;
            let idx = (pos.floor() as usize).min(stops.len() - 2);
            blend(stops[idx], stops[idx + 1], pos - idx as f32)
        }
    }
}

/// Convert HSL to RGB color.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return Color::Rgb(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
