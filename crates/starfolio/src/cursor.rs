//! Custom pointer drawn over the page.

use ratatui::{buffer::Buffer, style::Color, style::Modifier};

const CURSOR: &str = "●";
/// Shown while a button is held, standing in for the 1.5x scale-up.
const CURSOR_PRESSED: &str = "◉";

/// Pointer position and press state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    position: Option<(u16, u16)>,
    pressed: bool,
}

impl Cursor {
    pub fn on_move(&mut self, column: u16, row: u16) {
        self.position = Some((column, row));
    }

    pub fn on_press(&mut self) {
        self.pressed = true;
    }

    pub fn on_release(&mut self) {
        self.pressed = false;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Draw the pointer; positions outside the buffer are skipped.
    pub fn render(&self, buf: &mut Buffer) {
        let Some((x, y)) = self.position else {
            return;
        };
        let Some(cell) = buf.cell_mut((x, y)) else {
            return;
        };
        // Inverted against the backdrop, like a difference blend.
        let under = cell.bg;
        cell.set_symbol(if self.pressed { CURSOR_PRESSED } else { CURSOR });
        cell.set_fg(invert(under));
        if self.pressed {
            cell.modifier.insert(Modifier::BOLD);
        }
    }
}

fn invert(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(255 - r, 255 - g, 255 - b),
        _ => Color::White,
    }
}
