//! Block letter font for the starfolio title.
//!
//! Letters are case-insensitive; characters without a glyph render as a
//! blank gap the width of a space.

/// Rows per glyph.
pub const GLYPH_HEIGHT: usize = 5;

/// Columns between adjacent glyphs.
const LETTER_SPACING: usize = 1;

type Glyph = [&'static str; GLYPH_HEIGHT];

static SPACE: Glyph = ["   ", "   ", "   ", "   ", "   "];

/// Uppercase letters A-Z (5 lines tall, 3-5 chars wide)
static LETTERS: [Glyph; 26] = [
    // A
    [" ███ ", "█   █", "█████", "█   █", "█   █"],
    // B
    ["████ ", "█   █", "████ ", "█   █", "████ "],
    // C
    [" ████", "█    ", "█    ", "█    ", " ████"],
    // D
    ["████ ", "█   █", "█   █", "█   █", "████ "],
    // E
    ["█████", "█    ", "████ ", "█    ", "█████"],
    // F
    ["█████", "█    ", "████ ", "█    ", "█    "],
    // G
    [" ████", "█    ", "█  ██", "█   █", " ████"],
    // H
    ["█   █", "█   █", "█████", "█   █", "█   █"],
    // I
    ["███", " █ ", " █ ", " █ ", "███"],
    // J
    ["  ███", "   █ ", "   █ ", "█  █ ", " ██  "],
    // K
    ["█   █", "█  █ ", "███  ", "█  █ ", "█   █"],
    // L
    ["█    ", "█    ", "█    ", "█    ", "█████"],
    // M
    ["█   █", "██ ██", "█ █ █", "█   █", "█   █"],
    // N
    ["█   █", "██  █", "█ █ █", "█  ██", "█   █"],
    // O
    [" ███ ", "█   █", "█   █", "█   █", " ███ "],
    // P
    ["████ ", "█   █", "████ ", "█    ", "█    "],
    // Q
    [" ███ ", "█   █", "█ █ █", "█  █ ", " ██ █"],
    // R
    ["████ ", "█   █", "████ ", "█  █ ", "█   █"],
    // S
    [" ████", "█    ", " ███ ", "    █", "████ "],
    // T
    ["█████", "  █  ", "  █  ", "  █  ", "  █  "],
    // U
    ["█   █", "█   █", "█   █", "█   █", " ███ "],
    // V
    ["█   █", "█   █", "█   █", " █ █ ", "  █  "],
    // W
    ["█   █", "█   █", "█ █ █", "██ ██", "█   █"],
    // X
    ["█   █", " █ █ ", "  █  ", " █ █ ", "█   █"],
    // Y
    ["█   █", " █ █ ", "  █  ", "  █  ", "  █  "],
    // Z
    ["█████", "   █ ", "  █  ", " █   ", "█████"],
];

/// Digits 0-9 (5 lines tall, 5 chars wide)
static DIGITS: [Glyph; 10] = [
    // 0
    [" ███ ", "█  ██", "█ █ █", "██  █", " ███ "],
    // 1
    ["  █  ", " ██  ", "  █  ", "  █  ", " ███ "],
    // 2
    ["████ ", "    █", " ███ ", "█    ", "█████"],
    // 3
    ["████ ", "    █", " ███ ", "    █", "████ "],
    // 4
    ["█   █", "█   █", "█████", "    █", "    █"],
    // 5
    ["█████", "█    ", "████ ", "    █", "████ "],
    // 6
    [" ███ ", "█    ", "████ ", "█   █", " ███ "],
    // 7
    ["█████", "    █", "   █ ", "  █  ", "  █  "],
    // 8
    [" ███ ", "█   █", " ███ ", "█   █", " ███ "],
    // 9
    [" ███ ", "█   █", " ████", "    █", " ███ "],
];

/// Look up the glyph for a character.
pub fn glyph(ch: char) -> Option<&'static Glyph> {
    match ch.to_ascii_uppercase() {
        c @ 'A'..='Z' => Some(&LETTERS[(c as u8 - b'A') as usize]),
        c @ '0'..='9' => Some(&DIGITS[(c as u8 - b'0') as usize]),
        ' ' => Some(&SPACE),
        _ => None,
    }
}

/// Display width of `text` in columns once rendered as block letters.
pub fn art_width(text: &str) -> usize {
    let glyphs: usize = text
        .chars()
        .map(|ch| glyph(ch).unwrap_or(&SPACE)[0].chars().count())
        .sum();
    let gaps = text.chars().count().saturating_sub(1) * LETTER_SPACING;
    glyphs + gaps
}

/// Build block letter art for the given text.
///
/// # Returns
/// A vector of [`GLYPH_HEIGHT`] strings, one per line of the art. Every
/// line has the same character count; an empty input yields empty lines.
pub fn build_title_art(text: &str) -> Vec<String> {
    let mut lines = vec![String::new(); GLYPH_HEIGHT];

    for (i, ch) in text.chars().enumerate() {
        let glyph = glyph(ch).unwrap_or(&SPACE);
        for (row, line) in lines.iter_mut().enumerate() {
            if i > 0 {
                line.push_str(&" ".repeat(LETTER_SPACING));
            }
            line.push_str(glyph[row]);
        }
    }

    lines
}
