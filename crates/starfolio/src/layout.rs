//! Page layout: where every item sits on the scrollable page.

use starfolio_core::{Card, Profile, Section, Transition};
use starfolio_fonts::{GLYPH_HEIGHT, art_width};

/// Rows of padding above and below each section.
const SECTION_PADDING: u16 = 4;
/// Rows between a heading and what follows it.
const HEADING_GAP: u16 = 3;
/// Rows between a section intro and its cards.
const INTRO_GAP: u16 = 2;
/// Columns between cards sharing a row.
const CARD_GAP_X: u16 = 3;
/// Rows between stacked cards.
const CARD_GAP_Y: u16 = 1;
/// Narrowest card before a section falls back to one card per row.
const MIN_CARD_WIDTH: u16 = 22;
/// The hero fills the viewport but never shrinks below this.
const MIN_HERO_ROWS: u16 = 12;
/// Margin kept clear on each side of section content.
const SIDE_MARGIN: u16 = 2;

/// What an item draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    HeroTitle,
    HeroSubtitle,
    HeroTagline,
    Heading(usize),
    Intro(usize),
    Card { section: usize, card: usize },
}

/// When an item's entrance plays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Once, timed from the start of the intro sequence.
    Entrance(Transition),
    /// Each time the item scrolls into view.
    InView(Transition),
}

impl Motion {
    pub fn transition(&self) -> &Transition {
        match self {
            Motion::Entrance(t) | Motion::InView(t) => t,
        }
    }
}

/// A positioned page item. `top` is a page row, not a screen row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutItem {
    pub kind: ItemKind,
    pub x: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
    pub motion: Motion,
}

impl LayoutItem {
    /// Whether any row of the item lies within `rows` rows starting at `scroll_row`.
    pub fn intersects(&self, scroll_row: u16, rows: u16) -> bool {
        let top = self.top as u32;
        let bottom = top + self.height as u32;
        let view_top = scroll_row as u32;
        let view_bottom = view_top + rows as u32;
        top < view_bottom && bottom > view_top
    }
}

/// Items laid out for one viewport size.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub items: Vec<LayoutItem>,
    /// Page height in rows.
    pub total_rows: u16,
    /// Whether the title fits as block letters.
    pub big_title: bool,
}

impl PageLayout {
    pub fn compute(profile: &Profile, width: u16, height: u16) -> Self {
        let mut items = Vec::new();

        // Block letters, a space and the caret.
        let big_title = width as usize >= art_width(profile.title) + 2 + 2 * SIDE_MARGIN as usize;
        let title_rows = if big_title { GLYPH_HEIGHT as u16 } else { 1 };

        let hero_rows = height.max(MIN_HERO_ROWS);
        let block_rows = title_rows + 5;
        let hero_top = hero_rows.saturating_sub(block_rows) / 2;
        let subtitle_row = hero_top + title_rows + 2;

        let line = |kind: ItemKind, top: u16, height: u16, motion: Motion| LayoutItem {
            kind,
            x: 0,
            top,
            width,
            height,
            motion,
        };
        items.push(line(
            ItemKind::HeroTitle,
            hero_top,
            title_rows,
            Motion::Entrance(Transition::new(1500, 0, 60.0)),
        ));
        items.push(line(
            ItemKind::HeroSubtitle,
            subtitle_row,
            1,
            Motion::Entrance(Transition::new(1200, 2000, 40.0)),
        ));
        items.push(line(
            ItemKind::HeroTagline,
            subtitle_row + 2,
            1,
            Motion::Entrance(Transition::new(1200, 2500, 40.0)),
        ));

        let mut row = hero_rows;
        for (index, section) in profile.sections.iter().enumerate() {
            row += SECTION_PADDING;

            items.push(line(
                ItemKind::Heading(index),
                row,
                1,
                Motion::InView(Transition::new(1000, 0, 60.0)),
            ));
            row += 1 + HEADING_GAP;

            let content_width = width
                .saturating_sub(2 * SIDE_MARGIN)
                .min(section.max_width)
                .max(1);
            let left = width.saturating_sub(content_width) / 2;

            if let Some(intro) = section.intro {
                let rows = wrap(intro, content_width).len() as u16;
                items.push(LayoutItem {
                    kind: ItemKind::Intro(index),
                    x: left,
                    top: row,
                    width: content_width,
                    height: rows,
                    motion: Motion::InView(Transition::new(1000, 200, 40.0)),
                });
                row += rows + INTRO_GAP;
            }

            row = layout_cards(&mut items, index, section, left, content_width, row);
            row += SECTION_PADDING;
        }

        Self {
            items,
            total_rows: row,
            big_title,
        }
    }

    #[cfg(test)]
    pub fn item(&self, kind: ItemKind) -> Option<&LayoutItem> {
        self.items.iter().find(|item| item.kind == kind)
    }
}

/// Lay out a section's cards starting at `row`; returns the row below them.
fn layout_cards(
    items: &mut Vec<LayoutItem>,
    section_index: usize,
    section: &Section,
    left: u16,
    content_width: u16,
    mut row: u16,
) -> u16 {
    let count = section.cards.len() as u16;
    if count == 0 {
        return row;
    }

    let fits_in_row = count * MIN_CARD_WIDTH + (count - 1) * CARD_GAP_X <= content_width;
    let columns = if fits_in_row { count } else { 1 };
    let card_width = (content_width - (columns - 1) * CARD_GAP_X) / columns;

    let motion = section.motion;
    for (chunk_index, chunk) in section.cards.chunks(columns as usize).enumerate() {
        if chunk_index > 0 {
            row += CARD_GAP_Y;
        }
        let row_height = chunk
            .iter()
            .map(|card| card_height(card, card_width))
            .max()
            .unwrap_or(0);

        for (col, _) in chunk.iter().enumerate() {
            let card = chunk_index * columns as usize + col;
            let delay = motion.card_delay_ms + motion.card_stagger_ms * card as u64;
            items.push(LayoutItem {
                kind: ItemKind::Card {
                    section: section_index,
                    card,
                },
                x: left + col as u16 * (card_width + CARD_GAP_X),
                top: row,
                width: card_width,
                height: row_height,
                motion: Motion::InView(Transition::new(
                    motion.card_duration_ms,
                    delay,
                    motion.card_rise,
                )),
            });
        }
        row += row_height;
    }
    row
}

/// Text columns inside a card of `width`: border plus one column of padding a side.
pub fn card_inner_width(width: u16) -> u16 {
    width.saturating_sub(4).max(1)
}

/// Rows a card needs at `width`: borders, padding and content.
pub fn card_height(card: &Card, width: u16) -> u16 {
    let body = wrap(card.body, card_inner_width(width)).len() as u16;
    let handle = u16::from(card.handle.is_some());
    let link = if card.link.is_some() { 2 } else { 0 };
    // icon + title + handle + body + link, plus two border and two padding rows
    1 + 1 + handle + body + link + 4
}

/// Greedy word wrap to `width` columns. Words longer than a line are split.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        if word.is_empty() {
            continue;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use starfolio_core::PROFILE;

    use super::*;

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        assert_eq!(
            wrap("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_of_empty_text_is_one_empty_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn wrapped_lines_fit_width() {
        for width in [5u16, 12, 30] {
            for line in wrap(PROFILE.sections[1].cards[0].body, width) {
                assert!(line.chars().count() <= width as usize, "{line:?}");
            }
        }
    }

    #[test]
    fn hero_fills_the_viewport() {
        let layout = PageLayout::compute(&PROFILE, 100, 30);
        let title = layout.item(ItemKind::HeroTitle).unwrap();
        let tagline = layout.item(ItemKind::HeroTagline).unwrap();
        assert!(layout.big_title);
        assert_eq!(title.height, GLYPH_HEIGHT as u16);
        assert!(tagline.top < 30);
        let first_heading = layout.item(ItemKind::Heading(0)).unwrap();
        assert!(first_heading.top >= 30);
    }

    #[test]
    fn narrow_viewport_uses_plain_title_and_stacks_cards() {
        let layout = PageLayout::compute(&PROFILE, 40, 20);
        assert!(!layout.big_title);
        let cards: Vec<_> = layout
            .items
            .iter()
            .filter(|item| matches!(item.kind, ItemKind::Card { section: 0, .. }))
            .collect();
        assert_eq!(cards.len(), 3);
        assert!(cards.windows(2).all(|w| w[1].top > w[0].top));
        assert!(cards.iter().all(|c| c.x == cards[0].x));
    }

    #[test]
    fn wide_viewport_puts_cards_side_by_side() {
        let layout = PageLayout::compute(&PROFILE, 120, 30);
        let cards: Vec<_> = layout
            .items
            .iter()
            .filter(|item| matches!(item.kind, ItemKind::Card { section: 0, .. }))
            .collect();
        assert!(cards.iter().all(|c| c.top == cards[0].top));
        assert!(cards.windows(2).all(|w| w[1].x > w[0].x + w[0].width));
    }

    #[test]
    fn items_are_in_page_order_and_inside_the_page() {
        let layout = PageLayout::compute(&PROFILE, 90, 25);
        assert!(layout.items.windows(2).all(|w| w[1].top >= w[0].top));
        for item in &layout.items {
            assert!(item.top + item.height <= layout.total_rows);
            assert!(item.x + item.width <= 90);
        }
    }

    #[test]
    fn item_count_does_not_depend_on_size() {
        let a = PageLayout::compute(&PROFILE, 30, 10);
        let b = PageLayout::compute(&PROFILE, 200, 60);
        assert_eq!(a.items.len(), b.items.len());
        let kinds_a: Vec<_> = a.items.iter().map(|i| i.kind).collect();
        let kinds_b: Vec<_> = b.items.iter().map(|i| i.kind).collect();
        assert_eq!(kinds_a, kinds_b);
    }

    #[test]
    fn cards_stagger_their_entrances() {
        let layout = PageLayout::compute(&PROFILE, 120, 30);
        let delays: Vec<_> = (0..3)
            .map(|card| {
                let item = layout
                    .item(ItemKind::Card { section: 0, card })
                    .unwrap();
                item.motion.transition().delay.as_millis()
            })
            .collect();
        assert_eq!(delays, vec![100, 200, 300]);
    }

    #[test]
    fn intersects_checks_viewport_overlap() {
        let layout = PageLayout::compute(&PROFILE, 100, 30);
        let heading = *layout.item(ItemKind::Heading(0)).unwrap();
        assert!(!heading.intersects(0, heading.top));
        assert!(heading.intersects(0, heading.top + 1));
        assert!(heading.intersects(heading.top, 1));
        assert!(!heading.intersects(heading.top + 1, 10));
    }
}
