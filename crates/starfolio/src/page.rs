//! Drawing page items into off-screen buffers and compositing them.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Widget},
};
use starfolio_background::{blend, gradient};
use starfolio_core::{Card, ColorTheme, Link, Profile};
use starfolio_fonts::{art_width, build_title_art};

use crate::layout::{ItemKind, LayoutItem, card_inner_width, wrap};

const WHITE: Color = Color::Rgb(255, 255, 255);
const GRAY_200: Color = Color::Rgb(229, 231, 235);
const GRAY_300: Color = Color::Rgb(209, 213, 219);
const GRAY_400: Color = Color::Rgb(156, 163, 175);
const HANDLE: Color = Color::Rgb(216, 180, 254);
const BLACK: Color = Color::Rgb(0, 0, 0);

/// Share of a card's tint shown over the backdrop.
const GLASS: f32 = 0.5;

const CARET: &str = "▌";
const HINT_LABEL: &str = "Scroll to explore";

/// Something clickable on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Link(&'static Link),
    ScrollHint,
}

/// Per-frame values the item renderers need.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub profile: &'static Profile,
    pub theme: ColorTheme,
    /// Title text revealed by the typewriter so far.
    pub title: &'a str,
    pub big_title: bool,
    pub caret_on: bool,
}

/// Render `item` into a buffer of its own size, origin at (0, 0).
///
/// Returns the buffer and, for cards with a link, the button area
/// relative to the buffer.
pub fn render_item(item: &LayoutItem, ctx: &RenderContext) -> (Buffer, Option<(Rect, Hit)>) {
    let area = Rect::new(0, 0, item.width, item.height);
    let mut buf = Buffer::empty(area);
    let mut hit = None;

    match item.kind {
        ItemKind::HeroTitle => render_title(&mut buf, ctx),
        ItemKind::HeroSubtitle => {
            centered(&mut buf, 0, ctx.profile.subtitle, Style::new().fg(GRAY_300).bold())
        }
        ItemKind::HeroTagline => {
            centered(&mut buf, 0, ctx.profile.tagline, Style::new().fg(GRAY_400))
        }
        ItemKind::Heading(index) => {
            let section = &ctx.profile.sections[index];
            let stops = [section.heading_tones.0.color(), section.heading_tones.1.color()];
            let width = section.heading.chars().count() as u16;
            let x = area.width.saturating_sub(width) / 2;
            gradient_text(&mut buf, x, 0, section.heading, &stops, Modifier::BOLD);
        }
        ItemKind::Intro(index) => {
            if let Some(intro) = ctx.profile.sections[index].intro {
                for (row, line) in wrap(intro, area.width).iter().enumerate() {
                    centered(&mut buf, row as u16, line, Style::new().fg(GRAY_300));
                }
            }
        }
        ItemKind::Card { section, card } => {
            let profile: &'static Profile = ctx.profile;
            let section = &profile.sections[section];
            let centre = section.cards.len() > 1;
            hit = render_card(&mut buf, &section.cards[card], centre)
                .map(|(rect, link)| (rect, Hit::Link(link)));
        }
    }

    (buf, hit)
}

fn centered(buf: &mut Buffer, y: u16, text: &str, style: Style) {
    if y >= buf.area.height {
        return;
    }
    let width = text.chars().count() as u16;
    let x = buf.area.width.saturating_sub(width) / 2;
    buf.set_stringn(x, y, text, (buf.area.width - x) as usize, style);
}

/// Write `text` with its colour sweeping across `stops`.
fn gradient_text(buf: &mut Buffer, x: u16, y: u16, text: &str, stops: &[Color], modifier: Modifier) {
    let count = text.chars().count();
    for (i, ch) in text.chars().enumerate() {
        let col = x + i as u16;
        if col >= buf.area.width {
            break;
        }
        let t = i as f32 / (count.max(2) - 1) as f32;
        let style = Style::new().fg(gradient(stops, t)).add_modifier(modifier);
        buf.set_string(col, y, ch.to_string(), style);
    }
}

fn render_title(buf: &mut Buffer, ctx: &RenderContext) {
    let stops = ctx.theme.title_gradient();
    let caret_style = Style::new().fg(WHITE);

    if !ctx.big_title {
        let width = ctx.title.chars().count() as u16 + 2;
        let x = buf.area.width.saturating_sub(width) / 2;
        gradient_text(buf, x, 0, ctx.title, &stops, Modifier::BOLD);
        if ctx.caret_on {
            let caret_x = x + width - 1;
            if caret_x < buf.area.width {
                buf.set_string(caret_x, 0, CARET, caret_style);
            }
        }
        return;
    }

    // Colours are anchored to the full title so letters keep their hue as
    // the text grows.
    let full_width = art_width(ctx.profile.title).max(2);
    let art = build_title_art(ctx.title);
    let art_w = art_width(ctx.title);
    let total = art_w as u16 + 2;
    let x0 = buf.area.width.saturating_sub(total) / 2;

    for (row, line) in art.iter().enumerate() {
        let y = row as u16;
        if y >= buf.area.height {
            break;
        }
        for (col, ch) in line.chars().enumerate() {
            if ch == ' ' {
                continue;
            }
            let x = x0 + col as u16;
            if x >= buf.area.width {
                break;
            }
            let color = gradient(&stops, col as f32 / (full_width - 1) as f32);
            buf.set_string(x, y, ch.to_string(), Style::new().fg(color));
        }
        if ctx.caret_on {
            let caret_x = x0 + total - 1;
            if caret_x < buf.area.width {
                buf.set_string(caret_x, y, CARET, caret_style);
            }
        }
    }
}

/// Draw a card filling `buf`; returns the link button area, if any.
fn render_card(buf: &mut Buffer, card: &'static Card, centre: bool) -> Option<(Rect, &'static Link)> {
    let area = buf.area;
    let tone = card.tone.color();
    let tint = blend(BLACK, tone, 0.18);

    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(blend(BLACK, tone, 0.6)))
        .style(Style::new().bg(tint))
        .render(area, buf);

    let inner_width = card_inner_width(area.width);
    let left = 2;
    let bottom = area.height.saturating_sub(2);
    let mut y = 2;

    let put = |buf: &mut Buffer, y: u16, text: &str, style: Style| {
        if y >= bottom {
            return;
        }
        let width = text.chars().count() as u16;
        let x = if centre {
            left + inner_width.saturating_sub(width) / 2
        } else {
            left
        };
        buf.set_stringn(x, y, text, inner_width as usize, style);
    };

    put(buf, y, card.icon, Style::new().fg(tone).bold());
    y += 1;
    put(buf, y, card.title, Style::new().fg(WHITE).bold());
    y += 1;
    if let Some(handle) = card.handle {
        put(buf, y, handle, Style::new().fg(HANDLE).bold());
        y += 1;
    }
    let body_color = if centre { GRAY_300 } else { GRAY_200 };
    for line in wrap(card.body, inner_width) {
        put(buf, y, &line, Style::new().fg(body_color));
        y += 1;
    }

    let link = card.link.as_ref()?;
    y += 1;
    if y >= bottom {
        return None;
    }
    let label = format!(" ↗ {} ({}) ", link.label, link.key);
    let label_width = (label.chars().count() as u16).min(inner_width);
    let x = if centre {
        left + inner_width.saturating_sub(label_width) / 2
    } else {
        left
    };
    let button_bg = blend(BLACK, tone, 0.55);
    buf.set_stringn(
        x,
        y,
        &label,
        inner_width as usize,
        Style::new().fg(WHITE).bg(button_bg).bold(),
    );
    Some((Rect::new(x, y, label_width, 1), link))
}

/// Copy the non-blank cells of `src` onto `dst` with their top-left at
/// (`x`, `y`), fading them in against the destination backdrop.
///
/// Cells falling outside `dst` are clipped.
pub fn blit(src: &Buffer, dst: &mut Buffer, x: i32, y: i32, opacity: f32) {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 {
        return;
    }
    let bounds = dst.area;

    for sy in 0..src.area.height {
        let dy = y + sy as i32;
        if dy < bounds.top() as i32 || dy >= bounds.bottom() as i32 {
            continue;
        }
        for sx in 0..src.area.width {
            let dx = x + sx as i32;
            if dx < bounds.left() as i32 || dx >= bounds.right() as i32 {
                continue;
            }
            let cell = &src[(src.area.x + sx, src.area.y + sy)];
            if cell.symbol() == " " && cell.bg == Color::Reset {
                continue;
            }
            let Some(target) = dst.cell_mut((dx as u16, dy as u16)) else {
                continue;
            };
            let backdrop = target.bg;
            target.set_symbol(cell.symbol());
            target.set_fg(blend(backdrop, cell.fg, opacity));
            if cell.bg != Color::Reset {
                target.set_bg(blend(backdrop, cell.bg, opacity * GLASS));
            }
            target.modifier = cell.modifier;
        }
    }
}

/// Translate a rect from item space to screen space and clip it to `bounds`.
pub fn place(rect: Rect, x: i32, y: i32, bounds: Rect) -> Option<Rect> {
    let left = (x + rect.x as i32).max(bounds.left() as i32);
    let top = (y + rect.y as i32).max(bounds.top() as i32);
    let right = (x + rect.x as i32 + rect.width as i32).min(bounds.right() as i32);
    let bottom = (y + rect.y as i32 + rect.height as i32).min(bounds.bottom() as i32);
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

/// Build the scroll hint pill. `bob` (0..1) animates the chevron.
pub fn render_scroll_hint(theme: ColorTheme, bob: f32) -> Buffer {
    let chevron = if bob < 0.5 { "⌄" } else { "↓" };
    let label = format!(" {HINT_LABEL}  {chevron} ");
    let width = label.chars().count() as u16 + 2;
    let area = Rect::new(0, 0, width, 3);
    let mut buf = Buffer::empty(area);

    let [left, _, right] = theme.title_gradient();
    let tint = blend(blend(BLACK, left, 0.25), blend(BLACK, right, 0.25), 0.5);
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(blend(BLACK, theme.accent(), 0.6)))
        .style(Style::new().bg(tint))
        .render(area, &mut buf);
    buf.set_string(1, 1, &label, Style::new().fg(WHITE));
    buf
}

/// One-line key reference along the bottom row.
pub fn help_line(theme: ColorTheme) -> Line<'static> {
    let accent = theme.accent();
    let key = |k: &'static str| Span::styled(k, Style::new().fg(accent).bold());
    let label = |l: &'static str| Span::styled(l, Style::new().fg(GRAY_400));
    Line::from(vec![
        key("q"),
        label(" quit  "),
        key("↑↓"),
        label(" scroll  "),
        key("p"),
        label(" play  "),
        key("v"),
        label(" profile  "),
        key("r"),
        label(" replay  "),
        key("c"),
        label(" theme"),
    ])
    .centered()
}

#[cfg(test)]
mod tests {
    use starfolio_core::PROFILE;

    use super::*;
    use crate::layout::PageLayout;

    fn ctx(title: &str) -> RenderContext<'_> {
        RenderContext {
            profile: &PROFILE,
            theme: ColorTheme::Nebula,
            title,
            big_title: true,
            caret_on: true,
        }
    }

    fn text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn empty_title_draws_only_the_caret() {
        let layout = PageLayout::compute(&PROFILE, 80, 24);
        let item = layout.item(ItemKind::HeroTitle).unwrap();
        let (buf, hit) = render_item(item, &ctx(""));
        assert!(hit.is_none());
        let drawn = text(&buf);
        assert!(!drawn.contains('█'));
        assert_eq!(drawn.matches(CARET).count(), 5);
    }

    #[test]
    fn partial_title_draws_block_letters() {
        let layout = PageLayout::compute(&PROFILE, 80, 24);
        let item = layout.item(ItemKind::HeroTitle).unwrap();
        let (buf, _) = render_item(item, &ctx("JJ"));
        assert!(text(&buf).contains('█'));
    }

    #[test]
    fn narrow_title_is_plain_text() {
        let layout = PageLayout::compute(&PROFILE, 30, 24);
        let item = layout.item(ItemKind::HeroTitle).unwrap();
        let mut context = ctx("JJet");
        context.big_title = layout.big_title;
        let (buf, _) = render_item(item, &context);
        assert!(text(&buf).contains("JJet"));
    }

    #[test]
    fn link_card_reports_its_button() {
        let layout = PageLayout::compute(&PROFILE, 100, 30);
        let item = layout.item(ItemKind::Card { section: 1, card: 0 }).unwrap();
        let (buf, hit) = render_item(item, &ctx("JJettas"));
        let (rect, hit) = hit.expect("featured card has a link");
        assert_eq!(hit, Hit::Link(PROFILE.link_for_key('p').unwrap()));
        assert!(rect.y < item.height);
        let row: String = (rect.x..rect.right())
            .map(|x| buf[(x, rect.y)].symbol().to_string())
            .collect();
        assert!(row.contains("Play Game"));
    }

    #[test]
    fn plain_card_has_no_button() {
        let layout = PageLayout::compute(&PROFILE, 100, 30);
        let item = layout.item(ItemKind::Card { section: 0, card: 1 }).unwrap();
        let (buf, hit) = render_item(item, &ctx("JJettas"));
        assert!(hit.is_none());
        assert!(text(&buf).contains("Part-Time"));
    }

    #[test]
    fn blit_clips_and_skips_blank_cells() {
        let mut src = Buffer::empty(Rect::new(0, 0, 3, 2));
        src.set_string(0, 0, "a b", Style::new().fg(WHITE));
        let mut dst = Buffer::empty(Rect::new(0, 0, 4, 4));
        for cell in dst.content.iter_mut() {
            cell.set_symbol("*").set_bg(BLACK);
        }

        blit(&src, &mut dst, 2, -1, 1.0);
        // Row 0 of src lands above dst and is clipped; row 1 is blank.
        assert!(dst.content().iter().all(|c| c.symbol() == "*"));

        blit(&src, &mut dst, 2, 3, 1.0);
        assert_eq!(dst[(2, 3)].symbol(), "a");
        assert_eq!(dst[(3, 3)].symbol(), "*");
    }

    #[test]
    fn blit_fades_against_backdrop() {
        let mut src = Buffer::empty(Rect::new(0, 0, 1, 1));
        src.set_string(0, 0, "x", Style::new().fg(WHITE));
        let mut dst = Buffer::empty(Rect::new(0, 0, 1, 1));
        dst[(0, 0)].set_bg(BLACK);

        blit(&src, &mut dst, 0, 0, 0.0);
        assert_eq!(dst[(0, 0)].symbol(), " ");

        blit(&src, &mut dst, 0, 0, 0.5);
        assert_eq!(dst[(0, 0)].symbol(), "x");
        assert_eq!(dst[(0, 0)].fg, Color::Rgb(128, 128, 128));
    }

    #[test]
    fn place_clips_to_bounds() {
        let bounds = Rect::new(0, 0, 20, 10);
        let rect = Rect::new(2, 1, 8, 1);
        assert_eq!(place(rect, 5, 3, bounds), Some(Rect::new(7, 4, 8, 1)));
        assert_eq!(place(rect, 15, 3, bounds), Some(Rect::new(17, 4, 3, 1)));
        assert_eq!(place(rect, 0, -5, bounds), None);
        assert_eq!(place(rect, 0, 9, bounds), None);
    }

    #[test]
    fn scroll_hint_reads_its_label() {
        let buf = render_scroll_hint(ColorTheme::Nebula, 0.0);
        assert_eq!(buf.area.height, 3);
        assert!(text(&buf).contains(HINT_LABEL));
    }
}
