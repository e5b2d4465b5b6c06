//! The application: state, event handling and the frame loop.

use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Position, Rect},
    widgets::Widget,
};
use starfolio_background::BackgroundState;
use starfolio_config::Config;
use starfolio_core::{AnimationSpeed, ColorTheme, Link, PROFILE, Profile, Transition};

use crate::cursor::Cursor;
use crate::intro::IntroSequencer;
use crate::layout::{Motion, PageLayout};
use crate::links::Launcher;
use crate::page::{Hit, RenderContext, blit, help_line, place, render_item, render_scroll_hint};
use crate::reveal::RevealTracker;
use crate::scroll::{ROW_UNITS, ScrollState, WHEEL_STEP};

/// How long to wait for input before drawing the next frame.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// The scroll hint fades in after the hero text.
const HINT_ENTRANCE: Transition = Transition::new(1200, 3000, 30.0);

/// Chevron bob period on the scroll hint.
const HINT_BOB_MS: u64 = 2000;

/// Caret blink period.
const CARET_BLINK_MS: u128 = 1000;

/// Share of the viewport the scroll hint jumps down by.
const HINT_SCROLL_FRACTION: f32 = 0.8;

/// Clickables only respond once at least this visible.
const MIN_HIT_OPACITY: f32 = 0.5;

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    profile: &'static Profile,
    color_theme: ColorTheme,
    speed: AnimationSpeed,
    background: BackgroundState,
    intro: IntroSequencer,
    scroll: ScrollState,
    reveals: RevealTracker,
    cursor: Cursor,
    /// Clickable areas from the last frame, in screen coordinates.
    hits: Vec<(Rect, Hit)>,
    launcher: Box<dyn Launcher>,
    /// Last drawn viewport size.
    viewport: (u16, u16),
    /// Clock reading at the last tick.
    last_tick: Duration,
}

impl App {
    /// Construct a new instance of [`App`].
    ///
    /// `seed` makes the starfield reproducible.
    pub fn new(config: &Config, seed: Option<u64>, launcher: Box<dyn Launcher>) -> Self {
        let background = match seed {
            Some(seed) => BackgroundState::seeded(config.star_count, seed),
            None => BackgroundState::new(config.star_count),
        };
        let intro = IntroSequencer::new(
            PROFILE.title,
            Duration::from_millis(config.typewriter_speed_ms),
            config.scroll_hint_threshold,
        );

        Self {
            running: true,
            profile: &PROFILE,
            color_theme: config.color_theme,
            speed: config.animation_speed,
            background,
            intro,
            scroll: ScrollState::default(),
            reveals: RevealTracker::default(),
            cursor: Cursor::default(),
            hits: Vec::new(),
            launcher,
            viewport: (0, 0),
            last_tick: Duration::ZERO,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let start = Instant::now();
        self.intro.restart(Duration::ZERO);
        while self.running {
            let now = start.elapsed();
            self.tick(now);
            terminal.draw(|frame| self.render(frame, now))?;
            self.handle_crossterm_events(start.elapsed())?;
        }
        tracing::info!("shutting down");
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance timers and smooth scrolling to clock reading `now`.
    pub fn tick(&mut self, now: Duration) {
        let dt = now.saturating_sub(self.last_tick);
        self.last_tick = now;
        if self.scroll.tick(dt) {
            self.on_scrolled(now);
        }
        self.intro.tick(now);
    }

    /// Renders the user interface.
    pub fn render(&mut self, frame: &mut Frame, now: Duration) {
        let area = frame.area();
        if area.width == 0 || area.height == 0 {
            return;
        }
        if self.viewport != (area.width, area.height) {
            tracing::debug!(width = area.width, height = area.height, "viewport changed");
            self.viewport = (area.width, area.height);
        }

        let layout = PageLayout::compute(self.profile, area.width, area.height);
        if self.scroll.set_extent(layout.total_rows, area.height) {
            self.on_scrolled(now);
        }
        let scroll_row = self.scroll.row();
        let total = layout.total_rows.max(1) as f32;
        let page_top = scroll_row as f32 / total;
        let page_bottom = ((scroll_row + area.height) as f32 / total).min(1.0);
        let elapsed_ms = now.as_millis() as u64;

        let buf = frame.buffer_mut();
        self.background.render(
            area,
            buf,
            self.color_theme,
            elapsed_ms,
            self.speed,
            page_top,
            page_bottom,
        );

        let ctx = RenderContext {
            profile: self.profile,
            theme: self.color_theme,
            title: self.intro.title(),
            big_title: layout.big_title,
            caret_on: now.as_millis() % CARET_BLINK_MS < CARET_BLINK_MS / 2,
        };
        let since_intro = self.intro.since_start(now);
        self.hits.clear();

        for (index, item) in layout.items.iter().enumerate() {
            let in_view = item.intersects(scroll_row, area.height);
            let elapsed = match item.motion {
                Motion::Entrance(_) => Some(since_intro),
                Motion::InView(_) => {
                    self.reveals.observe(index, in_view, now);
                    self.reveals.elapsed(index, now)
                }
            };
            let Some(elapsed) = elapsed else {
                continue;
            };
            if !in_view {
                continue;
            }

            let transition = item.motion.transition();
            let opacity = transition.progress(elapsed);
            if opacity <= 0.0 {
                continue;
            }
            let lift = (transition.offset(elapsed) / ROW_UNITS).round() as i32;
            let x = area.x as i32 + item.x as i32;
            let y = area.y as i32 + item.top as i32 - scroll_row as i32 + lift;

            let (item_buf, hit) = render_item(item, &ctx);
            blit(&item_buf, buf, x, y, opacity);
            if let Some((rect, hit)) = hit {
                if opacity >= MIN_HIT_OPACITY {
                    if let Some(screen) = place(rect, x, y, area) {
                        self.hits.push((screen, hit));
                    }
                }
            }
        }

        let opacity = self.hint_opacity(now);
        if opacity > 0.0 {
            let since_shown = self.intro.since_hint_shown(now);
            let bob = (elapsed_ms % HINT_BOB_MS) as f32 / HINT_BOB_MS as f32;
            let hint = render_scroll_hint(self.color_theme, bob);
            let x = area.x as i32 + (area.width.saturating_sub(hint.area.width) / 2) as i32;
            // Rests two rows above the help line.
            let rest = area.bottom() as i32 - 2 - hint.area.height as i32;
            let y = rest + (HINT_ENTRANCE.offset(since_shown) / ROW_UNITS).round() as i32;
            blit(&hint, buf, x, y, opacity);
            if opacity >= MIN_HIT_OPACITY {
                if let Some(screen) = place(hint.area, x, y, area) {
                    self.hits.push((screen, Hit::ScrollHint));
                }
            }
        }

        let help_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        help_line(self.color_theme).render(help_area, buf);

        self.cursor.render(buf);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls briefly so animations keep running between events.
    fn handle_crossterm_events(&mut self, now: Duration) -> color_eyre::Result<()> {
        if event::poll(FRAME_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key, now),
                Event::Mouse(mouse) => self.on_mouse_event(mouse, now),
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "terminal resized");
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn on_key_event(&mut self, key: KeyEvent, now: Duration) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('r')) => self.replay(now),
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            (_, KeyCode::Down | KeyCode::Char('j')) => self.scroll_by(ROW_UNITS, now),
            (_, KeyCode::Up | KeyCode::Char('k')) => self.scroll_by(-ROW_UNITS, now),
            (_, KeyCode::PageDown) => self.scroll_by(self.page_step(), now),
            (_, KeyCode::PageUp) => self.scroll_by(-self.page_step(), now),
            (_, KeyCode::Home) => self.scroll_to(0.0, now),
            (_, KeyCode::End) => self.scroll_to(self.scroll.max_offset(), now),
            (_, KeyCode::Enter | KeyCode::Char(' ')) => {
                if self.hint_opacity(now) >= MIN_HIT_OPACITY {
                    self.activate(Hit::ScrollHint);
                }
            }
            (_, KeyCode::Char(ch)) => {
                if let Some(link) = self.profile.link_for_key(ch) {
                    self.open_link(link);
                }
            }
            _ => {}
        }
    }

    /// Handles pointer movement, clicks and the wheel.
    pub fn on_mouse_event(&mut self, mouse: MouseEvent, now: Duration) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.cursor.on_move(mouse.column, mouse.row);
            }
            MouseEventKind::Down(button) => {
                self.cursor.on_move(mouse.column, mouse.row);
                self.cursor.on_press();
                if button == MouseButton::Left {
                    if let Some(hit) = self.hit_at(mouse.column, mouse.row) {
                        self.activate(hit);
                    }
                }
            }
            MouseEventKind::Up(_) => self.cursor.on_release(),
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP, now),
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_STEP, now),
            _ => {}
        }
    }

    /// Opacity of the scroll hint at `now`, zero while it is hidden.
    fn hint_opacity(&self, now: Duration) -> f32 {
        if !self.intro.hint_visible() {
            return 0.0;
        }
        HINT_ENTRANCE.progress(self.intro.since_hint_shown(now))
    }

    fn hit_at(&self, column: u16, row: u16) -> Option<Hit> {
        let position = Position::new(column, row);
        self.hits
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, hit)| *hit)
    }

    fn activate(&mut self, hit: Hit) {
        match hit {
            Hit::Link(link) => self.open_link(link),
            Hit::ScrollHint => {
                let target = self.viewport.1 as f32 * ROW_UNITS * HINT_SCROLL_FRACTION;
                tracing::debug!(target, "scroll hint activated");
                self.scroll.smooth_scroll_to(target);
            }
        }
    }

    fn open_link(&self, link: &Link) {
        match self.launcher.open(link.url) {
            Ok(()) => tracing::info!(url = link.url, "opened {}", link.label),
            Err(e) => tracing::warn!("failed to open {}: {e}", link.url),
        }
    }

    fn page_step(&self) -> f32 {
        self.viewport.1.saturating_sub(2).max(1) as f32 * ROW_UNITS
    }

    fn scroll_by(&mut self, delta: f32, now: Duration) {
        if self.scroll.scroll_by(delta) {
            self.on_scrolled(now);
        }
    }

    fn scroll_to(&mut self, offset: f32, now: Duration) {
        if self.scroll.scroll_to(offset) {
            self.on_scrolled(now);
        }
    }

    fn on_scrolled(&mut self, now: Duration) {
        self.intro.on_scroll(self.scroll.offset(), now);
    }

    /// Replay the intro and every in-view reveal.
    fn replay(&mut self, now: Duration) {
        self.intro.restart(now);
        self.reveals.reset();
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.color_theme = self.color_theme.next();
        tracing::debug!(theme = self.color_theme.name(), "theme changed");
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
