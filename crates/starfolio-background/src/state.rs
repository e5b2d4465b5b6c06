//! Background animation state management.

use rand::{SeedableRng, rngs::StdRng};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use starfolio_core::{AnimationSpeed, ColorTheme, StarDescriptor};

use crate::animations::{nebula, starfield};

/// Starfield plus backdrop state.
#[derive(Debug)]
pub struct BackgroundState {
    /// Current star batch.
    stars: Vec<StarDescriptor>,
    /// Stars per batch.
    star_count: usize,
    /// Source for every batch.
    rng: StdRng,
    /// Last known viewport width.
    last_width: u16,
    /// Last known viewport height.
    last_height: u16,
    /// Number of batches generated so far.
    generation: u64,
}

impl BackgroundState {
    /// Create a background seeded from the operating system.
    pub fn new(star_count: usize) -> Self {
        Self::with_rng(star_count, StdRng::from_entropy())
    }

    /// Create a background whose batches are reproducible from `seed`.
    pub fn seeded(star_count: usize, seed: u64) -> Self {
        Self::with_rng(star_count, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(star_count: usize, rng: StdRng) -> Self {
        Self {
            stars: Vec::new(),
            star_count,
            rng,
            last_width: 0,
            last_height: 0,
            generation: 0,
        }
    }

    pub fn stars(&self) -> &[StarDescriptor] {
        &self.stars
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the current batch with a freshly generated one.
    pub fn regenerate(&mut self) {
        self.stars = starfield::generate_stars(&mut self.rng, self.star_count);
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            stars = self.stars.len(),
            "regenerated starfield"
        );
    }

    /// Track the viewport size, regenerating on change or first use.
    ///
    /// Returns whether a new batch was generated.
    pub fn resize(&mut self, width: u16, height: u16) -> bool {
        let dimensions_changed = width != self.last_width || height != self.last_height;
        if !dimensions_changed && self.generation > 0 {
            return false;
        }
        self.last_width = width;
        self.last_height = height;
        self.regenerate();
        true
    }

    /// Render the backdrop and stars into `area`.
    ///
    /// `page_top` and `page_bottom` give the fraction of the page shown at
    /// the top and bottom rows of the viewport, which scrolls the backdrop
    /// gradient with the page.
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        theme: ColorTheme,
        elapsed_ms: u64,
        speed: AnimationSpeed,
        page_top: f32,
        page_bottom: f32,
    ) {
        let width = area.width;
        let height = area.height;
        if width == 0 || height == 0 {
            return;
        }

        self.resize(width, height);

        // Later stars win when two land on the same cell.
        let mut grid: Vec<Option<usize>> = vec![None; width as usize * height as usize];
        for (i, star) in self.stars.iter().enumerate() {
            if let Some((x, y)) = star.cell(width, height) {
                grid[y as usize * width as usize + x as usize] = Some(i);
            }
        }

        let lines: Vec<Line> = (0..height)
            .map(|y| {
                let row_frac = y as f32 / (height - 1).max(1) as f32;
                let page_y = page_top + (page_bottom - page_top) * row_frac;
                let spans: Vec<Span> = (0..width)
                    .map(|x| {
                        let bg = nebula::render_backdrop_color(
                            x, y, width, height, page_y, theme, elapsed_ms, speed,
                        );
                        match grid[y as usize * width as usize + x as usize] {
                            Some(i) => {
                                let (ch, fg) =
                                    starfield::render_star(&self.stars[i], elapsed_ms, speed, bg);
                                Span::styled(ch.to_string(), Style::new().fg(fg).bg(bg))
                            }
                            None => Span::styled(" ", Style::new().bg(bg)),
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}
