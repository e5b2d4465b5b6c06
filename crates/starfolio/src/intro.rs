//! Intro sequencing: the typewriter title and the scroll hint.

use std::time::Duration;

/// Reveals a fixed label one character per interval.
///
/// Step `i` (0-based) fires `(i + 1) * interval` after the run starts and
/// reveals the first `i` characters, so a label of `n` characters takes
/// `n + 1` steps and the first step shows the empty string.
#[derive(Debug, Clone)]
pub struct Typewriter {
    label: String,
    interval: Duration,
    /// Steps fired in the current run.
    steps: usize,
    /// Byte length of the revealed prefix.
    revealed_len: usize,
}

impl Typewriter {
    pub fn new(label: impl Into<String>, interval: Duration) -> Self {
        Self {
            label: label.into(),
            interval,
            steps: 0,
            revealed_len: 0,
        }
    }

    /// Start over from the empty string.
    pub fn restart(&mut self) {
        self.steps = 0;
        self.revealed_len = 0;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Text revealed so far.
    pub fn revealed(&self) -> &str {
        &self.label[..self.revealed_len]
    }

    /// Steps in a complete run.
    pub fn total_steps(&self) -> usize {
        self.label.chars().count() + 1
    }

    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    pub fn is_complete(&self) -> bool {
        self.steps >= self.total_steps()
    }

    /// Fire the next step, returning the revealed text, or `None` once complete.
    pub fn step(&mut self) -> Option<&str> {
        if self.is_complete() {
            return None;
        }
        let shown = self.steps;
        self.revealed_len = self
            .label
            .char_indices()
            .nth(shown)
            .map_or(self.label.len(), |(idx, _)| idx);
        self.steps += 1;
        Some(self.revealed())
    }

    /// Fire every step due `elapsed` after the run started.
    ///
    /// Returns whether any step fired.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let due = if self.interval.is_zero() {
            self.total_steps()
        } else {
            let ticks = elapsed.as_nanos() / self.interval.as_nanos();
            ticks.min(self.total_steps() as u128) as usize
        };

        let mut fired = false;
        while self.steps < due {
            self.step();
            fired = true;
        }
        fired
    }
}

/// Visibility of the "scroll to explore" control.
#[derive(Debug, Clone)]
pub struct ScrollHint {
    /// Offset in distance units past which the hint hides.
    threshold: f32,
    visible: bool,
}

impl ScrollHint {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            visible: true,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Update from the current scroll offset; returns whether visibility changed.
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        let visible = offset <= self.threshold;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }
}

/// Drives the typewriter and scroll hint from the application clock.
#[derive(Debug, Clone)]
pub struct IntroSequencer {
    typewriter: Typewriter,
    hint: ScrollHint,
    /// Clock reading when the current run began.
    started_at: Duration,
    /// Clock reading when the hint last appeared.
    hint_shown_at: Duration,
}

impl IntroSequencer {
    pub fn new(label: impl Into<String>, interval: Duration, hint_threshold: f32) -> Self {
        Self {
            typewriter: Typewriter::new(label, interval),
            hint: ScrollHint::new(hint_threshold),
            started_at: Duration::ZERO,
            hint_shown_at: Duration::ZERO,
        }
    }

    /// Begin a new run at clock reading `now`.
    pub fn restart(&mut self, now: Duration) {
        self.typewriter.restart();
        self.started_at = now;
        self.hint_shown_at = now;
        tracing::debug!(label = self.typewriter.label(), "intro restarted");
    }

    /// Advance timers to `now`; returns whether the title changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let fired = self.typewriter.advance(self.since_start(now));
        if fired && self.typewriter.is_complete() {
            tracing::debug!(steps = self.typewriter.steps_taken(), "title reveal complete");
        }
        fired
    }

    /// Update the hint from the scroll offset at `now`; returns whether it toggled.
    ///
    /// A hint that reappears plays its entrance again from `now`.
    pub fn on_scroll(&mut self, offset: f32, now: Duration) -> bool {
        let changed = self.hint.on_scroll(offset);
        if changed && self.hint.is_visible() {
            self.hint_shown_at = now;
        }
        if changed {
            tracing::trace!(offset, visible = self.hint.is_visible(), "scroll hint toggled");
        }
        changed
    }

    /// Time since the current run began.
    pub fn since_start(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at)
    }

    /// Time since the hint last appeared.
    pub fn since_hint_shown(&self, now: Duration) -> Duration {
        now.saturating_sub(self.hint_shown_at)
    }

    pub fn title(&self) -> &str {
        self.typewriter.revealed()
    }

    pub fn hint_visible(&self) -> bool {
        self.hint.is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEED: Duration = Duration::from_millis(80);

    #[test]
    fn steps_reveal_prefixes() {
        let mut tw = Typewriter::new("JJettas", SPEED);
        assert_eq!(tw.revealed(), "");
        let mut seen = Vec::new();
        while let Some(text) = tw.step() {
            seen.push(text.to_string());
        }
        assert_eq!(
            seen,
            vec!["", "J", "JJ", "JJe", "JJet", "JJett", "JJetta", "JJettas"]
        );
        assert!(tw.is_complete());
        assert_eq!(tw.total_steps(), 8);
    }

    #[test]
    fn complete_run_holds_full_label() {
        let mut tw = Typewriter::new("JJettas", SPEED);
        tw.advance(Duration::from_secs(1));
        assert_eq!(tw.revealed(), "JJettas");
        assert!(!tw.advance(Duration::from_secs(3600)));
        assert_eq!(tw.step(), None);
        assert_eq!(tw.revealed(), "JJettas");
    }

    #[test]
    fn advance_fires_only_due_steps() {
        let mut tw = Typewriter::new("JJettas", SPEED);
        assert!(!tw.advance(Duration::from_millis(79)));
        assert_eq!(tw.steps_taken(), 0);

        assert!(tw.advance(Duration::from_millis(80)));
        assert_eq!(tw.steps_taken(), 1);
        assert_eq!(tw.revealed(), "");

        tw.advance(Duration::from_millis(245));
        assert_eq!(tw.steps_taken(), 3);
        assert_eq!(tw.revealed(), "JJ");
    }

    #[test]
    fn mounted_sequence_matches_timeline() {
        let mut intro = IntroSequencer::new("JJettas", SPEED, 100.0);
        intro.restart(Duration::ZERO);
        let mut seen = Vec::new();
        for step in 1..=8u64 {
            assert!(intro.tick(SPEED * step as u32));
            seen.push(intro.title().to_string());
        }
        assert_eq!(
            seen,
            vec!["", "J", "JJ", "JJe", "JJet", "JJett", "JJetta", "JJettas"]
        );
        assert!(!intro.tick(SPEED * 100));
        assert_eq!(intro.title(), "JJettas");
    }

    #[test]
    fn restart_begins_from_empty() {
        let mut intro = IntroSequencer::new("JJettas", SPEED, 100.0);
        intro.tick(Duration::from_secs(2));
        assert_eq!(intro.title(), "JJettas");

        intro.restart(Duration::from_secs(5));
        assert_eq!(intro.title(), "");
        intro.tick(Duration::from_secs(5) + SPEED * 3);
        assert_eq!(intro.title(), "JJ");
    }

    #[test]
    fn multibyte_labels_step_by_character() {
        let mut tw = Typewriter::new("añb•", SPEED);
        let seen: Vec<String> = std::iter::from_fn(|| tw.step().map(str::to_string)).collect();
        assert_eq!(seen, vec!["", "a", "añ", "añb", "añb•"]);
    }

    #[test]
    fn zero_interval_completes_immediately() {
        let mut tw = Typewriter::new("abc", Duration::ZERO);
        tw.advance(Duration::ZERO);
        assert_eq!(tw.revealed(), "abc");
    }

    #[test]
    fn hint_visibility_follows_threshold() {
        let mut hint = ScrollHint::new(100.0);
        assert!(hint.is_visible());
        assert!(!hint.on_scroll(0.0));
        assert!(!hint.on_scroll(100.0));
        assert!(hint.is_visible());
        assert!(hint.on_scroll(100.5));
        assert!(!hint.is_visible());
        assert!(!hint.on_scroll(4000.0));
        assert!(hint.on_scroll(20.0));
        assert!(hint.is_visible());
    }

    #[test]
    fn reappearing_hint_restarts_its_clock() {
        let mut intro = IntroSequencer::new("JJettas", SPEED, 100.0);
        intro.restart(Duration::from_secs(1));
        assert_eq!(intro.since_hint_shown(Duration::from_secs(4)), Duration::from_secs(3));

        assert!(intro.on_scroll(120.0, Duration::from_secs(10)));
        assert!(!intro.hint_visible());
        assert!(intro.on_scroll(0.0, Duration::from_secs(12)));
        assert!(intro.hint_visible());
        assert_eq!(intro.since_hint_shown(Duration::from_secs(12)), Duration::ZERO);

        // Scrolling within the threshold keeps the running entrance.
        assert!(!intro.on_scroll(40.0, Duration::from_secs(13)));
        assert_eq!(intro.since_hint_shown(Duration::from_secs(13)), Duration::from_secs(1));
    }
}
