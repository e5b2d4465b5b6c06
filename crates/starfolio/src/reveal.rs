//! Replayable reveal of items as they scroll into view.

use std::time::Duration;

/// Tracks when an item last entered the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InViewReveal {
    entered_at: Option<Duration>,
}

impl InViewReveal {
    /// Record whether the item is in view at `now`; returns true on entry.
    ///
    /// Leaving the viewport forgets the entry so the reveal replays next time.
    pub fn observe(&mut self, in_view: bool, now: Duration) -> bool {
        match (in_view, self.entered_at) {
            (true, None) => {
                self.entered_at = Some(now);
                true
            }
            (false, Some(_)) => {
                self.entered_at = None;
                false
            }
            _ => false,
        }
    }

    /// Time since the item entered view, `None` while out of view.
    pub fn elapsed(&self, now: Duration) -> Option<Duration> {
        self.entered_at.map(|at| now.saturating_sub(at))
    }
}

/// One [`InViewReveal`] per layout item, indexed like the layout.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    reveals: Vec<InViewReveal>,
}

impl RevealTracker {
    pub fn observe(&mut self, index: usize, in_view: bool, now: Duration) -> bool {
        if index >= self.reveals.len() {
            self.reveals.resize(index + 1, InViewReveal::default());
        }
        self.reveals[index].observe(in_view, now)
    }

    pub fn elapsed(&self, index: usize, now: Duration) -> Option<Duration> {
        self.reveals.get(index).and_then(|r| r.elapsed(now))
    }

    /// Forget every entry so all reveals replay.
    pub fn reset(&mut self) {
        self.reveals.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn entry_starts_the_clock() {
        let mut reveal = InViewReveal::default();
        assert_eq!(reveal.elapsed(ms(10)), None);
        assert!(reveal.observe(true, ms(100)));
        assert!(!reveal.observe(true, ms(200)));
        assert_eq!(reveal.elapsed(ms(350)), Some(ms(250)));
    }

    #[test]
    fn leaving_view_rearms_the_reveal() {
        let mut reveal = InViewReveal::default();
        reveal.observe(true, ms(0));
        assert!(!reveal.observe(false, ms(500)));
        assert_eq!(reveal.elapsed(ms(0)), None);
        assert!(reveal.observe(true, ms(900)));
        assert_eq!(reveal.elapsed(ms(1000)), Some(ms(100)));
    }

    #[test]
    fn tracker_grows_on_demand_and_resets() {
        let mut tracker = RevealTracker::default();
        assert_eq!(tracker.elapsed(4, ms(0)), None);
        assert!(tracker.observe(4, true, ms(10)));
        assert_eq!(tracker.elapsed(4, ms(30)), Some(ms(20)));
        assert_eq!(tracker.elapsed(2, ms(30)), None);
        tracker.reset();
        assert_eq!(tracker.elapsed(4, ms(30)), None);
    }
}
