//! Scoped terminal input subscriptions.

use std::io;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

/// Mouse capture held for the lifetime of the guard.
///
/// Dropping the guard releases the capture, including on early return or
/// panic unwinding, so the shell is never left reporting mouse events.
#[derive(Debug)]
pub struct MouseCapture {
    active: bool,
}

impl MouseCapture {
    /// Enable mouse capture when `enabled`; a disabled guard does nothing.
    pub fn acquire(enabled: bool) -> io::Result<Self> {
        if enabled {
            execute!(io::stdout(), EnableMouseCapture)?;
            tracing::debug!("mouse capture enabled");
        }
        Ok(Self { active: enabled })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for MouseCapture {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = execute!(io::stdout(), DisableMouseCapture) {
                tracing::warn!("failed to release mouse capture: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_guard_is_inert() {
        let guard = MouseCapture::acquire(false).unwrap();
        assert!(!guard.is_active());
    }
}
