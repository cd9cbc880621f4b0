//! Frame ticker and one-shot timer
//!
//! The browser owns the actual clocks (`requestAnimationFrame`,
//! `setTimeout`). These types hold the game's side of the bargain: whether
//! a frame loop should be alive, and which deferred transition is pending.
//! The host mirrors them, keeping at most one live handle of each kind.

/// Whether the frame loop is scheduled
///
/// Starting an already running ticker does nothing, so two loops can never
/// be alive at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameTicker {
    running: bool,
}

impl FrameTicker {
    /// Returns true if the loop was stopped and is now started
    pub fn start(&mut self) -> bool {
        let started = !self.running;
        self.running = true;
        started
    }

    /// Returns true if the loop was running
    pub fn stop(&mut self) -> bool {
        let was_running = self.running;
        self.running = false;
        was_running
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Identifies one arming of a `OneShotTimer`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// A timer that is armed, waiting to fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    pub token: TimerToken,
    pub delay_ms: u32,
}

/// Cancelable single-slot timer
///
/// Re-arming replaces the pending timer. A fire carrying a token that is no
/// longer pending (canceled or replaced) is rejected.
#[derive(Debug, Clone, Default)]
pub struct OneShotTimer {
    next_token: u64,
    pending: Option<PendingTimer>,
}

impl OneShotTimer {
    pub fn arm(&mut self, delay_ms: u32) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending = Some(PendingTimer { token, delay_ms });
        token
    }

    /// Returns true if something was pending
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn pending(&self) -> Option<PendingTimer> {
        self.pending
    }

    /// Consume the pending timer if `token` matches it
    pub fn fire(&mut self, token: TimerToken) -> bool {
        match self.pending {
            Some(p) if p.token == token => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_single_loop() {
        let mut ticker = FrameTicker::default();
        assert!(!ticker.is_running());
        assert!(ticker.start());
        assert!(!ticker.start());
        assert!(ticker.is_running());
        assert!(ticker.stop());
        assert!(!ticker.stop());
    }

    #[test]
    fn test_timer_fires_once() {
        let mut timer = OneShotTimer::default();
        let token = timer.arm(2000);
        assert_eq!(timer.pending().map(|p| p.delay_ms), Some(2000));
        assert!(timer.fire(token));
        assert!(!timer.fire(token));
        assert!(timer.pending().is_none());
    }

    #[test]
    fn test_canceled_token_is_stale() {
        let mut timer = OneShotTimer::default();
        let token = timer.arm(2000);
        assert!(timer.cancel());
        assert!(!timer.fire(token));
    }

    #[test]
    fn test_rearm_replaces_token() {
        let mut timer = OneShotTimer::default();
        let first = timer.arm(2000);
        let second = timer.arm(2000);
        assert_ne!(first, second);
        assert!(!timer.fire(first));
        assert!(timer.fire(second));
    }
}
