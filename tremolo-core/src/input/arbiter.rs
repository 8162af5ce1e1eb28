//! Button priority arbiter
//!
//! Polls the three operator buttons in fixed priority order, applies a
//! shared debounce window, and yields at most one request per tick.

use crate::clock::{Duration, Instant};
use crate::traits::{Button, InputPort};

/// Priority-ordered, debounced button poller.
///
/// The debounce window is shared across all buttons: any accepted press
/// silences further requests for the whole window, so rapid toggling
/// between different buttons cannot chatter. The window timestamp moves
/// only when a request is actually granted, never on a rejected poll.
#[derive(Debug)]
pub struct ButtonArbiter {
    debounce_window: Duration,
    last_accepted: Instant,
}

impl ButtonArbiter {
    /// Create an arbiter at `now`.
    ///
    /// Presses within the first debounce window after start are
    /// ignored.
    pub fn new(debounce_window: Duration, now: Instant) -> Self {
        Self {
            debounce_window,
            last_accepted: now,
        }
    }

    /// Poll the port at `now`.
    ///
    /// Returns the highest-priority pressed button, or `None` when
    /// nothing is pressed or the debounce window is still open. Buttons
    /// are level-read: a button held past the window retriggers.
    pub fn poll<P: InputPort>(&mut self, port: &P, now: Instant) -> Option<Button> {
        if now.since(self.last_accepted) < self.debounce_window {
            return None;
        }

        for button in Button::PRIORITY {
            if port.is_pressed(button) {
                self.last_accepted = now;
                return Some(button);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakePort {
        stop: bool,
        vibrate: bool,
        advance: bool,
    }

    impl InputPort for FakePort {
        fn is_pressed(&self, button: Button) -> bool {
            match button {
                Button::Stop => self.stop,
                Button::Vibrate => self.vibrate,
                Button::Advance => self.advance,
            }
        }
    }

    fn arbiter() -> ButtonArbiter {
        ButtonArbiter::new(Duration::from_millis(50), Instant::from_millis(0))
    }

    fn at(ms: u32) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_nothing_pressed_yields_nothing() {
        let mut arbiter = arbiter();
        assert_eq!(arbiter.poll(&FakePort::default(), at(100)), None);
    }

    #[test]
    fn test_single_press_accepted_after_startup_window() {
        let mut arbiter = arbiter();
        let port = FakePort {
            advance: true,
            ..Default::default()
        };
        // Still inside the power-on settle window
        assert_eq!(arbiter.poll(&port, at(49)), None);
        assert_eq!(arbiter.poll(&port, at(50)), Some(Button::Advance));
    }

    #[test]
    fn test_stop_wins_simultaneous_presses() {
        let mut arbiter = arbiter();
        let port = FakePort {
            stop: true,
            advance: true,
            ..Default::default()
        };
        assert_eq!(arbiter.poll(&port, at(100)), Some(Button::Stop));
    }

    #[test]
    fn test_vibrate_beats_advance() {
        let mut arbiter = arbiter();
        let port = FakePort {
            vibrate: true,
            advance: true,
            ..Default::default()
        };
        assert_eq!(arbiter.poll(&port, at(100)), Some(Button::Vibrate));
    }

    #[test]
    fn test_second_press_within_window_ignored_regardless_of_priority() {
        let mut arbiter = arbiter();
        let advance = FakePort {
            advance: true,
            ..Default::default()
        };
        let stop = FakePort {
            stop: true,
            ..Default::default()
        };

        assert_eq!(arbiter.poll(&advance, at(100)), Some(Button::Advance));
        // Stop outranks Advance, but the shared window is still open
        assert_eq!(arbiter.poll(&stop, at(130)), None);
        assert_eq!(arbiter.poll(&stop, at(150)), Some(Button::Stop));
    }

    #[test]
    fn test_rejected_poll_does_not_extend_window() {
        let mut arbiter = arbiter();
        let port = FakePort {
            vibrate: true,
            ..Default::default()
        };

        assert_eq!(arbiter.poll(&port, at(100)), Some(Button::Vibrate));
        // Rejected at 130; the window still measures from 100, not 130
        assert_eq!(arbiter.poll(&port, at(130)), None);
        assert_eq!(arbiter.poll(&port, at(150)), Some(Button::Vibrate));
    }

    #[test]
    fn test_held_button_retriggers_every_window() {
        let mut arbiter = arbiter();
        let port = FakePort {
            advance: true,
            ..Default::default()
        };

        assert_eq!(arbiter.poll(&port, at(50)), Some(Button::Advance));
        assert_eq!(arbiter.poll(&port, at(100)), Some(Button::Advance));
        assert_eq!(arbiter.poll(&port, at(150)), Some(Button::Advance));
    }

    #[test]
    fn test_debounce_window_across_wraparound() {
        let mut arbiter = ButtonArbiter::new(
            Duration::from_millis(50),
            Instant::from_millis(u32::MAX - 9),
        );
        let port = FakePort {
            stop: true,
            ..Default::default()
        };

        // 30ms after the last acceptance, counter wrapped in between
        assert_eq!(arbiter.poll(&port, at(20)), None);
        // 50ms after: window elapsed
        assert_eq!(arbiter.poll(&port, at(40)), Some(Button::Stop));
    }
}
