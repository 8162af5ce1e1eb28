//! Operator button panel
//!
//! Three momentary push-buttons wired active-low against internal
//! pull-ups: pressed reads logic low.

use embassy_rp::gpio::Input;

use tremolo_core::traits::{Button, InputPort};

/// The three-button operator panel.
///
/// Inputs must be constructed with `Pull::Up`; this type only reads
/// levels and never reconfigures the pins.
pub struct ButtonPanel<'d> {
    stop: Input<'d>,
    vibrate: Input<'d>,
    advance: Input<'d>,
}

impl<'d> ButtonPanel<'d> {
    /// Create a panel from the three configured inputs.
    pub fn new(stop: Input<'d>, vibrate: Input<'d>, advance: Input<'d>) -> Self {
        Self {
            stop,
            vibrate,
            advance,
        }
    }
}

impl InputPort for ButtonPanel<'_> {
    fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::Stop => self.stop.is_low(),
            Button::Vibrate => self.vibrate.is_low(),
            Button::Advance => self.advance.is_low(),
        }
    }
}
