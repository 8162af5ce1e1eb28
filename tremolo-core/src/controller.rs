//! Cycle controller
//!
//! Ties the button arbiter and the phase machine together into the
//! one-poll, one-tick, one-step loop iteration the firmware drives.
//! `now` is an explicit parameter so a test harness can run the loop at
//! arbitrary simulated timestamps.

use crate::clock::Instant;
use crate::config::ControllerConfig;
use crate::input::ButtonArbiter;
use crate::state::{ChangeCause, Phase, PhaseChange, PhaseMachine};
use crate::traits::{Actuator, InputPort};

/// Top-level feed cycle controller.
///
/// Single instance for the life of the machine; all mutable state lives
/// here and is only ever touched by the loop that owns the controller.
#[derive(Debug)]
pub struct CycleController {
    machine: PhaseMachine,
    arbiter: ButtonArbiter,
}

impl CycleController {
    /// Create a controller starting in `Movement` at `now`.
    pub fn new(config: ControllerConfig, now: Instant) -> Self {
        Self {
            arbiter: ButtonArbiter::new(config.debounce_window, now),
            machine: PhaseMachine::new(config, now),
        }
    }

    /// The currently active phase.
    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    /// One control-loop iteration at `now`.
    ///
    /// An accepted button press overrides the phase for this tick and
    /// suppresses the automatic timeout evaluation, so a zero-duration
    /// phase entered manually still lasts one full tick. Every
    /// iteration ends by stepping the actuator once.
    pub fn service<P, A>(
        &mut self,
        now: Instant,
        port: &P,
        actuator: &mut A,
    ) -> Option<PhaseChange>
    where
        P: InputPort,
        A: Actuator,
    {
        let change = if let Some(button) = self.arbiter.poll(port, now) {
            let target = button.requested_phase();
            self.machine.transition_to(target, now, actuator);
            Some(PhaseChange {
                phase: target,
                cause: ChangeCause::Button(button),
            })
        } else {
            self.machine.tick(now, actuator).map(|phase| PhaseChange {
                phase,
                cause: ChangeCause::Timeout,
            })
        };

        actuator.step();
        change
    }
}
