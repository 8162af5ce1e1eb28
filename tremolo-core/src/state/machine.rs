//! Phase state machine definition
//!
//! All actuator behavior is a function of the current phase and the
//! time spent in it. Per-tick behavior and the exit check are colocated
//! per phase because both key off the same entry timestamp.

use crate::clock::Instant;
use crate::config::ControllerConfig;
use crate::traits::Actuator;

/// Machine phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Continuous forward feed
    Movement,
    /// Alternating high-speed agitation
    Vibration,
    /// Full stop
    Pause,
}

/// Phase state machine
///
/// Holds the current phase and its entry timestamps, advances on the
/// configured timeouts, and commands the actuator rate appropriate to
/// the phase. Exactly one phase is active at any time; there is no
/// observable in-transition state.
#[derive(Debug)]
pub struct PhaseMachine {
    config: ControllerConfig,
    phase: Phase,
    /// When the current phase began.
    phase_entered: Instant,
    /// Last time the vibration direction flipped.
    direction_changed: Instant,
    /// Current vibration sign (true = forward).
    vibration_forward: bool,
}

impl PhaseMachine {
    /// Create a machine starting in `Movement` at `now`.
    pub fn new(config: ControllerConfig, now: Instant) -> Self {
        Self {
            config,
            phase: Phase::Movement,
            phase_entered: now,
            direction_changed: now,
            vibration_forward: true,
        }
    }

    /// The currently active phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The machine's configuration.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Unconditionally enter `phase` at `now`.
    ///
    /// The phase timer and the vibration flip timer reset together;
    /// they are never set independently. Entering `Pause` commands an
    /// immediate stop; other phases take effect on the following tick.
    pub fn transition_to<A: Actuator>(&mut self, phase: Phase, now: Instant, actuator: &mut A) {
        self.phase = phase;
        self.phase_entered = now;
        self.direction_changed = now;

        if phase == Phase::Pause {
            actuator.set_speed(0);
        }
    }

    /// One control-loop evaluation at `now`.
    ///
    /// Commands the current phase's rate and applies the automatic
    /// timeout transition when due. Returns the newly entered phase,
    /// if any. A zero-duration phase exits on the first tick that
    /// observes it.
    pub fn tick<A: Actuator>(&mut self, now: Instant, actuator: &mut A) -> Option<Phase> {
        match self.phase {
            Phase::Movement => {
                actuator.set_speed(self.config.normal_speed);

                if now.since(self.phase_entered) >= self.config.movement_duration {
                    self.transition_to(Phase::Vibration, now, actuator);
                    return Some(Phase::Vibration);
                }
            }

            Phase::Vibration => {
                // Direction flip and phase exit are independent checks;
                // the flip does not reset the phase timer.
                if now.since(self.direction_changed) >= self.config.direction_interval {
                    self.vibration_forward = !self.vibration_forward;
                    self.direction_changed = now;
                    let rate = if self.vibration_forward {
                        self.config.vibration_speed
                    } else {
                        -self.config.vibration_speed
                    };
                    actuator.set_speed(rate);
                }

                if now.since(self.phase_entered) >= self.config.vibration_duration {
                    self.transition_to(Phase::Movement, now, actuator);
                    return Some(Phase::Movement);
                }
            }

            Phase::Pause => {
                // Stop was already commanded on entry.
                if now.since(self.phase_entered) >= self.config.pause_duration {
                    self.transition_to(Phase::Movement, now, actuator);
                    return Some(Phase::Movement);
                }
            }
        }

        None
    }
}
