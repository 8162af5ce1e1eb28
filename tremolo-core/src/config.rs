//! Configuration type definitions
//!
//! All controller parameters are compile-time values baked into the
//! firmware image. There is no runtime-mutable configuration surface;
//! edit the constants and rebuild to retune the machine.

use crate::clock::Duration;

/// Cycle controller parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerConfig {
    /// Feed rate during `Movement`, in steps per second.
    pub normal_speed: i32,
    /// Agitation rate magnitude during `Vibration`, in steps per second.
    pub vibration_speed: i32,
    /// Interval between vibration direction flips.
    pub direction_interval: Duration,
    /// Time spent in `Movement` before advancing automatically.
    pub movement_duration: Duration,
    /// Time spent in `Vibration` before returning to `Movement`.
    pub vibration_duration: Duration,
    /// Time spent in `Pause` before returning to `Movement`.
    pub pause_duration: Duration,
    /// Minimum spacing between two accepted button presses, shared
    /// across all buttons.
    pub debounce_window: Duration,
}

impl ControllerConfig {
    /// Reference machine parameters.
    ///
    /// Vibration and pause are configured to zero, which makes each of
    /// those phases last exactly one control-loop tick.
    pub const fn new() -> Self {
        Self {
            normal_speed: 50,
            vibration_speed: 5_000,
            direction_interval: Duration::from_millis(100),
            movement_duration: Duration::from_millis(50_000),
            vibration_duration: Duration::ZERO,
            pause_duration: Duration::ZERO,
            debounce_window: Duration::from_millis(50),
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::new()
    }
}
