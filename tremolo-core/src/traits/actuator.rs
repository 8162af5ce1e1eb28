//! Actuator drive trait
//!
//! Abstracts over step-pulse generation so the control logic never
//! touches pins directly (PIO generator on hardware, recording fakes in
//! tests).

/// Trait for the linear actuator drive.
///
/// The controller is a pure rate-command client: it commands a signed
/// rate and never inspects position or acceleration.
pub trait Actuator {
    /// Command continuous motion at `rate` steps per second until
    /// changed.
    ///
    /// Sign selects direction (positive = forward feed); zero commands
    /// a stop.
    fn set_speed(&mut self, rate: i32);

    /// Realize the commanded rate for one control-loop tick.
    ///
    /// Drivers whose pulse timing runs in hardware have no per-tick
    /// work, so the default does nothing. Tick-driven implementations
    /// (and test fakes integrating position) override it.
    fn step(&mut self) {}
}
