//! Inter-task communication channels
//!
//! Defines the static signals used for communication between Embassy
//! tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Commanded actuator rate in steps per second, sign = direction
/// (updated by the control loop). Latest-wins: the stepper task only
/// ever needs the newest rate.
pub static SPEED_CMD: Signal<CriticalSectionRawMutex, i32> = Signal::new();
