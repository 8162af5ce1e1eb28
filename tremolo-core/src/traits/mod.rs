//! Hardware abstraction traits
//!
//! These traits define the interface between the control logic and
//! hardware-specific implementations.

pub mod actuator;
pub mod buttons;

pub use actuator::Actuator;
pub use buttons::{Button, InputPort};
