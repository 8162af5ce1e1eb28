//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod control;
pub mod stepper;

pub use control::control_task;
pub use stepper::stepper_task;
