//! Phase state machine
//!
//! The feed cycle's operating phases, the machine that advances them,
//! and the change notifications it emits.

pub mod events;
pub mod machine;

pub use events::{ChangeCause, PhaseChange};
pub use machine::{Phase, PhaseMachine};
