//! Operator input handling

pub mod arbiter;

pub use arbiter::ButtonArbiter;
