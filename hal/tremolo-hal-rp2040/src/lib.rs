//! RP2040-specific HAL for the Tremolo feed actuator firmware
//!
//! This crate provides the board-side implementations of the
//! `tremolo-core` hardware contracts:
//!
//! - PIO-based step pulse generation for the feed actuator
//! - Operator button panel on pull-up-biased GPIOs

#![no_std]

pub mod buttons;
pub mod pio;
pub mod stepper;
