//! Phase-change notifications
//!
//! Reported once per accepted transition so the caller can emit a
//! diagnostic line; control correctness never depends on them being
//! observed.

use super::machine::Phase;
use crate::traits::Button;

/// Why a phase transition happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChangeCause {
    /// Operator pressed a button.
    Button(Button),
    /// The phase's configured duration elapsed.
    Timeout,
}

/// An accepted phase transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseChange {
    /// The newly entered phase.
    pub phase: Phase,
    /// What triggered the transition.
    pub cause: ChangeCause,
}

impl PhaseChange {
    /// Check if this change was operator-initiated.
    pub fn is_manual(&self) -> bool {
        matches!(self.cause, ChangeCause::Button(_))
    }
}
