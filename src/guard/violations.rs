//! Guard errors and violation handling strategies.

use crate::core::Condition;
use thiserror::Error;

/// Errors raised by a strict guard whose conditions do not hold.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidStateError {
    #[error("invalid state: unmet conditions [{}]", describe(.unmet))]
    UnmetConditions { unmet: Vec<Condition> },
}

impl InvalidStateError {
    /// Every condition that failed, in the order the guard declares them.
    pub fn unmet(&self) -> &[Condition] {
        match self {
            Self::UnmetConditions { unmet } => unmet,
        }
    }
}

pub(crate) fn describe(conditions: &[Condition]) -> String {
    conditions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Strategy for handling unmet guard conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationStrategy {
    /// Reject the call with an [`InvalidStateError`]
    Abort,

    /// Run the call anyway but log a warning
    IgnoreAndLog,
}

impl ViolationStrategy {
    /// Whether unmet conditions reject the call.
    pub fn is_strict(self) -> bool {
        matches!(self, Self::Abort)
    }
}

impl From<bool> for ViolationStrategy {
    /// `true` selects [`ViolationStrategy::Abort`].
    fn from(strict: bool) -> Self {
        if strict {
            Self::Abort
        } else {
            Self::IgnoreAndLog
        }
    }
}
