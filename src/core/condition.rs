//! State conditions evaluated by guards.

use super::state::StateFlags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single requirement on a named state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// The named state must not be held.
    Absent(String),

    /// The named state must be held.
    Present(String),
}

impl Condition {
    /// Name of the state this condition inspects.
    pub fn state(&self) -> &str {
        match self {
            Self::Absent(state) | Self::Present(state) => state,
        }
    }

    /// Evaluate the condition against a holder (pure).
    pub fn is_satisfied(&self, flags: &StateFlags) -> bool {
        match self {
            Self::Absent(state) => !flags.has_state(state),
            Self::Present(state) => flags.has_state(state),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent(state) => write!(f, "not {state:?}"),
            Self::Present(state) => write!(f, "has {state:?}"),
        }
    }
}

/// Require that `state` is not held.
///
/// ```rust
/// use statekeeper::core::{require_absent, StateFlags};
///
/// let not_destroyed = require_absent("destroyed");
/// assert!(not_destroyed.is_satisfied(&StateFlags::new()));
/// ```
pub fn require_absent(state: impl Into<String>) -> Condition {
    Condition::Absent(state.into())
}

/// Require that `state` is held.
pub fn require_present(state: impl Into<String>) -> Condition {
    Condition::Present(state.into())
}

/// Short form of [`require_absent`], reads well inside condition lists.
pub fn not(state: impl Into<String>) -> Condition {
    require_absent(state)
}

/// Short form of [`require_present`].
pub fn has(state: impl Into<String>) -> Condition {
    require_present(state)
}
