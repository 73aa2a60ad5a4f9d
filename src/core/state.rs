//! Named boolean state flags and the trait for types that carry them.
//!
//! A [`StateFlags`] holder records which named states an object currently
//! holds. An unknown name is never an error: it simply reads as "not held".

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Set of named boolean states held by an object.
///
/// Absence of a name is equivalent to the state not being held, so a fresh
/// holder answers `false` for every name.
///
/// # Example
///
/// ```rust
/// use statekeeper::core::StateFlags;
///
/// let mut flags = StateFlags::new();
/// flags.add_state("readonly");
/// assert!(flags.has_state("readonly"));
///
/// flags.remove_state("readonly");
/// assert!(!flags.has_state("readonly"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateFlags {
    states: HashMap<String, bool>,
}

impl StateFlags {
    /// Create an empty holder with no states recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `state` as held. Adding a state twice is the same as adding it once.
    pub fn add_state(&mut self, state: impl Into<String>) {
        self.states.insert(state.into(), true);
    }

    /// Check whether `state` is currently held (pure).
    pub fn has_state(&self, state: &str) -> bool {
        self.states.get(state).copied().unwrap_or(false)
    }

    /// Mark `state` as not held.
    ///
    /// The name stays recorded as absent rather than being deleted. Removing a
    /// state that was never added is a no-op as far as [`has_state`] is
    /// concerned.
    ///
    /// [`has_state`]: StateFlags::has_state
    pub fn remove_state(&mut self, state: impl Into<String>) {
        self.states.insert(state.into(), false);
    }

    /// Discard every recorded state. The holder stays usable afterwards.
    pub fn reset(&mut self) {
        debug!(recorded = self.states.len(), "resetting state flags");
        self.states = HashMap::new();
    }

    /// Teardown hook for owners; clears all states like [`reset`].
    ///
    /// [`reset`]: StateFlags::reset
    pub fn destroy(&mut self) {
        self.reset();
    }

    /// Iterate over the names of the states currently held, in no particular order.
    pub fn active_states(&self) -> impl Iterator<Item = &str> + '_ {
        self.states
            .iter()
            .filter(|(_, held)| **held)
            .map(|(name, _)| name.as_str())
    }

    /// Check whether no state is currently held.
    pub fn is_empty(&self) -> bool {
        self.active_states().next().is_none()
    }
}

/// Types that are, or embed, a [`StateFlags`] holder.
///
/// Implementing the two accessors gives the owner the full flag API and makes
/// its methods guardable with [`StateGuard`](crate::guard::StateGuard).
///
/// # Example
///
/// ```rust
/// use statekeeper::core::{StateFlags, Stateful};
///
/// struct Connection {
///     flags: StateFlags,
/// }
///
/// impl Stateful for Connection {
///     fn state_flags(&self) -> &StateFlags {
///         &self.flags
///     }
///
///     fn state_flags_mut(&mut self) -> &mut StateFlags {
///         &mut self.flags
///     }
/// }
///
/// let mut conn = Connection { flags: StateFlags::new() };
/// conn.add_state("open");
/// assert!(conn.has_state("open"));
/// ```
pub trait Stateful {
    /// Borrow the embedded holder.
    fn state_flags(&self) -> &StateFlags;

    /// Mutably borrow the embedded holder.
    fn state_flags_mut(&mut self) -> &mut StateFlags;

    /// Mark `state` as held on the embedded holder.
    fn add_state(&mut self, state: impl Into<String>)
    where
        Self: Sized,
    {
        self.state_flags_mut().add_state(state);
    }

    /// Check whether the embedded holder holds `state`.
    fn has_state(&self, state: &str) -> bool {
        self.state_flags().has_state(state)
    }

    /// Mark `state` as not held on the embedded holder.
    fn remove_state(&mut self, state: impl Into<String>)
    where
        Self: Sized,
    {
        self.state_flags_mut().remove_state(state);
    }

    /// Discard every state recorded on the embedded holder.
    fn reset_states(&mut self) {
        self.state_flags_mut().reset();
    }
}

impl Stateful for StateFlags {
    fn state_flags(&self) -> &StateFlags {
        self
    }

    fn state_flags_mut(&mut self) -> &mut StateFlags {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_events;

    #[test]
    fn fresh_holder_has_no_states() {
        let flags = StateFlags::new();

        assert!(!flags.has_state("readonly"));
        assert!(!flags.has_state("destroyed"));
        assert!(!flags.has_state(""));
        assert!(flags.is_empty());
    }

    #[test]
    fn add_has_remove() {
        let mut flags = StateFlags::new();
        flags.add_state("readonly");
        assert!(flags.has_state("readonly"));

        flags.remove_state("readonly");
        assert!(!flags.has_state("readonly"));

        flags.destroy();
    }

    #[test]
    fn add_twice_is_idempotent() {
        let mut flags = StateFlags::new();
        flags.add_state("readonly");
        flags.add_state("readonly");

        assert!(flags.has_state("readonly"));
        assert_eq!(flags.active_states().count(), 1);
    }

    #[test]
    fn remove_unknown_state_is_noop() {
        let mut flags = StateFlags::new();
        flags.remove_state("never-added");

        assert!(!flags.has_state("never-added"));
        assert!(flags.is_empty());
    }

    #[test]
    fn removed_state_is_recorded_as_absent() {
        let mut flags = StateFlags::new();
        flags.add_state("readonly");
        flags.remove_state("readonly");

        // recorded as false, so it differs from a holder that never saw the name
        assert_ne!(flags, StateFlags::new());
        assert!(flags.is_empty());
    }

    #[test]
    fn reset_clears_everything_and_stays_usable() {
        let mut flags = StateFlags::new();
        flags.add_state("readonly");
        flags.add_state("destroyed");

        flags.reset();
        assert!(!flags.has_state("readonly"));
        assert!(!flags.has_state("destroyed"));
        assert_eq!(flags, StateFlags::new());

        flags.reset();
        flags.add_state("readonly");
        assert!(flags.has_state("readonly"));
    }

    #[test]
    fn active_states_lists_only_held_names() {
        let mut flags = StateFlags::new();
        flags.add_state("a");
        flags.add_state("b");
        flags.remove_state("b");
        flags.remove_state("c");

        let active: Vec<&str> = flags.active_states().collect();
        assert_eq!(active, vec!["a"]);
    }

    #[test]
    fn stateful_trait_delegates_to_holder() {
        struct Widget {
            flags: StateFlags,
        }

        impl Stateful for Widget {
            fn state_flags(&self) -> &StateFlags {
                &self.flags
            }

            fn state_flags_mut(&mut self) -> &mut StateFlags {
                &mut self.flags
            }
        }

        let mut widget = Widget {
            flags: StateFlags::new(),
        };
        widget.add_state("hidden");
        assert!(widget.has_state("hidden"));
        assert!(widget.flags.has_state("hidden"));

        widget.remove_state("hidden");
        assert!(!widget.has_state("hidden"));

        widget.add_state("hidden");
        widget.reset_states();
        assert!(widget.flags.is_empty());
    }

    #[test]
    fn stateful_is_usable_as_trait_object() {
        let mut flags = StateFlags::new();
        flags.add_state("open");

        let holder: &mut dyn Stateful = &mut flags;
        assert!(holder.has_state("open"));
        holder.state_flags_mut().add_state("dirty");
        holder.reset_states();
        assert!(!holder.has_state("open"));
        assert!(flags.is_empty());
    }

    #[test]
    fn flags_serialize_correctly() {
        let mut flags = StateFlags::new();
        flags.add_state("readonly");
        flags.remove_state("destroyed");

        let json = serde_json::to_string(&flags).unwrap();
        let deserialized: StateFlags = serde_json::from_str(&json).unwrap();
        assert_eq!(flags, deserialized);
        assert!(deserialized.has_state("readonly"));
    }

    #[test]
    fn reset_logs_recorded_count() {
        let mut flags = StateFlags::new();
        flags.add_state("readonly");
        flags.remove_state("destroyed");

        let (_, events) = capture_events(|| flags.reset());

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, tracing::Level::DEBUG);
        assert_eq!(events[0].field("recorded"), Some("2"));
    }
}
