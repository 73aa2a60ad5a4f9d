//! Statekeeper: named state flags with guarded methods
//!
//! An object embeds a [`StateFlags`] holder recording named boolean states
//! such as `"readonly"` or `"destroyed"`. Guards check those states before a
//! method runs, which lets owners forbid calls after teardown or while
//! read-only without scattering checks through every method.
//!
//! # Core Concepts
//!
//! - **State flags**: a holder of named states, absent means not held
//! - **Conditions**: `not(state)` / `has(state)` requirements on a holder
//! - **Guards**: an ordered condition list that must hold in full, either
//!   strict (reject with an error) or non-strict (log and run anyway)
//!
//! # Example
//!
//! ```rust
//! use statekeeper::core::{require_absent, StateFlags};
//! use statekeeper::guard::ensure_states;
//!
//! let read = ensure_states(vec![require_absent("destroyed")], true)
//!     .wrap(|flags: &StateFlags, ()| flags.has_state("readonly"));
//!
//! let mut flags = StateFlags::new();
//! flags.add_state("readonly");
//! assert_eq!(read.call(&flags, ()), Ok(true));
//!
//! flags.add_state("destroyed");
//! assert!(read.call(&flags, ()).is_err());
//! ```

pub mod core;
pub mod guard;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use self::core::{Condition, StateFlags, Stateful};
pub use guard::{GuardedMethod, InvalidStateError, StateGuard};
