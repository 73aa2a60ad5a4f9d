//! Guards that gate method execution on state flags.
//!
//! A [`StateGuard`] holds an ordered list of [`Condition`]s and a
//! [`ViolationStrategy`]. Every condition must hold for a guarded call to
//! proceed; when some do not, the guard collects ALL unmet conditions rather
//! than stopping at the first.
//!
//! # Strict and non-strict guards
//!
//! A strict guard rejects the call with an [`InvalidStateError`] and never
//! invokes the wrapped method. A non-strict guard only observes: it logs the
//! unmet conditions and then invokes the method anyway. Non-strict does NOT
//! mean "skip the call silently".
//!
//! # Example
//!
//! ```rust
//! use statekeeper::core::{not, StateFlags};
//! use statekeeper::guard::{ensure_states, GuardBuilder};
//!
//! let alive = ensure_states(vec![not("destroyed")], true);
//! let same = GuardBuilder::new().require_absent("destroyed").strict(true).build();
//! assert_eq!(alive, same);
//!
//! let mut flags = StateFlags::new();
//! assert!(alive.check(&flags));
//! flags.add_state("destroyed");
//! assert!(alive.enforce(&flags).is_err());
//! ```
//!
//! [`Condition`]: crate::core::Condition

pub mod builder;
mod macros;
pub mod method;
pub mod state_guard;
pub mod violations;

pub use builder::GuardBuilder;
pub use method::GuardedMethod;
pub use state_guard::StateGuard;
pub use violations::{InvalidStateError, ViolationStrategy};

use crate::core::Condition;

/// Create a guard from a list of conditions and a strict flag.
///
/// `strict == true` rejects calls whose conditions are unmet; `false` logs
/// and lets them run.
pub fn ensure_states(conditions: Vec<Condition>, strict: bool) -> StateGuard {
    StateGuard::new(conditions, strict.into())
}
