//! State guards using Validation to collect every unmet condition.

use crate::core::{Condition, Stateful};
use crate::guard::method::GuardedMethod;
use crate::guard::violations::{describe, InvalidStateError, ViolationStrategy};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, warn};

/// Ordered list of state conditions plus the strategy applied when they fail.
///
/// All conditions must hold for a guard to pass.
#[derive(Clone, Debug, PartialEq)]
pub struct StateGuard {
    pub(crate) conditions: Vec<Condition>,
    pub(crate) on_violation: ViolationStrategy,
}

impl StateGuard {
    pub fn new(conditions: Vec<Condition>, on_violation: ViolationStrategy) -> Self {
        Self {
            conditions,
            on_violation,
        }
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn violation_strategy(&self) -> ViolationStrategy {
        self.on_violation
    }

    pub fn is_strict(&self) -> bool {
        self.on_violation.is_strict()
    }

    /// Evaluate every condition, accumulating ALL unmet ones.
    /// Returns Validation::Success(()) if all conditions hold.
    pub fn validate<T>(&self, receiver: &T) -> Validation<(), NonEmptyVec<Condition>>
    where
        T: Stateful + ?Sized,
    {
        let flags = receiver.state_flags();
        let checks: Vec<Validation<(), NonEmptyVec<Condition>>> = self
            .conditions
            .iter()
            .map(|condition| {
                if condition.is_satisfied(flags) {
                    Validation::success(())
                } else {
                    Validation::fail(condition.clone())
                }
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Check whether every condition holds for `receiver` (pure).
    pub fn check<T>(&self, receiver: &T) -> bool
    where
        T: Stateful + ?Sized,
    {
        self.validate(receiver).is_success()
    }

    /// Apply the guard to `receiver`.
    ///
    /// Under [`ViolationStrategy::Abort`] unmet conditions produce an
    /// [`InvalidStateError`]. Under [`ViolationStrategy::IgnoreAndLog`] they are
    /// only logged and this returns `Ok(())`, so the guarded call still runs.
    pub fn enforce<T>(&self, receiver: &T) -> Result<(), InvalidStateError>
    where
        T: Stateful + ?Sized,
    {
        let unmet: Vec<Condition> = match self.validate(receiver) {
            Validation::Success(_) => return Ok(()),
            Validation::Failure(unmet) => unmet.iter().cloned().collect(),
        };

        match self.on_violation {
            ViolationStrategy::Abort => {
                debug!(unmet = %describe(&unmet), "guarded call rejected");
                Err(InvalidStateError::UnmetConditions { unmet })
            }
            ViolationStrategy::IgnoreAndLog => {
                warn!(unmet = %describe(&unmet), "state conditions unmet, running guarded call anyway");
                Ok(())
            }
        }
    }

    /// Run `f` on `receiver` if the guard allows it.
    pub fn run<T, R, F>(&self, receiver: &T, f: F) -> Result<R, InvalidStateError>
    where
        T: Stateful + ?Sized,
        F: FnOnce(&T) -> R,
    {
        self.enforce(receiver)?;
        Ok(f(receiver))
    }

    /// Run `f` on a mutable `receiver` if the guard allows it.
    pub fn run_mut<T, R, F>(&self, receiver: &mut T, f: F) -> Result<R, InvalidStateError>
    where
        T: Stateful + ?Sized,
        F: FnOnce(&mut T) -> R,
    {
        self.enforce(&*receiver)?;
        Ok(f(receiver))
    }

    /// Wrap `method` so every call is checked against this guard first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statekeeper::core::{require_absent, StateFlags};
    /// use statekeeper::guard::ensure_states;
    ///
    /// let describe = ensure_states(vec![require_absent("destroyed")], true)
    ///     .wrap(|_: &StateFlags, prefix: &str| format!("{prefix}: alive"));
    ///
    /// let mut flags = StateFlags::new();
    /// assert_eq!(describe.call(&flags, "node").unwrap(), "node: alive");
    ///
    /// flags.add_state("destroyed");
    /// assert!(describe.call(&flags, "node").is_err());
    /// ```
    pub fn wrap<F>(self, method: F) -> GuardedMethod<F> {
        GuardedMethod::new(self, method)
    }
}
