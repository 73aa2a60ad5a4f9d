//! Methods wrapped with a state guard.

use crate::core::Stateful;
use crate::guard::state_guard::StateGuard;
use crate::guard::violations::InvalidStateError;

/// A method paired with the guard that gates it.
///
/// The wrapped function takes the receiver and one argument value (use a
/// tuple for several arguments, `()` for none). Its return value is passed
/// back untouched, so a method returning `Result` yields a nested
/// `Result` whose inner error is the method's own.
pub struct GuardedMethod<F> {
    guard: StateGuard,
    method: F,
}

impl<F> GuardedMethod<F> {
    pub fn new(guard: StateGuard, method: F) -> Self {
        Self { guard, method }
    }

    pub fn guard(&self) -> &StateGuard {
        &self.guard
    }

    /// Call a `&self` style method.
    ///
    /// When the guard rejects the call the method is never invoked.
    pub fn call<T, A, R>(&self, receiver: &T, args: A) -> Result<R, InvalidStateError>
    where
        T: Stateful + ?Sized,
        F: Fn(&T, A) -> R,
    {
        self.guard.enforce(receiver)?;
        Ok((self.method)(receiver, args))
    }

    /// Call a `&mut self` style method.
    pub fn call_mut<T, A, R>(&self, receiver: &mut T, args: A) -> Result<R, InvalidStateError>
    where
        T: Stateful + ?Sized,
        F: Fn(&mut T, A) -> R,
    {
        self.guard.enforce(&*receiver)?;
        Ok((self.method)(receiver, args))
    }
}
