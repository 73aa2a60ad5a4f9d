//! Macro for guarding method bodies inline.

/// Enforce state conditions on a receiver at the top of a method body.
///
/// Conditions are written as `not "state"` or `has "state"`. The macro
/// evaluates to `Result<(), InvalidStateError>`; in strict mode (`true`) unmet
/// conditions produce an error, otherwise they are only logged and the method
/// body keeps running.
///
/// # Example
///
/// ```
/// use statekeeper::core::{StateFlags, Stateful};
/// use statekeeper::ensure_states;
/// use statekeeper::guard::InvalidStateError;
///
/// struct Buffer {
///     flags: StateFlags,
///     data: Vec<u8>,
/// }
///
/// impl Stateful for Buffer {
///     fn state_flags(&self) -> &StateFlags {
///         &self.flags
///     }
///
///     fn state_flags_mut(&mut self) -> &mut StateFlags {
///         &mut self.flags
///     }
/// }
///
/// impl Buffer {
///     fn push(&mut self, byte: u8) -> Result<(), InvalidStateError> {
///         ensure_states!(self, [not "readonly", not "destroyed"], true)?;
///         self.data.push(byte);
///         Ok(())
///     }
/// }
///
/// let mut buf = Buffer { flags: StateFlags::new(), data: Vec::new() };
/// buf.push(1).unwrap();
/// buf.add_state("readonly");
/// assert!(buf.push(2).is_err());
/// assert_eq!(buf.data, vec![1]);
/// ```
#[macro_export]
macro_rules! ensure_states {
    ($receiver:expr, [$($kind:ident $state:expr),* $(,)?], $strict:expr) => {
        $crate::guard::ensure_states(
            ::std::vec![$($crate::core::$kind($state)),*],
            $strict,
        )
        .enforce(&*$receiver)
    };
}
