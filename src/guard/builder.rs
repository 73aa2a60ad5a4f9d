//! Builder API for creating state guards.

use crate::core::{require_absent, require_present, Condition};
use crate::guard::state_guard::StateGuard;
use crate::guard::violations::ViolationStrategy;

/// Builder for creating state guards. Guards built without calling
/// [`strict`](GuardBuilder::strict) or [`on_violation`](GuardBuilder::on_violation)
/// are strict.
pub struct GuardBuilder {
    conditions: Vec<Condition>,
    on_violation: ViolationStrategy,
}

impl GuardBuilder {
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
            on_violation: ViolationStrategy::Abort,
        }
    }

    /// Require that `state` is not held
    pub fn require_absent(self, state: impl Into<String>) -> Self {
        self.require(require_absent(state))
    }

    /// Require that `state` is held
    pub fn require_present(self, state: impl Into<String>) -> Self {
        self.require(require_present(state))
    }

    /// Add an already built condition
    pub fn require(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn strict(self, strict: bool) -> Self {
        self.on_violation(strict.into())
    }

    /// Set violation handling strategy
    pub fn on_violation(mut self, strategy: ViolationStrategy) -> Self {
        self.on_violation = strategy;
        self
    }

    /// Build the guard
    pub fn build(self) -> StateGuard {
        StateGuard::new(self.conditions, self.on_violation)
    }
}

impl Default for GuardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
