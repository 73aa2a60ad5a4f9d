//! Core state flag types.
//!
//! This module contains the holder of named states and the conditions
//! evaluated against it:
//! - `StateFlags` records which named states are held
//! - `Stateful` lets any owner expose its embedded holder
//! - `Condition` describes one requirement on a named state
//!
//! Everything here is plain in-memory data; guarding method calls on these
//! conditions lives in [`crate::guard`].

mod condition;
mod state;

pub use condition::{has, not, require_absent, require_present, Condition};
pub use state::{StateFlags, Stateful};
