//! Keyboard input: tracked keys and the pressed/released snapshot read once per frame.
//!
//! # Invariants
//! - Only tracked keys are stored; unknown identifiers are ignored.
//! - The snapshot is an explicit value passed to the controller, never a global.

pub mod key;
pub mod state;

pub use key::{Key, UnknownKey};
pub use state::KeyState;
