//! Runtime: the per-frame loop that feeds held keys to the camera controller.
//!
//! # Invariants
//! - Key events only touch the key state; the controller reads it once per tick.
//! - The loop does not depend on any windowing or rendering library.
//! - The drawing buffer is resized only when its pixel size actually changes.

mod config;
mod game_loop;
mod timer;
mod viewport;

pub use config::{ConfigError, SessionConfig, StartPose};
pub use game_loop::{Frame, GameLoop};
pub use timer::FrameTimer;
pub use viewport::Viewport;
