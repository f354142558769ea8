//! Shared types for the flycam workspace.
//!
//! # Invariants
//! - Euler angles are always applied yaw (world Y), then pitch (local X), then roll (local Z).
//! - A zero-rotation pose looks down `-Z` with `+Y` up.

mod config;
mod projection;
mod types;

pub use config::{ControlScheme, MotionConfig, StepMode};
pub use projection::Projection;
pub use types::CameraPose;
