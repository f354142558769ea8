//! Camera Controller: derives a new camera pose from held keys once per frame.
//!
//! # Invariants
//! - An empty key state leaves the pose unchanged.
//! - The look direction is recomputed from orientation every frame and is unit length.
//! - Opposite keys held together cancel within the same frame.

mod controller;

pub use controller::{step, CameraController};
