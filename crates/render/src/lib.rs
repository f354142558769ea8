//! Rendering Adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers read the camera pose and never mutate it.
//! - Render state derives from the frame produced by the loop.
//!
//! A debug text renderer stands in for a GPU backend; it is used by the CLI and
//! by tests. Swap in another implementation without changing consumers.

mod renderer;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};
