use flycam_common::{CameraPose, Projection};
use flycam_runtime::Frame;
use glam::Vec3;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Unit look direction.
    pub forward: Vec3,
    pub up: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
    pub aspect: f32,
}

impl RenderView {
    pub fn new(pose: &CameraPose, projection: &Projection) -> Self {
        Self {
            eye: pose.position,
            forward: pose.forward(),
            up: pose.up(),
            fov_degrees: projection.fov_degrees,
            aspect: projection.aspect,
        }
    }
}

impl From<&Frame> for RenderView {
    fn from(frame: &Frame) -> Self {
        Self::new(&frame.pose, &frame.projection)
    }
}

impl Default for RenderView {
    fn default() -> Self {
        Self::new(&CameraPose::default(), &Projection::default())
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads a frame and produces output. It never writes back to
/// the camera; the controller owns the pose.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, frame: &Frame) -> Self::Output;
}

/// Produces a human-readable description of each frame.
///
/// Useful for CLI output, logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &Frame) -> String {
        let view = RenderView::from(frame);
        let pose = &frame.pose;
        format!(
            "[frame {:>4}] eye=({:.3}, {:.3}, {:.3}) yaw={:.3} pitch={:.3} roll={:.3} \
             look=({:.3}, {:.3}, {:.3}) fov={:.0} aspect={:.3}",
            frame.index,
            view.eye.x,
            view.eye.y,
            view.eye.z,
            pose.yaw,
            pose.pitch,
            pose.roll,
            view.forward.x,
            view.forward.y,
            view.forward.z,
            view.fov_degrees,
            view.aspect
        )
    }
}
