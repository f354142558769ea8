use std::time::Duration;

use flycam_camera::CameraController;
use flycam_common::{CameraPose, MotionConfig, Projection};
use flycam_input::KeyState;
use glam::{Mat4, Vec3};

use crate::config::SessionConfig;
use crate::timer::FrameTimer;
use crate::viewport::Viewport;

const TIMER_HISTORY: usize = 120;

/// Output of one tick, handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Zero-based tick counter.
    pub index: u64,
    pub pose: CameraPose,
    pub projection: Projection,
    /// The camera-attached point light sits at the camera position.
    pub light_position: Vec3,
}

impl Frame {
    pub fn view_projection(&self) -> Mat4 {
        self.projection.projection_matrix() * self.pose.view_matrix()
    }
}

/// Host-independent frame loop with a single `tick(dt)` entry point.
///
/// Key and resize events may arrive at any point between ticks; each tick reads
/// the key state exactly once.
#[derive(Debug, Clone)]
pub struct GameLoop {
    controller: CameraController,
    keys: KeyState,
    viewport: Viewport,
    timer: FrameTimer,
    frame: u64,
}

impl GameLoop {
    pub fn new(config: MotionConfig, pose: CameraPose, viewport: Viewport) -> Self {
        Self {
            controller: CameraController::new(config, pose),
            keys: KeyState::new(),
            viewport,
            timer: FrameTimer::new(TIMER_HISTORY),
            frame: 0,
        }
    }

    /// Build a loop for a drawing buffer of `width` x `height` pixels.
    pub fn from_config(config: &SessionConfig, width: u32, height: u32) -> Self {
        Self::new(
            config.motion.clone(),
            config.initial_pose(),
            Viewport::new(width, height, config.projection),
        )
    }

    pub fn key_down(&mut self, id: &str) -> bool {
        self.keys.key_down(id)
    }

    pub fn key_up(&mut self, id: &str) -> bool {
        self.keys.key_up(id)
    }

    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    pub fn keys_mut(&mut self) -> &mut KeyState {
        &mut self.keys
    }

    /// Resize to a display element's CSS size. Returns whether the buffer changed.
    pub fn resize_to_display(
        &mut self,
        client_width: f32,
        client_height: f32,
        pixel_ratio: f32,
    ) -> bool {
        self.viewport.resize_to_display(client_width, client_height, pixel_ratio)
    }

    /// Resize to a window size in physical pixels. Returns whether the buffer changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        self.viewport.resize(width, height)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn pose(&self) -> CameraPose {
        self.controller.pose()
    }

    pub fn controller(&self) -> &CameraController {
        &self.controller
    }

    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    /// Number of ticks run so far.
    pub fn frames(&self) -> u64 {
        self.frame
    }

    /// Advance one frame of `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> Frame {
        let _span = tracing::debug_span!("tick", frame = self.frame).entered();

        let pose = self.controller.update(&self.keys, dt);
        self.timer.record(Duration::try_from_secs_f32(dt).unwrap_or(Duration::ZERO));

        let frame = Frame {
            index: self.frame,
            pose,
            projection: *self.viewport.projection(),
            light_position: pose.position,
        };
        self.frame += 1;
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_loop() -> GameLoop {
        GameLoop::from_config(&SessionConfig::default(), 800, 400)
    }

    #[test]
    fn idle_tick_keeps_pose() {
        let mut game = demo_loop();
        let start = game.pose();
        let frame = game.tick(0.016);
        assert_eq!(frame.pose, start);
        assert_eq!(frame.index, 0);
        assert_eq!(game.frames(), 1);
    }

    #[test]
    fn key_events_drive_ticks() {
        let mut game = demo_loop();
        assert!(game.key_down("q"));
        let frame = game.tick(0.016);
        assert!((frame.pose.position.y - 10.2).abs() < 1e-5);

        assert!(game.key_up("q"));
        let frame = game.tick(0.016);
        assert!((frame.pose.position.y - 10.2).abs() < 1e-5);
        assert_eq!(frame.index, 1);
    }

    #[test]
    fn unknown_keys_do_not_move_camera() {
        let mut game = demo_loop();
        let start = game.pose();
        assert!(!game.key_down("Shift"));
        assert_eq!(game.tick(0.016).pose, start);
    }

    #[test]
    fn light_follows_camera() {
        let mut game = demo_loop();
        game.key_down("w");
        let frame = game.tick(0.016);
        assert_eq!(frame.light_position, frame.pose.position);
    }

    #[test]
    fn resize_updates_frame_projection() {
        let mut game = demo_loop();
        assert_eq!(game.tick(0.016).projection.aspect, 2.0);
        assert!(game.resize(600, 600));
        assert_eq!(game.tick(0.016).projection.aspect, 1.0);
        assert!(!game.resize(600, 600));
    }

    #[test]
    fn timer_records_ticks() {
        let mut game = demo_loop();
        for _ in 0..10 {
            game.tick(0.02);
        }
        assert_eq!(game.timer().count(), 10);
        assert!((game.timer().fps() - 50.0).abs() < 0.1);
    }

    #[test]
    fn negative_dt_is_recorded_as_zero() {
        let mut game = demo_loop();
        game.tick(-1.0);
        game.tick(f32::NAN);
        assert_eq!(game.timer().max(), Duration::ZERO);
    }

    #[test]
    fn view_projection_is_finite() {
        let mut game = demo_loop();
        let vp = game.tick(0.016).view_projection();
        assert!(vp.is_finite());
    }
}
