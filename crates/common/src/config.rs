use serde::{Deserialize, Serialize};

/// How key input maps onto camera motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlScheme {
    /// Q/E move along world Y, A/D yaw, W/S move along the look direction,
    /// arrow up/down pitch.
    #[default]
    Euler,
    /// W/S, A/D and Q/E translate along forward/right/up basis vectors rebuilt
    /// each frame; arrow keys yaw and pitch.
    Strafe,
}

/// Whether per-key deltas are applied once per tick or scaled by elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum StepMode {
    /// Fixed delta every tick. Motion speed depends on frame rate.
    #[default]
    PerFrame,
    /// Delta scaled by `dt * reference_hz`, so motion matches `PerFrame`
    /// when running at `reference_hz`.
    TimeScaled { reference_hz: f32 },
}

impl StepMode {
    /// Multiplier applied to the configured speeds for a frame of `dt` seconds.
    pub fn factor(&self, dt: f32) -> f32 {
        match *self {
            StepMode::PerFrame => 1.0,
            StepMode::TimeScaled { reference_hz } => {
                if dt.is_finite() && dt > 0.0 {
                    dt * reference_hz
                } else {
                    0.0
                }
            }
        }
    }
}

/// Speeds and control options for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// World units per step.
    pub move_speed: f32,
    /// Radians per step.
    pub rotation_speed: f32,
    pub scheme: ControlScheme,
    pub step_mode: StepMode,
    /// Enables the roll keys.
    pub roll: bool,
    /// Symmetric pitch clamp in radians. `None` leaves pitch unbounded.
    pub pitch_limit: Option<f32>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 0.2,
            rotation_speed: 0.02,
            scheme: ControlScheme::Euler,
            step_mode: StepMode::PerFrame,
            roll: false,
            pitch_limit: None,
        }
    }
}
