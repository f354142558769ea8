use flycam_common::{CameraPose, ControlScheme, MotionConfig};
use flycam_input::{Key, KeyState};

/// Keyboard-driven first-person camera.
///
/// Owns the pose it last produced so a host loop can call [`update`] once per
/// frame. The transform itself is [`step`], which has no hidden state.
///
/// [`update`]: CameraController::update
#[derive(Debug, Clone)]
pub struct CameraController {
    config: MotionConfig,
    pose: CameraPose,
}

impl CameraController {
    pub fn new(config: MotionConfig, pose: CameraPose) -> Self {
        Self { config, pose }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Teleport the camera, e.g. when a scene resets its spawn point.
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.pose = pose;
    }

    /// Advance one frame using the currently held keys.
    pub fn update(&mut self, keys: &KeyState, dt: f32) -> CameraPose {
        self.pose = step(&self.config, self.pose, keys, dt);
        self.pose
    }
}

/// Apply one frame of key input to `pose`.
pub fn step(config: &MotionConfig, pose: CameraPose, keys: &KeyState, dt: f32) -> CameraPose {
    if keys.is_empty() {
        return pose;
    }

    let factor = config.step_mode.factor(dt);
    let linear = config.move_speed * factor;
    let angular = config.rotation_speed * factor;

    let next = match config.scheme {
        ControlScheme::Euler => step_euler(config, pose, keys, linear, angular),
        ControlScheme::Strafe => step_strafe(config, pose, keys, linear, angular),
    };

    tracing::trace!(
        x = next.position.x,
        y = next.position.y,
        z = next.position.z,
        yaw = next.yaw,
        pitch = next.pitch,
        roll = next.roll,
        "camera step"
    );
    next
}

/// Net direction of a key pair: +1, -1, or 0 when both or neither are held.
fn axis(keys: &KeyState, positive: Key, negative: Key) -> f32 {
    let mut value = 0.0;
    if keys.is_down(positive) {
        value += 1.0;
    }
    if keys.is_down(negative) {
        value -= 1.0;
    }
    value
}

fn step_euler(
    config: &MotionConfig,
    mut pose: CameraPose,
    keys: &KeyState,
    linear: f32,
    angular: f32,
) -> CameraPose {
    pose.position.y += axis(keys, Key::Q, Key::E) * linear;
    pose.yaw += axis(keys, Key::A, Key::D) * angular;

    // Heading may have changed above; move along the updated look direction.
    let direction = pose.forward();
    pose.position += direction * axis(keys, Key::W, Key::S) * linear;

    apply_pitch(config, &mut pose, axis(keys, Key::ArrowUp, Key::ArrowDown) * angular);
    apply_roll(config, &mut pose, keys, angular);
    pose
}

fn step_strafe(
    config: &MotionConfig,
    mut pose: CameraPose,
    keys: &KeyState,
    linear: f32,
    angular: f32,
) -> CameraPose {
    // Basis from the full orientation, roll included.
    let forward = pose.forward();
    let right = pose.right();
    let up = right.cross(forward);

    let displacement = forward * axis(keys, Key::W, Key::S)
        + right * axis(keys, Key::D, Key::A)
        + up * axis(keys, Key::Q, Key::E);
    pose.position += displacement * linear;

    pose.yaw += axis(keys, Key::ArrowLeft, Key::ArrowRight) * angular;
    apply_pitch(config, &mut pose, axis(keys, Key::ArrowUp, Key::ArrowDown) * angular);
    apply_roll(config, &mut pose, keys, angular);
    pose
}

fn apply_pitch(config: &MotionConfig, pose: &mut CameraPose, delta: f32) {
    if delta == 0.0 {
        return;
    }
    pose.pitch += delta;
    // A NaN limit means no clamp; the sign of the limit is ignored.
    if let Some(limit) = config.pitch_limit.filter(|l| !l.is_nan()) {
        let limit = limit.abs();
        pose.pitch = pose.pitch.clamp(-limit, limit);
    }
}

fn apply_roll(config: &MotionConfig, pose: &mut CameraPose, keys: &KeyState, angular: f32) {
    if config.roll {
        pose.roll += axis(keys, Key::Z, Key::C) * angular;
    }
}
