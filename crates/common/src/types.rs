use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Position and orientation of the viewpoint.
///
/// Orientation is stored as Euler angles in radians and applied in the fixed
/// order yaw, pitch, roll (`YXZ`). The renderer reads a pose but never writes it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    /// Rotation about world Y. Positive turns left.
    pub yaw: f32,
    /// Rotation about the local lateral axis. Positive looks up.
    pub pitch: f32,
    /// Rotation about the forward axis.
    #[serde(default)]
    pub roll: f32,
}

impl CameraPose {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch,
            roll: 0.0,
        }
    }

    /// Pose at `position` whose look direction points at `target`.
    ///
    /// If the two points coincide the pose keeps the default `-Z` heading.
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let Some(dir) = (target - position).try_normalize() else {
            return Self::new(position, 0.0, 0.0);
        };
        let yaw = (-dir.x).atan2(-dir.z);
        let pitch = dir.y.clamp(-1.0, 1.0).asin();
        Self::new(position, yaw, pitch)
    }

    /// Orientation as a quaternion, composed yaw * pitch * roll.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, self.roll)
    }

    /// Unit look direction. Roll does not affect it.
    pub fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(-sy * cp, sp, -cy * cp).normalize()
    }

    pub fn right(&self) -> Vec3 {
        (self.rotation() * Vec3::X).normalize()
    }

    pub fn up(&self) -> Vec3 {
        (self.rotation() * Vec3::Y).normalize()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), self.up())
    }
}
