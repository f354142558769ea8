use glam::Mat4;
use serde::{Deserialize, Serialize};

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            aspect: 2.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_projection() {
        let p = Projection::default();
        assert_eq!(p.fov_degrees, 45.0);
        assert_eq!(p.near, 0.1);
        assert_eq!(p.far, 100.0);
        let m = p.projection_matrix();
        assert!(!m.col(0).x.is_nan());
    }
}
