//! Session configuration loaded from YAML or JSON.
//!
//! Every field is optional; missing values fall back to the demo defaults
//! (camera at (10, 10, 10) looking at (0, 10, 0), 45 degree field of view).

use std::path::{Path, PathBuf};

use flycam_common::{CameraPose, MotionConfig, Projection, StepMode};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Errors from loading or validating a session config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format: {0:?} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Where the camera starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl Default for StartPose {
    fn default() -> Self {
        Self {
            position: Vec3::new(10.0, 10.0, 10.0),
            look_at: Vec3::new(0.0, 10.0, 0.0),
        }
    }
}

/// Everything needed to start a camera session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub motion: MotionConfig,
    pub start: StartPose,
    pub projection: Projection,
}

impl SessionConfig {
    /// Load and validate a config file. The format is chosen by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_str(&text)?,
            Some("json") => Self::from_json_str(&text)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };
        tracing::debug!(path = %path.display(), "loaded session config");
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.motion;
        non_negative("motion.move_speed", m.move_speed)?;
        non_negative("motion.rotation_speed", m.rotation_speed)?;
        if let Some(limit) = m.pitch_limit {
            non_negative("motion.pitch_limit", limit)?;
        }
        if let StepMode::TimeScaled { reference_hz } = m.step_mode {
            if !(reference_hz.is_finite() && reference_hz > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "motion.step_mode.reference_hz must be positive, got {reference_hz}"
                )));
            }
        }
        if !(self.start.position.is_finite() && self.start.look_at.is_finite()) {
            return Err(ConfigError::Invalid("start pose must be finite".into()));
        }
        let p = &self.projection;
        if !(p.fov_degrees > 0.0 && p.fov_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "projection.fov_degrees must be in (0, 180), got {}",
                p.fov_degrees
            )));
        }
        if !(p.near > 0.0 && p.far > p.near) {
            return Err(ConfigError::Invalid(format!(
                "projection needs 0 < near < far, got near={} far={}",
                p.near, p.far
            )));
        }
        Ok(())
    }

    pub fn initial_pose(&self) -> CameraPose {
        CameraPose::looking_at(self.start.position, self.start.look_at)
    }
}

fn non_negative(field: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{field} must be a finite non-negative number, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flycam_common::ControlScheme;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        let pose = config.initial_pose();
        assert_eq!(pose.position, Vec3::new(10.0, 10.0, 10.0));
    }

    #[test]
    fn empty_yaml_gives_defaults() {
        let config = SessionConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn yaml_overrides() {
        let yaml = r#"
motion:
  move_speed: 0.5
  scheme: strafe
  roll: true
  step_mode:
    mode: time_scaled
    reference_hz: 60.0
start:
  position: [0.0, 2.0, 5.0]
projection:
  fov_degrees: 60.0
"#;
        let config = SessionConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.motion.move_speed, 0.5);
        assert_eq!(config.motion.rotation_speed, 0.02);
        assert_eq!(config.motion.scheme, ControlScheme::Strafe);
        assert!(config.motion.roll);
        assert_eq!(
            config.motion.step_mode,
            StepMode::TimeScaled { reference_hz: 60.0 }
        );
        assert_eq!(config.start.position, Vec3::new(0.0, 2.0, 5.0));
        assert_eq!(config.start.look_at, Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(config.projection.fov_degrees, 60.0);
        assert_eq!(config.projection.far, 100.0);
    }

    #[test]
    fn yaml_round_trip() {
        let config = SessionConfig::default();
        let text = config.to_yaml().unwrap();
        assert_eq!(SessionConfig::from_yaml_str(&text).unwrap(), config);
    }

    #[test]
    fn rejects_negative_speed() {
        let err = SessionConfig::from_json_str(r#"{"motion":{"move_speed":-1.0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_zero_reference_rate() {
        let err = SessionConfig::from_json_str(
            r#"{"motion":{"step_mode":{"mode":"time_scaled","reference_hz":0.0}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_bad_projection() {
        let err =
            SessionConfig::from_json_str(r#"{"projection":{"near":10.0,"far":1.0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let err = SessionConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"motion":{{"rotation_speed":0.05}}}}"#).unwrap();

        let config = SessionConfig::load(&path).unwrap();
        assert_eq!(config.motion.rotation_speed, 0.05);
    }

    #[test]
    fn load_yml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.yml");
        std::fs::write(&path, "motion:\n  pitch_limit: 1.5\n").unwrap();

        let config = SessionConfig::load(&path).unwrap();
        assert_eq!(config.motion.pitch_limit, Some(1.5));
    }

    #[test]
    fn load_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "").unwrap();

        let err = SessionConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn load_missing_file() {
        let err = SessionConfig::load("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
