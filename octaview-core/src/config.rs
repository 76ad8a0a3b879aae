//! Pipeline configuration
//!
//! The visibility and projection constants are empirical. They default to the
//! values the reference views were tuned for, and can be overridden from JSON.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters of the visibility cone test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    /// Points at or beyond this distance from the origin are culled
    pub far_plane: f32,
    /// A point is kept when `dot(camera_forward, point_dir)` is strictly greater than this
    pub min_facing_dot: f32,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            far_plane: 25.0,
            min_facing_dot: -0.5,
        }
    }
}

/// Parameters of the perspective-like screen projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// `K` in `scale = K / (distance + C)`
    pub scale_numerator: f32,
    /// `C` in `scale = K / (distance + C)`; must be positive
    pub scale_offset: f32,
    /// Screen x of the scene origin
    pub origin_x: f32,
    /// Screen y of the scene origin
    pub origin_y: f32,
    /// `D` in `opacity = min(1, D / distance)`
    pub opacity_distance: f32,
    /// Lower bound on primitive size
    pub min_size: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            scale_numerator: 300.0,
            scale_offset: 5.0,
            origin_x: 400.0,
            origin_y: 300.0,
            opacity_distance: 2.0,
            min_size: 1.0,
        }
    }
}

/// Configuration for the whole synthesis pipeline
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub visibility: VisibilityConfig,
    pub projection: ProjectionConfig,
}

impl PipelineConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PipelineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every constant keeps the pipeline free of divisions by zero
    pub fn validate(&self) -> Result<()> {
        let v = &self.visibility;
        let p = &self.projection;

        let values = [
            ("visibility.far_plane", v.far_plane),
            ("visibility.min_facing_dot", v.min_facing_dot),
            ("projection.scale_numerator", p.scale_numerator),
            ("projection.scale_offset", p.scale_offset),
            ("projection.origin_x", p.origin_x),
            ("projection.origin_y", p.origin_y),
            ("projection.opacity_distance", p.opacity_distance),
            ("projection.min_size", p.min_size),
        ];
        if let Some((name, _)) = values.iter().find(|(_, value)| !value.is_finite()) {
            return Err(Error::InvalidConfig(format!("{name} must be finite")));
        }

        if v.far_plane <= 0.0 {
            return Err(Error::InvalidConfig(
                "visibility.far_plane must be positive".to_string(),
            ));
        }
        if !(-1.0..=1.0).contains(&v.min_facing_dot) {
            return Err(Error::InvalidConfig(
                "visibility.min_facing_dot must lie in [-1, 1]".to_string(),
            ));
        }
        if p.scale_numerator <= 0.0 {
            return Err(Error::InvalidConfig(
                "projection.scale_numerator must be positive".to_string(),
            ));
        }
        if p.scale_offset <= 0.0 {
            return Err(Error::InvalidConfig(
                "projection.scale_offset must be positive".to_string(),
            ));
        }
        if p.opacity_distance <= 0.0 {
            return Err(Error::InvalidConfig(
                "projection.opacity_distance must be positive".to_string(),
            ));
        }
        if p.min_size < 1.0 {
            return Err(Error::InvalidConfig(
                "projection.min_size must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.visibility.far_plane, 25.0);
        assert_eq!(config.visibility.min_facing_dot, -0.5);
        assert_eq!(config.projection.scale_numerator, 300.0);
        assert_eq!(config.projection.scale_offset, 5.0);
        assert_eq!(config.projection.opacity_distance, 2.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            PipelineConfig::from_json_str(r#"{"visibility": {"far_plane": 40.0}}"#).unwrap();
        assert_eq!(config.visibility.far_plane, 40.0);
        assert_eq!(config.visibility.min_facing_dot, -0.5);
        assert_eq!(config.projection, ProjectionConfig::default());
    }

    #[test]
    fn test_rejects_non_positive_scale_offset() {
        let result = PipelineConfig::from_json_str(r#"{"projection": {"scale_offset": 0.0}}"#);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_threshold_out_of_range() {
        let mut config = PipelineConfig::default();
        config.visibility.min_facing_dot = -1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = PipelineConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_round_trip_through_file() {
        let mut config = PipelineConfig::default();
        config.projection.origin_x = 640.0;
        config.projection.origin_y = 360.0;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.to_json_string().unwrap().as_bytes()).unwrap();

        let loaded = PipelineConfig::from_path(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = PipelineConfig::from_path("/definitely/not/here/octaview.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
