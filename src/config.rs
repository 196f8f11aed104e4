//! Pipeline configuration.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::geometry::DEFAULT_CIRCLE_SEGMENTS;
use crate::math::TOLERANCE;
use crate::operations::shaping::ExtrusionParams;
use crate::surface::SurfaceKind;

/// Tunables for surface generation and the refresh loop.
///
/// Missing keys take their default values when loading from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Seconds between floor refreshes.
    pub refresh_interval: f64,
    /// Depth of the front cap of extruded solids.
    pub front_offset: f64,
    /// Depth of the back cap of extruded solids.
    pub back_offset: f64,
    /// Vertex count used when sampling circles.
    pub circle_segments: usize,
    /// Floor height relative to the tracked point.
    pub floor_offset: f64,
    pub floor_half_extent: f64,
    /// Minimum turn for an ear-clipping candidate.
    pub convexity_epsilon: f64,
    /// Entity names whose colliders, and their descendants', are ignored.
    pub exclusions: Vec<String>,
    pub static_surface_kind: SurfaceKind,
    pub render_static: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            refresh_interval: 0.1,
            front_offset: -10.0,
            back_offset: 10.0,
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
            floor_offset: -20.0,
            floor_half_extent: 128.0,
            convexity_epsilon: TOLERANCE,
            exclusions: ["Player", "Orange", "Coffee+Cup+Takeaway", "SnowHat"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            static_surface_kind: SurfaceKind::Hangable,
            render_static: false,
        }
    }
}

impl PipelineConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.refresh_interval > 0.0 && self.refresh_interval.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "refresh_interval must be positive, got {}",
                self.refresh_interval
            )));
        }
        if self.circle_segments < 3 {
            return Err(ConfigError::Invalid(format!(
                "circle_segments must be at least 3, got {}",
                self.circle_segments
            )));
        }
        if !self.front_offset.is_finite() || !self.back_offset.is_finite() {
            return Err(ConfigError::Invalid("extrusion offsets must be finite".into()));
        }
        if (self.front_offset - self.back_offset).abs() < TOLERANCE {
            return Err(ConfigError::Invalid(
                "front_offset and back_offset must differ".into(),
            ));
        }
        if !(self.floor_half_extent > 0.0 && self.floor_half_extent.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "floor_half_extent must be positive, got {}",
                self.floor_half_extent
            )));
        }
        if !self.floor_offset.is_finite() {
            return Err(ConfigError::Invalid("floor_offset must be finite".into()));
        }
        if !(self.convexity_epsilon >= 0.0 && self.convexity_epsilon.is_finite()) {
            return Err(ConfigError::Invalid(
                "convexity_epsilon must be non-negative".into(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn extrusion_params(&self) -> ExtrusionParams {
        ExtrusionParams {
            front: self.front_offset,
            back: self.back_offset,
            convexity_epsilon: self.convexity_epsilon,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.exclusions,
            ["Player", "Orange", "Coffee+Cup+Takeaway", "SnowHat"]
        );
        assert_eq!(config.static_surface_kind, SurfaceKind::Hangable);
        assert!(!config.render_static);
    }

    #[test]
    fn empty_document_gives_defaults() {
        let config = PipelineConfig::from_toml_str("").unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn partial_document_overrides_named_keys() {
        let config = PipelineConfig::from_toml_str(
            r#"
            refresh_interval = 0.25
            exclusions = ["Player", "Ghost"]
            static_surface_kind = "Default"
            "#,
        )
        .unwrap();
        assert!((config.refresh_interval - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.exclusions.len(), 2);
        assert_eq!(config.static_surface_kind, SurfaceKind::Default);
        assert_eq!(config.circle_segments, 32);
    }

    #[test]
    fn invalid_values_rejected() {
        for doc in [
            "refresh_interval = 0.0",
            "circle_segments = 2",
            "front_offset = 5.0\nback_offset = 5.0",
            "floor_half_extent = -1.0",
        ] {
            assert!(
                matches!(PipelineConfig::from_toml_str(doc), Err(ConfigError::Invalid(_))),
                "{doc}"
            );
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            PipelineConfig::from_toml_str("refresh_interval = "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn extrusion_params_follow_offsets() {
        let params = PipelineConfig::default().extrusion_params();
        assert!((params.front + 10.0).abs() < f64::EPSILON);
        assert!((params.back - 10.0).abs() < f64::EPSILON);
    }
}
