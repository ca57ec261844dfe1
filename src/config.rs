//! Tuning parameters for movement, clustering and the simulation as a whole.
//!
//! Every type defaults to the values in [`crate::constants`] and can be
//! overridden field by field from a JSON document. Validation is explicit:
//! callers run [`SimulationConfig::validate`] (or the narrower `validate`
//! methods) before handing parameters to the engine, which assumes they hold.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ANGLE_RANGE, DIMENSION, EPSILON, MIN_PTS, POINT_COUNT, SPEED_MIN, SPEED_RANGE,
};
use crate::error::ConfigError;

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidKinematics { field, value })
    }
}

/// Random-walk parameters applied to every point each timestep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KinematicsConfig {
    /// Smallest distance travelled per step.
    pub speed_min: f64,
    /// Width of the uniform speed band above `speed_min`.
    pub speed_range: f64,
    /// Largest turn in radians, applied uniformly in `[-angle_range, angle_range]`.
    pub angle_range: f64,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            speed_min: SPEED_MIN,
            speed_range: SPEED_RANGE,
            angle_range: ANGLE_RANGE,
        }
    }
}

impl KinematicsConfig {
    /// Checks that every field is finite and non-negative.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidKinematics`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("speed_min", self.speed_min)?;
        check_non_negative("speed_range", self.speed_range)?;
        check_non_negative("angle_range", self.angle_range)
    }
}

/// Density thresholds for a clustering pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterParams {
    /// Neighbourhood size, counting the point itself, needed to be core.
    pub min_pts: usize,
    /// Neighbourhood radius.
    pub epsilon: f64,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            min_pts: MIN_PTS,
            epsilon: EPSILON,
        }
    }
}

impl ClusterParams {
    /// Builds validated clustering parameters.
    ///
    /// # Errors
    /// Fails when `min_pts` is zero or `epsilon` is negative or not finite.
    ///
    /// # Examples
    /// ```
    /// use swarmscan::ClusterParams;
    /// assert!(ClusterParams::new(3, 1.5).is_ok());
    /// assert!(ClusterParams::new(0, 1.5).is_err());
    /// assert!(ClusterParams::new(3, -1.0).is_err());
    /// ```
    pub fn new(min_pts: usize, epsilon: f64) -> Result<Self, ConfigError> {
        let params = Self { min_pts, epsilon };
        params.validate()?;
        Ok(params)
    }

    /// Checks the clustering preconditions.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidMinPts`] or [`ConfigError::InvalidEpsilon`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_pts < 1 {
            return Err(ConfigError::InvalidMinPts(self.min_pts));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(ConfigError::InvalidEpsilon(self.epsilon));
        }
        Ok(())
    }
}

/// Complete configuration for a [`crate::Simulation`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of points spawned at start-up.
    pub point_count: usize,
    /// Width of the spawn area.
    pub width: f64,
    /// Height of the spawn area.
    pub height: f64,
    /// Movement parameters.
    pub kinematics: KinematicsConfig,
    /// Clustering parameters.
    pub clustering: ClusterParams,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            point_count: POINT_COUNT,
            width: DIMENSION,
            height: DIMENSION,
            kinematics: KinematicsConfig::default(),
            clustering: ClusterParams::default(),
        }
    }
}

impl SimulationConfig {
    /// Validates the spawn area and nested parameter groups.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let area_ok = |side: f64| side.is_finite() && side > 0.0;
        if !area_ok(self.width) || !area_ok(self.height) {
            return Err(ConfigError::InvalidArea {
                width: self.width,
                height: self.height,
            });
        }
        self.kinematics.validate()?;
        self.clustering.validate()
    }

    /// Parses and validates a JSON document. Missing fields take defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON or a validation error.
    ///
    /// # Examples
    /// ```
    /// use swarmscan::SimulationConfig;
    /// let cfg = SimulationConfig::from_json_str(r#"{"point_count": 10}"#).unwrap();
    /// assert_eq!(cfg.point_count, 10);
    /// assert_eq!(cfg.clustering.min_pts, swarmscan::MIN_PTS);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise as
    /// [`Self::from_json_str`].
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_are_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[rstest]
    #[case(0, 1.0)]
    #[case(3, -0.5)]
    #[case(3, f64::NAN)]
    #[case(3, f64::INFINITY)]
    fn rejects_bad_cluster_params(#[case] min_pts: usize, #[case] epsilon: f64) {
        assert!(ClusterParams::new(min_pts, epsilon).is_err());
    }

    #[test]
    fn zero_epsilon_is_allowed() {
        assert!(ClusterParams::new(1, 0.0).is_ok());
    }

    #[rstest]
    #[case(KinematicsConfig { speed_min: -1.0, ..KinematicsConfig::default() }, "speed_min")]
    #[case(KinematicsConfig { speed_range: f64::NAN, ..KinematicsConfig::default() }, "speed_range")]
    #[case(KinematicsConfig { angle_range: -0.1, ..KinematicsConfig::default() }, "angle_range")]
    fn kinematics_names_offending_field(
        #[case] config: KinematicsConfig,
        #[case] expected: &str,
    ) {
        match config.validate() {
            Err(ConfigError::InvalidKinematics { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected kinematics error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_area() {
        let config = SimulationConfig {
            width: 0.0,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidArea { .. })
        ));
    }

    #[test]
    fn json_overrides_nested_fields() {
        let config = SimulationConfig::from_json_str(
            r#"{ "clustering": { "min_pts": 5 }, "kinematics": { "speed_range": 2.0 } }"#,
        )
        .expect("valid config");
        assert_eq!(config.clustering.min_pts, 5);
        assert!((config.clustering.epsilon - EPSILON).abs() < f64::EPSILON);
        assert!((config.kinematics.speed_range - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.point_count, POINT_COUNT);
    }

    #[test]
    fn json_validation_failure_is_reported() {
        let result = SimulationConfig::from_json_str(r#"{ "clustering": { "min_pts": 0 } }"#);
        assert!(matches!(result, Err(ConfigError::InvalidMinPts(0))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = SimulationConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = SimulationConfig::from_path(Path::new("/nonexistent/swarmscan.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
