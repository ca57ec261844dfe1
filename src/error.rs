//! Configuration errors.
//!
//! Clustering, kinematics and neighbour queries cannot fail once their
//! parameters have been validated, so every error the crate reports stems
//! from configuration: out-of-range tuning values or an unreadable config
//! document.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a configuration is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `min_pts` must count at least the point itself.
    #[error("min_pts must be at least 1, got {0}")]
    InvalidMinPts(usize),
    /// `epsilon` must be a finite, non-negative radius.
    #[error("epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f64),
    /// A kinematics range or minimum is negative or not finite.
    #[error("kinematics field `{field}` must be finite and non-negative, got {value}")]
    InvalidKinematics {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// The spawn area must have finite, positive sides.
    #[error("spawn area must have finite positive sides, got {width} x {height}")]
    InvalidArea {
        /// Rejected width.
        width: f64,
        /// Rejected height.
        height: f64,
    },
    /// The config file could not be read.
    #[error("failed to read config {path:?}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The config document is not valid JSON for a [`crate::SimulationConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
