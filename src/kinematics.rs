//! Random-walk movement.
//!
//! Each timestep a point travels a sampled distance along its current heading
//! and then turns by a sampled angle. Nothing confines points to the spawn
//! area; where they end up is a rendering question, not a physical one.

use glam::DVec2;
use rand::Rng;

use crate::config::KinematicsConfig;
use crate::point::Point;

/// Samples `(speed, turn)` for one step.
///
/// `speed` is uniform in `[speed_min, speed_min + speed_range]` and `turn` is
/// uniform in `[-angle_range, angle_range]`. `config` must be valid.
pub fn sample_motion<R: Rng + ?Sized>(config: &KinematicsConfig, rng: &mut R) -> (f64, f64) {
    let speed = config.speed_min + rng.gen::<f64>() * config.speed_range;
    let turn = rng.gen::<f64>().mul_add(2.0 * config.angle_range, -config.angle_range);
    (speed, turn)
}

/// Displacement produced by travelling `speed` along `heading`.
///
/// # Examples
/// ```
/// use approx::assert_relative_eq;
/// use swarmscan::kinematics::displacement;
/// let d = displacement(std::f64::consts::FRAC_PI_2, 2.0);
/// assert_relative_eq!(d.x, 0.0, epsilon = 1e-12);
/// assert_relative_eq!(d.y, 2.0);
/// ```
#[must_use]
pub fn displacement(heading: f64, speed: f64) -> DVec2 {
    DVec2::new(heading.cos(), heading.sin()) * speed
}

/// Advances `point` by one random-walk step.
///
/// The displacement uses the heading held *before* the turn is applied.
pub fn step<R: Rng + ?Sized>(point: &mut Point, config: &KinematicsConfig, rng: &mut R) {
    let (speed, turn) = sample_motion(config, rng);
    point.displace(displacement(point.heading(), speed), turn);
}
