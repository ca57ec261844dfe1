//! Default simulation tuning values.
//!
//! Distances are expressed in the same units as the viewing area, which is a
//! square of side [`DIMENSION`]. The area only bounds where points spawn;
//! movement is never clamped to it.
use std::f64::consts::TAU;

/// Side length of the square area points spawn in.
pub const DIMENSION: f64 = 900.0;
/// Radius of the marker drawn for each point.
pub const POINT_RADIUS: f64 = DIMENSION * 0.05;
/// Number of points created at start-up.
pub const POINT_COUNT: usize = 50;
/// Neighbourhood size, including the point itself, needed to become core.
pub const MIN_PTS: usize = 3;
/// Neighbourhood radius. Two points are neighbours when their markers overlap.
pub const EPSILON: f64 = POINT_RADIUS * 2.0;
/// Minimum distance travelled in one timestep.
pub const SPEED_MIN: f64 = DIMENSION * 0.01;
/// Extra distance sampled on top of [`SPEED_MIN`] each timestep.
pub const SPEED_RANGE: f64 = 0.0;
/// Largest turn, in radians, applied in either direction per timestep.
pub const ANGLE_RANGE: f64 = TAU * 0.2;
/// Cluster rows reported before any pass has run.
///
/// Reports list at least as many rows as the most clusters ever seen, so the
/// high-water mark starts here.
pub const INITIAL_PEAK_CLUSTERS: usize = 1;
