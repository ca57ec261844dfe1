//! Exhaustive radius queries.
//!
//! Every query scans the whole slice, so a full pass costs `O(n^2)` distance
//! computations. That is fine for swarms of tens of points; there is no
//! spatial index.

use crate::point::Point;

/// Returns the indices of every point within `epsilon` of `origin`.
///
/// Indices refer to positions in `points` and are yielded in enumeration
/// order. The comparison is inclusive, so a point exactly `epsilon` away is
/// a neighbour, and `origin` is always its own neighbour when it belongs to
/// `points`.
///
/// # Examples
/// ```
/// use glam::DVec2;
/// use swarmscan::{neighbour::within_range, PointSet};
/// let set = PointSet::from_positions([
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(5.0, 0.0),
/// ]);
/// let points = set.as_slice();
/// assert_eq!(within_range(points, &points[0], 1.0), vec![0, 1]);
/// ```
#[must_use]
pub fn within_range(points: &[Point], origin: &Point, epsilon: f64) -> Vec<usize> {
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| origin.distance(p) <= epsilon)
        .map(|(i, _)| i)
        .collect()
}
