//! Moving entities and their per-pass cluster membership.
//!
//! A [`Point`] carries two kinds of state with separate owners. Position and
//! heading change only through [`crate::kinematics::step`]; label and cluster
//! change only through [`crate::clustering::cluster`] and
//! [`PointSet::reset_labels`]. The label transitions are exposed as narrow
//! crate-private methods rather than setters so the state machine cannot be
//! bypassed.

use std::fmt;

use glam::DVec2;

/// Stable identity assigned when a point is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub usize);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of a cluster within a single pass.
///
/// Ids are dense, `0..cluster_count`, in discovery order. They carry no
/// meaning across passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClusterId(pub usize);

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of a point by the most recent clustering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Label {
    /// Not yet visited in the current pass.
    #[default]
    Unprocessed,
    /// Dense enough to grow its cluster.
    Core,
    /// Border point attached to a cluster without growing it.
    Reachable,
    /// Not part of any cluster.
    Noise,
}

impl Label {
    /// Whether a point with this label belongs to a cluster.
    #[must_use]
    pub const fn is_clustered(self) -> bool {
        matches!(self, Self::Core | Self::Reachable)
    }
}

/// A wandering entity in the plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    id: PointId,
    position: DVec2,
    heading: f64,
    label: Label,
    cluster: Option<ClusterId>,
}

impl Point {
    /// Creates an unprocessed, unassigned point.
    #[must_use]
    pub const fn new(id: PointId, position: DVec2, heading: f64) -> Self {
        Self {
            id,
            position,
            heading,
            label: Label::Unprocessed,
            cluster: None,
        }
    }

    /// Identity fixed at creation.
    #[must_use]
    pub const fn id(&self) -> PointId {
        self.id
    }

    /// Current coordinates.
    #[must_use]
    pub const fn position(&self) -> DVec2 {
        self.position
    }

    /// Direction of travel in radians.
    #[must_use]
    pub const fn heading(&self) -> f64 {
        self.heading
    }

    /// Label from the latest pass.
    #[must_use]
    pub const fn label(&self) -> Label {
        self.label
    }

    /// Cluster from the latest pass, `None` for noise or unprocessed points.
    #[must_use]
    pub const fn cluster(&self) -> Option<ClusterId> {
        self.cluster
    }

    /// Cluster as a signed index, `-1` when unassigned.
    ///
    /// # Examples
    /// ```
    /// use glam::DVec2;
    /// use swarmscan::{Point, PointId};
    /// let p = Point::new(PointId(0), DVec2::ZERO, 0.0);
    /// assert_eq!(p.cluster_index(), -1);
    /// ```
    #[must_use]
    pub fn cluster_index(&self) -> i64 {
        self.cluster
            .map_or(-1, |c| i64::try_from(c.0).unwrap_or(i64::MAX))
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        self.position.distance(other.position)
    }

    pub(crate) fn displace(&mut self, delta: DVec2, turn: f64) {
        self.position += delta;
        self.heading += turn;
    }

    pub(crate) fn reset(&mut self) {
        self.label = Label::Unprocessed;
        self.cluster = None;
    }

    /// `Unprocessed -> Noise`; the cluster stays unassigned.
    pub(crate) fn mark_noise(&mut self) {
        debug_assert_eq!(self.label, Label::Unprocessed);
        self.label = Label::Noise;
    }

    /// `Unprocessed -> Core` for a cluster seed.
    pub(crate) fn mark_seed(&mut self, cluster: ClusterId) {
        debug_assert_eq!(self.label, Label::Unprocessed);
        self.label = Label::Core;
        self.cluster = Some(cluster);
    }

    /// `Unprocessed -> Reachable` when first reached by an expanding cluster.
    pub(crate) fn claim(&mut self, cluster: ClusterId) {
        debug_assert_eq!(self.label, Label::Unprocessed);
        self.label = Label::Reachable;
        self.cluster = Some(cluster);
    }

    /// `Reachable -> Core` once the claimed point proves dense.
    pub(crate) fn promote(&mut self) {
        debug_assert_eq!(self.label, Label::Reachable);
        self.label = Label::Core;
    }

    /// `Noise -> Reachable`: an earlier noise verdict is overturned by a
    /// cluster that reaches the point.
    pub(crate) fn reclaim(&mut self, cluster: ClusterId) {
        debug_assert_eq!(self.label, Label::Noise);
        self.label = Label::Reachable;
        self.cluster = Some(cluster);
    }
}

/// Ordered, fixed-size collection of points owned by the simulation driver.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Wraps `points`, keeping their order as the enumeration order.
    #[must_use]
    pub const fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Builds unprocessed points at `positions`, with ids `0..n` and zero heading.
    ///
    /// # Examples
    /// ```
    /// use glam::DVec2;
    /// use swarmscan::PointSet;
    /// let set = PointSet::from_positions([DVec2::ZERO, DVec2::X]);
    /// assert_eq!(set.len(), 2);
    /// ```
    #[must_use]
    pub fn from_positions(positions: impl IntoIterator<Item = DVec2>) -> Self {
        Self::new(
            positions
                .into_iter()
                .enumerate()
                .map(|(i, pos)| Point::new(PointId(i), pos, 0.0))
                .collect(),
        )
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in enumeration order.
    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Mutable access for the engine. Membership cannot change through a slice.
    pub fn as_mut_slice(&mut self) -> &mut [Point] {
        &mut self.points
    }

    /// Iterates in enumeration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Looks a point up by id.
    #[must_use]
    pub fn get(&self, id: PointId) -> Option<&Point> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Returns every point to `Unprocessed` with no cluster.
    pub fn reset_labels(&mut self) {
        for point in &mut self.points {
            point.reset();
        }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
