//! Per-cluster membership listings.
//!
//! A report groups point ids by cluster id, skipping unassigned points, and
//! renders as one `cluster {i}:` line per cluster with each member id
//! tab-separated, followed by a blank line.

use std::fmt;

use crate::point::{ClusterId, Point, PointId};

/// Members of each cluster from one pass, in point enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterReport {
    rows: Vec<Vec<PointId>>,
}

impl ClusterReport {
    /// Groups `points` by cluster.
    ///
    /// At least `min_rows` rows are produced; trailing rows for clusters that
    /// did not occur this pass are empty.
    ///
    /// # Examples
    /// ```
    /// use glam::DVec2;
    /// use swarmscan::{cluster, ClusterParams, ClusterReport, PointSet};
    /// let mut set = PointSet::from_positions([DVec2::ZERO, DVec2::X, DVec2::new(9.0, 9.0)]);
    /// cluster(set.as_mut_slice(), &ClusterParams::new(2, 1.0).unwrap());
    /// let report = ClusterReport::from_points(&set, 2);
    /// assert_eq!(report.to_string(), "cluster 0:\t0\t1\ncluster 1:\n\n");
    /// ```
    #[must_use]
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>, min_rows: usize) -> Self {
        let mut rows: Vec<Vec<PointId>> = vec![Vec::new(); min_rows];
        for point in points {
            let Some(ClusterId(index)) = point.cluster() else {
                continue;
            };
            if rows.len() <= index {
                rows.resize_with(index + 1, Vec::new);
            }
            if let Some(row) = rows.get_mut(index) {
                row.push(point.id());
            }
        }
        Self { rows }
    }

    /// Member lists indexed by cluster id.
    #[must_use]
    pub fn rows(&self) -> &[Vec<PointId>] {
        &self.rows
    }

    /// Members of `id`, empty when the cluster has no row.
    #[must_use]
    pub fn members(&self, id: ClusterId) -> &[PointId] {
        self.rows.get(id.0).map(Vec::as_slice).unwrap_or_default()
    }
}

impl fmt::Display for ClusterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows.iter().enumerate() {
            write!(f, "cluster {index}:")?;
            for id in row {
                write!(f, "\t{id}")?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}
