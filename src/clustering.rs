//! DBSCAN labelling pass.
//!
//! [`cluster`] walks the points in enumeration order. Each still-unprocessed
//! point is tested as a seed: too sparse and it becomes noise, dense enough
//! and it opens a new cluster which is grown through a frontier of candidate
//! neighbours before the next seed is considered.
//!
//! Within a frontier only points that are still unprocessed have their own
//! density evaluated. A point written off as noise by an earlier seed test is
//! attached to the current cluster as a border point and goes no further: it
//! is neither promoted to core nor allowed to contribute its neighbours. Core
//! and reachable points are final for the rest of the pass, so a border point
//! within range of two clusters stays with the one discovered first.

use hashbrown::HashSet;
use log::trace;

use crate::config::ClusterParams;
use crate::neighbour::within_range;
use crate::point::{ClusterId, Label, Point};

/// Outcome of one clustering pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterSummary {
    sizes: Vec<usize>,
    noise: usize,
}

impl ClusterSummary {
    /// Number of clusters discovered. Ids run `0..cluster_count()`.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.sizes.len()
    }

    /// Member count per cluster, indexed by cluster id.
    #[must_use]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Points left as noise when the pass finished.
    #[must_use]
    pub const fn noise_count(&self) -> usize {
        self.noise
    }
}

/// Points awaiting a visit while a cluster grows.
///
/// Behaves as a set: an index already queued is not queued twice. Extraction
/// order is last-in first-out, which keeps passes reproducible.
#[derive(Debug, Default)]
struct Frontier {
    stack: Vec<usize>,
    queued: HashSet<usize>,
}

impl Frontier {
    fn extend(&mut self, indices: impl IntoIterator<Item = usize>) {
        for index in indices {
            if self.queued.insert(index) {
                self.stack.push(index);
            }
        }
    }

    fn pop(&mut self) -> Option<usize> {
        let index = self.stack.pop()?;
        self.queued.remove(&index);
        Some(index)
    }
}

/// Labels every point as core, reachable or noise and assigns cluster ids.
///
/// Every point must enter unprocessed and unassigned, as left by
/// [`crate::PointSet::reset_labels`], and `params` must satisfy
/// [`ClusterParams::validate`]. Neither is rechecked here beyond debug
/// assertions. Cluster ids are handed out densely in discovery order.
///
/// # Examples
/// ```
/// use glam::DVec2;
/// use swarmscan::{cluster, ClusterParams, Label, PointSet};
/// let mut set = PointSet::from_positions([
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(2.0, 0.0),
///     DVec2::new(100.0, 100.0),
/// ]);
/// let params = ClusterParams::new(3, 1.5).unwrap();
/// let summary = cluster(set.as_mut_slice(), &params);
/// assert_eq!(summary.cluster_count(), 1);
/// assert_eq!(set.as_slice()[1].label(), Label::Core);
/// assert_eq!(set.as_slice()[3].label(), Label::Noise);
/// ```
pub fn cluster(points: &mut [Point], params: &ClusterParams) -> ClusterSummary {
    debug_assert!(params.validate().is_ok(), "invalid cluster params {params:?}");
    debug_assert!(
        points.iter().all(|p| p.label() == Label::Unprocessed),
        "clustering requires freshly reset labels"
    );

    let mut sizes = Vec::new();
    for seed in 0..points.len() {
        let Some(candidate) = points.get(seed) else {
            continue;
        };
        if candidate.label() != Label::Unprocessed {
            continue;
        }
        let neighbours = within_range(points, candidate, params.epsilon);
        if neighbours.len() < params.min_pts {
            if let Some(point) = points.get_mut(seed) {
                point.mark_noise();
            }
            continue;
        }

        let id = ClusterId(sizes.len());
        let members = expand(points, seed, neighbours, id, params);
        trace!("closed cluster {id} seeded by point {seed} with {members} members");
        sizes.push(members);
    }

    let noise = points.iter().filter(|p| p.label() == Label::Noise).count();
    ClusterSummary { sizes, noise }
}

/// Grows cluster `id` from the dense point at `seed`, returning its size.
fn expand(
    points: &mut [Point],
    seed: usize,
    neighbours: Vec<usize>,
    id: ClusterId,
    params: &ClusterParams,
) -> usize {
    if let Some(point) = points.get_mut(seed) {
        point.mark_seed(id);
    }
    let mut members = 1;
    let mut frontier = Frontier::default();
    frontier.extend(neighbours.into_iter().filter(|&i| i != seed));

    while let Some(index) = frontier.pop() {
        let Some(point) = points.get_mut(index) else {
            continue;
        };
        match point.label() {
            Label::Noise => {
                point.reclaim(id);
                members += 1;
            }
            Label::Core | Label::Reachable => {}
            Label::Unprocessed => {
                point.claim(id);
                members += 1;
                let reach = points
                    .get(index)
                    .map(|p| within_range(points, p, params.epsilon))
                    .unwrap_or_default();
                if reach.len() >= params.min_pts {
                    if let Some(dense) = points.get_mut(index) {
                        dense.promote();
                    }
                    frontier.extend(reach);
                }
            }
        }
    }
    members
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::{PointId, PointSet};
    use glam::DVec2;
    use rstest::rstest;

    fn run(positions: &[(f64, f64)], min_pts: usize, epsilon: f64) -> (PointSet, ClusterSummary) {
        let mut set = PointSet::from_positions(positions.iter().map(|&(x, y)| DVec2::new(x, y)));
        let params = ClusterParams::new(min_pts, epsilon).expect("valid params");
        let summary = cluster(set.as_mut_slice(), &params);
        (set, summary)
    }

    fn labels(set: &PointSet) -> Vec<(Label, i64)> {
        set.iter().map(|p| (p.label(), p.cluster_index())).collect()
    }

    #[test]
    fn empty_set_has_no_clusters() {
        let (_, summary) = run(&[], 1, 1.0);
        assert_eq!(summary.cluster_count(), 0);
        assert_eq!(summary.noise_count(), 0);
    }

    #[test]
    fn noise_endpoint_is_reclaimed_as_border() {
        // The left end is tested first and is too sparse on its own.
        let (set, summary) = run(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)], 3, 1.5);
        assert_eq!(
            labels(&set),
            vec![
                (Label::Reachable, 0),
                (Label::Core, 0),
                (Label::Reachable, 0),
            ]
        );
        assert_eq!(summary.sizes(), &[3]);
        assert_eq!(summary.noise_count(), 0);
    }

    #[test]
    fn dense_frontier_points_chain_the_cluster() {
        let (set, summary) = run(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)], 3, 1.1);
        assert_eq!(
            labels(&set),
            vec![
                (Label::Reachable, 0),
                (Label::Core, 0),
                (Label::Core, 0),
                (Label::Reachable, 0),
            ]
        );
        assert_eq!(summary.cluster_count(), 1);
    }

    #[test]
    fn border_point_does_not_pull_in_its_own_neighbours() {
        // Point 3 is a border of the left cluster; point 4 is only near point 3.
        let (set, summary) = run(
            &[(0.0, 0.0), (0.0, 1.0), (0.0, -1.0), (1.0, 0.0), (2.0, 0.0)],
            4,
            1.0,
        );
        assert_eq!(set.get(PointId(3)).map(Point::label), Some(Label::Reachable));
        assert_eq!(set.get(PointId(4)).map(Point::label), Some(Label::Noise));
        assert_eq!(summary.sizes(), &[4]);
        assert_eq!(summary.noise_count(), 1);
    }

    #[rstest]
    #[case::left_first(vec![(0.0, 0.0), (0.0, 1.0), (0.0, -1.0), (1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (2.0, -1.0)], 3, 0)]
    #[case::shared_first(vec![(1.0, 0.0), (0.0, 0.0), (0.0, 1.0), (0.0, -1.0), (2.0, 0.0), (2.0, 1.0), (2.0, -1.0)], 0, 0)]
    #[case::right_first(vec![(2.0, 0.0), (2.0, 1.0), (2.0, -1.0), (1.0, 0.0), (0.0, 0.0), (0.0, 1.0), (0.0, -1.0)], 3, 0)]
    fn contested_border_stays_with_first_cluster(
        #[case] positions: Vec<(f64, f64)>,
        #[case] shared: usize,
        #[case] expected_cluster: i64,
    ) {
        let (set, summary) = run(&positions, 4, 1.0);
        assert_eq!(summary.cluster_count(), 2);
        assert_eq!(summary.sizes(), &[4, 3]);
        let border = set.get(PointId(shared)).expect("shared point");
        assert_eq!(border.label(), Label::Reachable);
        assert_eq!(border.cluster_index(), expected_cluster);
    }

    #[test]
    fn ids_follow_discovery_order() {
        let (set, summary) = run(&[(50.0, 50.0), (0.0, 0.0), (51.0, 50.0), (1.0, 0.0)], 2, 1.0);
        assert_eq!(
            labels(&set),
            vec![
                (Label::Core, 0),
                (Label::Core, 1),
                (Label::Core, 0),
                (Label::Core, 1),
            ]
        );
        assert_eq!(summary.sizes(), &[2, 2]);
    }

    #[test]
    fn zero_radius_still_counts_self() {
        let (set, summary) = run(&[(0.0, 0.0), (5.0, 5.0)], 1, 0.0);
        assert_eq!(summary.cluster_count(), 2);
        assert!(set.iter().all(|p| p.label() == Label::Core));
    }

    #[test]
    fn frontier_deduplicates_queued_indices() {
        let mut frontier = Frontier::default();
        frontier.extend([1, 2, 1, 3, 2]);
        let mut drained = Vec::new();
        while let Some(i) = frontier.pop() {
            drained.push(i);
        }
        assert_eq!(drained, vec![3, 2, 1]);
        frontier.extend([1]);
        assert_eq!(frontier.pop(), Some(1));
    }
}
