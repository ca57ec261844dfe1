//! Point-set fixtures and assertions about completed clustering passes.

use glam::DVec2;
use swarmscan::{cluster, ClusterParams, ClusterSummary, Label, PointId, PointSet};

/// `(id, label, cluster index)` for every point, sorted by id.
pub type Labelling = Vec<(PointId, Label, i64)>;

/// Builds an unprocessed point set with ids `0..n` from coordinate pairs.
///
/// # Examples
/// ```
/// use test_utils::point_set;
/// let set = point_set(&[(0.0, 0.0), (1.0, 2.0)]);
/// assert_eq!(set.len(), 2);
/// ```
pub fn point_set(coords: &[(f64, f64)]) -> PointSet {
    PointSet::from_positions(coords.iter().map(|&(x, y)| DVec2::new(x, y)))
}

/// Clusters `coords` with the given parameters and checks the pass invariants.
///
/// # Panics
/// Panics if the parameters are invalid or an invariant is violated.
pub fn cluster_positions(
    coords: &[(f64, f64)],
    min_pts: usize,
    epsilon: f64,
) -> (PointSet, ClusterSummary) {
    let mut set = point_set(coords);
    let params = ClusterParams::new(min_pts, epsilon)
        .unwrap_or_else(|e| panic!("invalid test params: {e}"));
    let summary = cluster(set.as_mut_slice(), &params);
    assert_pass_invariants(&set, &summary);
    (set, summary)
}

/// Snapshot of labels keyed by id, independent of enumeration order.
pub fn labelling(set: &PointSet) -> Labelling {
    let mut out: Labelling = set
        .iter()
        .map(|p| (p.id(), p.label(), p.cluster_index()))
        .collect();
    out.sort_by_key(|(id, _, _)| *id);
    out
}

/// Asserts the guarantees every completed pass must meet.
///
/// # Panics
/// Panics with a description of the first violated invariant.
pub fn assert_pass_invariants(set: &PointSet, summary: &ClusterSummary) {
    let count = summary.cluster_count();
    let mut seen = vec![0_usize; count];
    for p in set {
        match p.label() {
            Label::Unprocessed => panic!("point {} left unprocessed", p.id()),
            Label::Noise => assert!(
                p.cluster().is_none(),
                "noise point {} has cluster {:?}",
                p.id(),
                p.cluster()
            ),
            Label::Core | Label::Reachable => {
                let id = p
                    .cluster()
                    .unwrap_or_else(|| panic!("clustered point {} has no cluster", p.id()));
                assert!(id.0 < count, "cluster {id} out of range 0..{count}");
                if let Some(slot) = seen.get_mut(id.0) {
                    *slot += 1;
                }
            }
        }
    }
    assert_eq!(seen, summary.sizes(), "summary sizes disagree with labels");
    assert!(
        seen.iter().all(|&n| n > 0),
        "cluster ids are not dense: {seen:?}"
    );
    let noise = set.iter().filter(|p| p.label() == Label::Noise).count();
    assert_eq!(noise, summary.noise_count());
}
