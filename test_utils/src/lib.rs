//! Utility helpers for tests.
pub mod fixtures;

pub use fixtures::{
    assert_pass_invariants, cluster_positions, labelling, point_set, Labelling,
};
