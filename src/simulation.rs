//! Timestep driver.
//!
//! The [`Simulation`] owns the point set and the random source. Each call to
//! [`Simulation::advance_timestep`] moves every point, clears the previous
//! labelling and runs a fresh clustering pass. No clustering state survives
//! from one timestep to the next.

use std::f64::consts::TAU;

use glam::DVec2;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clustering::{cluster, ClusterSummary};
use crate::config::{ClusterParams, KinematicsConfig, SimulationConfig};
use crate::constants::INITIAL_PEAK_CLUSTERS;
use crate::error::ConfigError;
use crate::kinematics::step;
use crate::point::{Point, PointId, PointSet};
use crate::report::ClusterReport;

/// Moves every point, resets labels and reclusters.
///
/// Parameters are assumed valid; see [`KinematicsConfig::validate`] and
/// [`ClusterParams::validate`].
pub fn advance_timestep<R: Rng + ?Sized>(
    points: &mut PointSet,
    kinematics: &KinematicsConfig,
    params: &ClusterParams,
    rng: &mut R,
) -> ClusterSummary {
    for point in points.as_mut_slice() {
        step(point, kinematics, rng);
    }
    points.reset_labels();
    cluster(points.as_mut_slice(), params)
}

/// Spawns `count` points uniformly over `[0, width) x [0, height)` with
/// uniformly random headings.
pub fn spawn_points<R: Rng + ?Sized>(
    count: usize,
    width: f64,
    height: f64,
    rng: &mut R,
) -> PointSet {
    PointSet::new(
        (0..count)
            .map(|i| {
                let position = DVec2::new(rng.gen::<f64>() * width, rng.gen::<f64>() * height);
                let heading = rng.gen::<f64>() * TAU;
                Point::new(PointId(i), position, heading)
            })
            .collect(),
    )
}

/// A swarm of wandering points reclustered every timestep.
#[derive(Debug)]
pub struct Simulation<R = StdRng> {
    config: SimulationConfig,
    points: PointSet,
    rng: R,
    timestep: u64,
    peak_clusters: usize,
}

impl Simulation<StdRng> {
    /// Spawns a simulation driven by a [`StdRng`] seeded with `seed`.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if `config` fails validation.
    ///
    /// # Examples
    /// ```
    /// use swarmscan::{Simulation, SimulationConfig};
    /// let mut sim = Simulation::seeded(SimulationConfig::default(), 7).unwrap();
    /// let summary = sim.advance_timestep();
    /// assert_eq!(sim.timestep(), 1);
    /// assert!(summary.cluster_count() <= sim.points().len());
    /// ```
    pub fn seeded(config: SimulationConfig, seed: u64) -> Result<Self, ConfigError> {
        info!(
            "spawning {} points with seed {seed}",
            config.point_count
        );
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Simulation<R> {
    /// Validates `config` and spawns `config.point_count` random points.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if `config` fails validation.
    pub fn new(config: SimulationConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let points = spawn_points(config.point_count, config.width, config.height, &mut rng);
        Ok(Self::assemble(config, points, rng))
    }

    /// Wraps an existing point set. `config.point_count` is ignored in favour
    /// of the set's size.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if `config` fails validation.
    pub fn from_points(
        config: SimulationConfig,
        points: PointSet,
        rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(config, points, rng))
    }

    fn assemble(config: SimulationConfig, points: PointSet, rng: R) -> Self {
        Self {
            config: SimulationConfig {
                point_count: points.len(),
                ..config
            },
            points,
            rng,
            timestep: 0,
            peak_clusters: INITIAL_PEAK_CLUSTERS,
        }
    }

    /// Runs one timestep and returns its clustering summary.
    pub fn advance_timestep(&mut self) -> ClusterSummary {
        let summary = advance_timestep(
            &mut self.points,
            &self.config.kinematics,
            &self.config.clustering,
            &mut self.rng,
        );
        self.timestep += 1;
        self.peak_clusters = self.peak_clusters.max(summary.cluster_count());
        debug!(
            "timestep {}: {} clusters, {} noise",
            self.timestep,
            summary.cluster_count(),
            summary.noise_count()
        );
        summary
    }

    /// Membership report for the latest pass, padded to the peak cluster count.
    #[must_use]
    pub fn report(&self) -> ClusterReport {
        ClusterReport::from_points(&self.points, self.peak_clusters)
    }

    /// Current points.
    #[must_use]
    pub const fn points(&self) -> &PointSet {
        &self.points
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Timesteps run so far.
    #[must_use]
    pub const fn timestep(&self) -> u64 {
        self.timestep
    }

    /// Most clusters seen in any pass, never below one.
    #[must_use]
    pub const fn peak_clusters(&self) -> usize {
        self.peak_clusters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Label;
    use approx::assert_relative_eq;

    fn still() -> SimulationConfig {
        SimulationConfig {
            kinematics: KinematicsConfig {
                speed_min: 0.0,
                speed_range: 0.0,
                angle_range: 0.0,
            },
            clustering: ClusterParams {
                min_pts: 3,
                epsilon: 1.5,
            },
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn spawn_stays_inside_area() {
        let mut rng = StdRng::seed_from_u64(11);
        let set = spawn_points(200, 30.0, 10.0, &mut rng);
        assert_eq!(set.len(), 200);
        for (i, p) in set.iter().enumerate() {
            assert_eq!(p.id(), PointId(i));
            assert!((0.0..30.0).contains(&p.position().x));
            assert!((0.0..10.0).contains(&p.position().y));
            assert!((0.0..TAU).contains(&p.heading()));
            assert_eq!(p.label(), Label::Unprocessed);
        }
    }

    #[test]
    fn wrapped_points_set_the_effective_count() {
        let points = PointSet::from_positions([DVec2::ZERO, DVec2::X, DVec2::Y]);
        let sim =
            Simulation::from_points(still(), points, StdRng::seed_from_u64(0)).expect("valid");
        assert_eq!(sim.config().point_count, 3);
        assert_eq!(sim.config().clustering, still().clustering);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = SimulationConfig {
            clustering: ClusterParams {
                min_pts: 0,
                epsilon: 1.0,
            },
            ..SimulationConfig::default()
        };
        assert!(Simulation::seeded(config, 1).is_err());
    }

    #[test]
    fn stationary_swarm_relabels_identically() {
        let points = PointSet::from_positions(
            [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (100.0, 100.0), (101.0, 100.0)]
                .map(|(x, y)| DVec2::new(x, y)),
        );
        let mut sim =
            Simulation::from_points(still(), points, StdRng::seed_from_u64(0)).expect("valid");
        let first = sim.advance_timestep();
        let snapshot = sim.points().clone();
        let second = sim.advance_timestep();
        assert_eq!(first, second);
        assert_eq!(&snapshot, sim.points());
        assert_eq!(first.cluster_count(), 1);
        assert_eq!(sim.timestep(), 2);
    }

    #[test]
    fn timestep_moves_every_point() {
        let config = SimulationConfig {
            kinematics: KinematicsConfig {
                speed_min: 2.0,
                speed_range: 0.0,
                angle_range: 0.0,
            },
            ..still()
        };
        let points = PointSet::from_positions([DVec2::ZERO, DVec2::new(10.0, 0.0)]);
        let mut sim =
            Simulation::from_points(config, points, StdRng::seed_from_u64(0)).expect("valid");
        sim.advance_timestep();
        let xs: Vec<f64> = sim.points().iter().map(|p| p.position().x).collect();
        assert_relative_eq!(xs.first().copied().unwrap_or_default(), 2.0);
        assert_relative_eq!(xs.get(1).copied().unwrap_or_default(), 12.0);
    }

    #[test]
    fn peak_starts_at_one_and_only_grows() {
        let points = PointSet::from_positions(
            [(0.0, 0.0), (1.0, 0.0), (50.0, 0.0), (51.0, 0.0)].map(|(x, y)| DVec2::new(x, y)),
        );
        let config = SimulationConfig {
            clustering: ClusterParams {
                min_pts: 2,
                epsilon: 1.0,
            },
            ..still()
        };
        let mut sim =
            Simulation::from_points(config, points, StdRng::seed_from_u64(0)).expect("valid");
        assert_eq!(sim.peak_clusters(), 1);
        sim.advance_timestep();
        assert_eq!(sim.peak_clusters(), 2);
        assert_eq!(sim.report().rows().len(), 2);
    }
}
