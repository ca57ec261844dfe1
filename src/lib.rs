//! Density-based clustering of a wandering 2-D swarm.
//!
//! A fixed set of points takes one random-walk step per timestep, after
//! which every point is relabelled from scratch by a DBSCAN pass as core,
//! reachable (border) or noise. Rendering and reporting consume the labels
//! but never influence them.
//!
//! ```
//! use swarmscan::{Simulation, SimulationConfig};
//!
//! let mut sim = Simulation::seeded(SimulationConfig::default(), 42).unwrap();
//! sim.advance_timestep();
//! print!("{}", sim.report());
//! ```
pub mod clustering;
pub mod config;
pub mod constants;
pub mod error;
pub mod kinematics;
pub mod logging;
pub mod neighbour;
pub mod point;
pub mod presentation;
pub mod report;
pub mod simulation;
pub use constants::*;

// Re-export commonly used items
pub use clustering::{cluster, ClusterSummary};
pub use config::{ClusterParams, KinematicsConfig, SimulationConfig};
pub use error::ConfigError;
pub use logging::init as init_logging;
pub use neighbour::within_range;
pub use point::{ClusterId, Label, Point, PointId, PointSet};
pub use report::ClusterReport;
pub use simulation::{advance_timestep, spawn_points, Simulation};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use swarmscan::prelude::*;
    //! ```

    pub use crate::{
        advance_timestep, cluster, ClusterParams, ClusterReport, ClusterSummary,
        KinematicsConfig, Label, Point, PointId, PointSet, Simulation, SimulationConfig,
    };
    pub use glam::DVec2;
}
