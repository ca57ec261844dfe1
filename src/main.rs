//! Headless runner printing cluster membership for each timestep.
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use swarmscan::{init_logging, Simulation, SimulationConfig};

/// Cluster a wandering swarm with DBSCAN, one pass per timestep
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Timesteps to run after the initial one
    #[arg(short, long, default_value_t = 10)]
    steps: u64,

    /// Seed for spawning and movement
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of points to spawn
    #[arg(long)]
    points: Option<usize>,

    /// Neighbourhood size, including the point itself, required to be core
    #[arg(long)]
    min_pts: Option<usize>,

    /// Neighbourhood radius
    #[arg(long)]
    epsilon: Option<f64>,
}

impl Args {
    fn load_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_path(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => SimulationConfig::default(),
        };
        if let Some(points) = self.points {
            config.point_count = points;
        }
        if let Some(min_pts) = self.min_pts {
            config.clustering.min_pts = min_pts;
        }
        if let Some(epsilon) = self.epsilon {
            config.clustering.epsilon = epsilon;
        }
        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.load_config()?;
    let mut sim = Simulation::seeded(config, args.seed)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for _ in 0..=args.steps {
        sim.advance_timestep();
        write!(out, "{}", sim.report()).context("writing report")?;
    }
    info!(
        "ran {} timesteps, peak of {} clusters",
        sim.timestep(),
        sim.peak_clusters()
    );
    Ok(())
}
