//! Logger set-up for the command-line runner.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Default filter when `RUST_LOG` is unset.
///
/// Verbose runs show per-timestep debug lines; `RUST_LOG=swarmscan=trace`
/// additionally shows each cluster as it closes.
#[must_use]
pub fn default_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs `env_logger` as the global logger.
///
/// Later calls are no-ops, so tests may call this freely.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose).to_string());
    let mut builder = Builder::from_env(env);
    builder.format_timestamp(None);

    // Only fails when a logger is already installed.
    if builder.try_init().is_err() {
        log::trace!("logger already initialised");
    }
}
