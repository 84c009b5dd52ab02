/// Bandit arms and their running statistics
pub mod arm;

/// Bootstrap bias correction of empirical means
pub mod bootstrap;

/// Configuration errors
pub mod error;

/// Arm selection policies
pub mod exploration;

/// Reward distributions
pub mod reward;

/// Simulation runs from warm-up to horizon
pub mod sim;

/// Helpers for post-processing run output
pub mod util;

pub use arm::{Arm, BiasMeasure, MeanEstimator};
pub use bootstrap::Bootstrap;
pub use error::ConfigError;
pub use sim::{RegretBaseline, RunReport, SimConfig, SimulationRun};
