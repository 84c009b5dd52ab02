use thiserror::Error;

/// Errors raised while validating a [`SimConfig`](crate::sim::SimConfig)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("At least 2 arms are required, got {0}")]
    TooFewArms(usize),
    #[error("Horizon {horizon} must exceed the number of arms ({num_arms})")]
    HorizonTooShort { horizon: usize, num_arms: usize },
    #[error("Invalid reward standard deviation: {0}")]
    InvalidStdDev(f64),
    #[error("Bootstrap needs at least one repetition")]
    ZeroRepetitions,
    #[error("Expected {expected} arm means, got {actual}")]
    MeansLengthMismatch { expected: usize, actual: usize },
    #[error("The last arm must have the strictly highest mean")]
    BestArmNotHighest,
    #[error("Invalid arm mean: {0}")]
    InvalidMean(f64),
}
