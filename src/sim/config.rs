use crate::{
    arm::{BiasMeasure, MeanEstimator},
    error::ConfigError,
};

/// Baseline that cumulative regret is measured against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegretBaseline {
    /// Every round the best arm is also pulled strictly, unless it was the arm played,
    /// and its realized rewards are accumulated
    #[default]
    Counterfactual,
    /// Every round the best arm's true mean is accumulated
    Expected,
}

/// Configuration for a [`SimulationRun`](super::SimulationRun)
///
/// The last arm is always the designated-best arm.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Total number of arms
    ///
    /// **Default**: `5`
    pub num_arms: usize,
    /// Number of rounds per run, warm-up included
    ///
    /// **Default**: `500`
    pub horizon: usize,
    /// Reward standard deviation of every arm but the last
    ///
    /// **Default**: `1.0`
    pub sub_optimal_std_dev: f64,
    /// Reward standard deviation of the last (best) arm
    ///
    /// **Default**: `1.0`
    pub best_std_dev: f64,
    /// True mean of each arm
    ///
    /// **Default**: `None`, meaning arm `i` has mean `0.5 + i + 1`
    pub means: Option<Vec<f64>>,
    /// How arms recompute their empirical mean
    ///
    /// **Default**: [`MeanEstimator::Simple`]
    pub estimator: MeanEstimator,
    /// **Default**: [`RegretBaseline::Counterfactual`]
    pub regret: RegretBaseline,
    /// **Default**: [`BiasMeasure::Signed`]
    pub bias: BiasMeasure,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_arms: 5,
            horizon: 500,
            sub_optimal_std_dev: 1.0,
            best_std_dev: 1.0,
            means: None,
            estimator: MeanEstimator::Simple,
            regret: RegretBaseline::Counterfactual,
            bias: BiasMeasure::Signed,
        }
    }
}

impl SimConfig {
    /// Check that the configuration describes a well-formed run
    pub fn validate(&self) -> Result<(), ConfigError> {
        let &Self {
            num_arms, horizon, ..
        } = self;
        if num_arms < 2 {
            return Err(ConfigError::TooFewArms(num_arms));
        }
        if horizon <= num_arms {
            return Err(ConfigError::HorizonTooShort { horizon, num_arms });
        }
        for std_dev in [self.sub_optimal_std_dev, self.best_std_dev] {
            if !(std_dev >= 0.0 && std_dev.is_finite()) {
                return Err(ConfigError::InvalidStdDev(std_dev));
            }
        }
        if let MeanEstimator::Bootstrap(bootstrap) = self.estimator {
            if bootstrap.repetitions == 0 {
                return Err(ConfigError::ZeroRepetitions);
            }
        }
        if let Some(means) = &self.means {
            if means.len() != num_arms {
                return Err(ConfigError::MeansLengthMismatch {
                    expected: num_arms,
                    actual: means.len(),
                });
            }
            if let Some(&mu) = means.iter().find(|mu| !mu.is_finite()) {
                return Err(ConfigError::InvalidMean(mu));
            }
            let (best, rest) = means.split_last().expect("`means` is not empty");
            if rest.iter().any(|mu| mu >= best) {
                return Err(ConfigError::BestArmNotHighest);
            }
        }
        Ok(())
    }

    /// True mean of each arm in arm order
    pub fn arm_means(&self) -> Vec<f64> {
        match &self.means {
            Some(means) => means.clone(),
            None => (0..self.num_arms - 1)
                .map(|i| 0.5 + i as f64 + 1.0)
                .chain(std::iter::once(0.5 + self.num_arms as f64))
                .collect(),
        }
    }

    /// Reward standard deviation of arm `i`
    pub fn std_dev(&self, i: usize) -> f64 {
        if i + 1 == self.num_arms {
            self.best_std_dev
        } else {
            self.sub_optimal_std_dev
        }
    }
}
