use rand::Rng;

use crate::{bootstrap::Bootstrap, reward::RewardSource};

/// Strategy an [`Arm`] uses to recompute its empirical mean after each recorded pull
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MeanEstimator {
    /// Plain running average of the recorded rewards
    #[default]
    Simple,
    /// Bootstrap bias-corrected mean of the recorded rewards
    Bootstrap(Bootstrap),
}

/// How the bias of an arm's empirical mean is reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BiasMeasure {
    /// x̄ - μ
    #[default]
    Signed,
    /// |x̄ - μ|
    Absolute,
}

/// One arm of the bandit along with its running statistics
#[derive(Debug, Clone)]
pub struct Arm {
    source: RewardSource,
    estimator: MeanEstimator,
    pulls: usize,
    total_reward: f64,
    history: Vec<f64>,
    empirical_mean: f64,
}

impl Arm {
    pub fn new(source: RewardSource, estimator: MeanEstimator) -> Self {
        Self {
            source,
            estimator,
            pulls: 0,
            total_reward: 0.0,
            history: Vec::new(),
            empirical_mean: 0.0,
        }
    }

    /// Pull the arm at time `t` and return the sampled reward
    ///
    /// A `strict` pull only draws from the reward source. The sample is not recorded, so
    /// the arm's pull count, history, and empirical mean are left untouched.
    pub fn pull<R: Rng + ?Sized>(&mut self, rng: &mut R, t: usize, strict: bool) -> f64 {
        let reward = self.source.sample(rng);
        if strict {
            return reward;
        }

        self.pulls += 1;
        self.total_reward += reward;
        self.history.push(reward);
        self.empirical_mean = match self.estimator {
            MeanEstimator::Simple => self.total_reward / self.pulls as f64,
            MeanEstimator::Bootstrap(bootstrap) => bootstrap.correct(&self.history, t, rng),
        };
        reward
    }

    /// UCB1 index at time `t`: x̄ + sqrt(2 ln(t + 1) / n)
    ///
    /// **Panics** if the arm has never been pulled
    pub fn index(&self, t: usize) -> f64 {
        assert!(
            self.pulls > 0,
            "UCB1 index of `{}` queried before its first pull.",
            self.source.label()
        );
        let t = (t + 1) as f64;
        self.empirical_mean + (2.0 * t.ln() / self.pulls as f64).sqrt()
    }

    /// Bias of the empirical mean against a reference mean `mu`
    pub fn bias(&self, mu: f64, measure: BiasMeasure) -> f64 {
        let diff = self.empirical_mean - mu;
        match measure {
            BiasMeasure::Signed => diff,
            BiasMeasure::Absolute => diff.abs(),
        }
    }

    pub fn pulls(&self) -> usize {
        self.pulls
    }

    pub fn empirical_mean(&self) -> f64 {
        self.empirical_mean
    }

    /// All recorded rewards in pull order
    pub fn history(&self) -> &[f64] {
        &self.history
    }
}
