use rand::Rng;
use rand_distr::{Distribution, Normal, NormalError};

/// A labelled source of normally distributed rewards
///
/// Sampling never mutates the source, it only consumes randomness from the provided generator.
#[derive(Debug, Clone)]
pub struct RewardSource {
    label: String,
    dist: Normal<f64>,
}

impl RewardSource {
    /// Initialize a reward source following N(`mean`, `std_dev`)
    ///
    /// **Errors** if `std_dev` is negative or not finite
    pub fn new(label: impl Into<String>, mean: f64, std_dev: f64) -> Result<Self, NormalError> {
        if !(std_dev >= 0.0) {
            return Err(NormalError::BadVariance);
        }
        Ok(Self {
            label: label.into(),
            dist: Normal::new(mean, std_dev)?,
        })
    }

    /// Draw one reward
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.dist.sample(rng)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn mean(&self) -> f64 {
        self.dist.mean()
    }

    pub fn std_dev(&self) -> f64 {
        self.dist.std_dev()
    }
}
