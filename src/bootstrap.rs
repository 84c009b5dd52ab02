use rand::{seq::SliceRandom, Rng};

/// Bootstrap bias-corrected mean estimator
///
/// For a history of observed rewards with point estimate x̄, draws `repetitions` resamples
/// of size t + 1 with replacement and averages their means into x̄<sup>*</sup>. The estimated
/// bias is x̄<sup>*</sup> - x̄, and the corrected estimate is
///
/// x̄ - (x̄<sup>*</sup> - x̄) = 2x̄ - x̄<sup>*</sup>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bootstrap {
    /// Number of resamples drawn per correction
    ///
    /// **Default**: `50`
    pub repetitions: usize,
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self { repetitions: 50 }
    }
}

impl Bootstrap {
    pub fn new(repetitions: usize) -> Self {
        Self { repetitions }
    }

    /// Compute the bias-corrected mean of `history` at time `t`
    ///
    /// **Panics** if `history` is empty or `repetitions` is zero
    pub fn correct<R: Rng + ?Sized>(&self, history: &[f64], t: usize, rng: &mut R) -> f64 {
        assert!(
            !history.is_empty(),
            "Cannot resample an empty reward history."
        );
        assert!(self.repetitions > 0, "Bootstrap needs at least one repetition.");

        let point = mean(history);
        let size = t + 1;
        let resampled = (0..self.repetitions)
            .map(|_| {
                let sum: f64 = (0..size)
                    .map(|_| *history.choose(rng).expect("`history` is not empty"))
                    .sum();
                sum / size as f64
            })
            .sum::<f64>()
            / self.repetitions as f64;

        let bias = resampled - point;
        point - bias
    }
}

fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}
