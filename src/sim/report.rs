/// Final statistics of a single arm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmRecord {
    pub index: usize,
    pub pulls: usize,
    pub empirical_mean: f64,
    /// Bias of the empirical mean against the arm's true mean
    pub bias: f64,
}

/// Everything a finished [`SimulationRun`](super::SimulationRun) emits
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// `(round, cumulative regret)` for rounds `1..=horizon`
    pub regret: Vec<(usize, f64)>,
    /// Per-arm records in arm order
    pub arms: Vec<ArmRecord>,
    /// The most played arm
    pub exploited_arm: usize,
    /// Reward actually collected
    pub total_reward: f64,
    /// Reward credited to the best arm, the regret baseline
    pub best_arm_reward: f64,
}

impl RunReport {
    /// Whether the policy exploited the designated-best (last) arm
    pub fn found_best(&self) -> bool {
        self.exploited_arm + 1 == self.arms.len()
    }

    pub fn final_regret(&self) -> f64 {
        self.regret.last().map_or(0.0, |&(_, r)| r)
    }

    pub fn pulls(&self) -> Vec<usize> {
        self.arms.iter().map(|a| a.pulls).collect()
    }

    pub fn biases(&self) -> Vec<f64> {
        self.arms.iter().map(|a| a.bias).collect()
    }
}

/// Index of the most played arm, the lowest index winning ties
///
/// **Panics** if `pulls` is empty
pub fn exploited_arm(pulls: &[usize]) -> usize {
    assert!(!pulls.is_empty(), "No arms to compare.");
    pulls
        .iter()
        .enumerate()
        .fold((0, pulls[0]), |(best, max), (i, &n)| {
            if n > max {
                (i, n)
            } else {
                (best, max)
            }
        })
        .0
}
