mod config;
mod report;

pub use config::{RegretBaseline, SimConfig};
pub use report::{exploited_arm, ArmRecord, RunReport};

use log::{debug, trace};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    arm::{Arm, BiasMeasure},
    error::ConfigError,
    exploration::UCB1,
    reward::RewardSource,
};

/// Stage of a [`SimulationRun`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Every arm is played once, in order
    Warmup,
    /// Arms are chosen by the UCB1 policy
    Steady,
    /// The horizon has been reached
    Done,
}

/// A single UCB1 bandit simulation from the first round to the horizon
///
/// The run owns its arms and its random number generator, so independent runs share no state.
pub struct SimulationRun {
    arms: Vec<Arm>,
    means: Vec<f64>,
    policy: UCB1,
    rng: StdRng,
    phase: Phase,
    time: usize,
    horizon: usize,
    baseline: RegretBaseline,
    bias: BiasMeasure,
    reward: f64,
    regret: f64,
    best_arm_reward: f64,
    trace: Vec<(usize, f64)>,
}

impl SimulationRun {
    /// Initialize a run with a deterministic seed
    pub fn new(config: &SimConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &SimConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let means = config.arm_means();
        let arms = means
            .iter()
            .enumerate()
            .map(|(i, &mu)| {
                let std_dev = config.std_dev(i);
                let source = RewardSource::new(format!("Arm{}", i + 1), mu, std_dev)
                    .map_err(|_| ConfigError::InvalidStdDev(std_dev))?;
                Ok::<_, ConfigError>(Arm::new(source, config.estimator))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        debug!("Starting simulation run: {config:?}");

        Ok(Self {
            arms,
            means,
            policy: UCB1::new(),
            rng,
            phase: Phase::Warmup,
            time: 0,
            horizon: config.horizon,
            baseline: config.regret,
            bias: config.bias,
            reward: 0.0,
            regret: 0.0,
            best_arm_reward: 0.0,
            trace: Vec::with_capacity(config.horizon),
        })
    }

    /// Play one round and return the phase the run is in afterwards
    pub fn step(&mut self) -> Phase {
        match self.phase {
            Phase::Warmup => {
                self.play(self.time);
                if self.time == self.arms.len() {
                    self.phase = Phase::Steady;
                }
            }
            Phase::Steady => {
                let choice = self.policy.choose(&self.arms, self.time, &mut self.rng);
                self.play(choice);
                if self.time == self.horizon {
                    self.phase = Phase::Done;
                    debug!(
                        "Simulation run done: regret {:.3}, exploited Arm{}",
                        self.regret,
                        exploited_arm(&self.pulls()) + 1
                    );
                }
            }
            Phase::Done => {}
        }
        self.phase
    }

    /// Run to the horizon and report the results
    pub fn run(mut self) -> RunReport {
        while self.step() != Phase::Done {}
        self.report()
    }

    /// Pull the chosen arm at the current time and update reward and regret
    fn play(&mut self, choice: usize) {
        let t = self.time;
        let best = self.best_arm();
        let gain = self.arms[choice].pull(&mut self.rng, t, false);
        self.reward += gain;
        self.best_arm_reward += match self.baseline {
            RegretBaseline::Counterfactual if choice == best => gain,
            RegretBaseline::Counterfactual => self.arms[best].pull(&mut self.rng, t, true),
            RegretBaseline::Expected => self.means[best],
        };
        self.regret = self.best_arm_reward - self.reward;

        self.time += 1;
        self.trace.push((self.time, self.regret));
        trace!(
            "round {}: played Arm{}, regret {:.3}",
            self.time,
            choice + 1,
            self.regret
        );
    }

    /// Snapshot of the run's emitted statistics
    pub fn report(&self) -> RunReport {
        let arms = self
            .arms
            .iter()
            .zip(&self.means)
            .enumerate()
            .map(|(index, (arm, &mu))| ArmRecord {
                index,
                pulls: arm.pulls(),
                empirical_mean: arm.empirical_mean(),
                bias: arm.bias(mu, self.bias),
            })
            .collect();

        RunReport {
            regret: self.trace.clone(),
            arms,
            exploited_arm: exploited_arm(&self.pulls()),
            total_reward: self.reward,
            best_arm_reward: self.best_arm_reward,
        }
    }

    fn pulls(&self) -> Vec<usize> {
        self.arms.iter().map(Arm::pulls).collect()
    }

    /// The designated-best arm
    pub fn best_arm(&self) -> usize {
        self.arms.len() - 1
    }

    pub fn arms(&self) -> &[Arm] {
        &self.arms
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of rounds played so far
    pub fn time(&self) -> usize {
        self.time
    }

    pub fn cumulative_reward(&self) -> f64 {
        self.reward
    }

    pub fn cumulative_regret(&self) -> f64 {
        self.regret
    }

    pub fn best_arm_reward(&self) -> f64 {
        self.best_arm_reward
    }
}
