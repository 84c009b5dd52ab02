use statrs::statistics::Statistics;
use ucb_bias::{
    sim::Phase, BiasMeasure, Bootstrap, MeanEstimator, RegretBaseline, SimConfig, SimulationRun,
};

fn config(horizon: usize) -> SimConfig {
    SimConfig {
        horizon,
        ..Default::default()
    }
}

#[test]
fn five_arms_ten_rounds() {
    let mut run = SimulationRun::new(&config(10), 2024).unwrap();
    for _ in 0..5 {
        run.step();
    }
    assert_eq!(run.phase(), Phase::Steady, "warm-up is over");
    assert!(
        run.arms().iter().all(|arm| arm.pulls() == 1),
        "each arm played once during warm-up"
    );

    while run.phase() != Phase::Done {
        let best_pulls = run.arms()[run.best_arm()].pulls();
        let regret = run.cumulative_regret();
        run.step();

        assert!(
            (run.cumulative_regret() - (run.best_arm_reward() - run.cumulative_reward())).abs()
                < 1e-9,
            "regret is baseline minus collected reward"
        );
        if run.arms()[run.best_arm()].pulls() > best_pulls {
            assert!(
                (run.cumulative_regret() - regret).abs() < 1e-9,
                "playing the best arm leaves regret unchanged"
            );
        }
    }

    let report = run.run();
    assert_eq!(report.regret.len(), 10);
    assert_eq!(report.pulls().iter().sum::<usize>(), 10);
}

#[test]
fn best_arm_is_played_most_on_average() {
    const RUNS: u64 = 400;
    let mut pulls = vec![0usize; 5];
    for seed in 0..RUNS {
        let report = SimulationRun::new(&config(10), seed).unwrap().run();
        for (total, n) in pulls.iter_mut().zip(report.pulls()) {
            *total += n;
        }
    }
    let best = pulls[4];
    assert!(
        pulls[..4].iter().all(|&n| n <= best),
        "best arm leads in pulls: {pulls:?}"
    );
}

#[test]
fn regret_is_positive_on_average() {
    for regret in [RegretBaseline::Counterfactual, RegretBaseline::Expected] {
        let config = SimConfig {
            horizon: 100,
            regret,
            ..Default::default()
        };
        let finals = (0..200)
            .map(|seed| SimulationRun::new(&config, seed).unwrap().run().final_regret())
            .collect::<Vec<_>>();
        assert!(
            finals.iter().mean() > 0.0,
            "{regret:?} regret is positive on average"
        );
    }
}

#[test]
fn regret_is_non_negative_every_round_on_average() {
    const RUNS: u64 = 300;
    const HORIZON: usize = 100;
    for regret in [RegretBaseline::Counterfactual, RegretBaseline::Expected] {
        let config = SimConfig {
            horizon: HORIZON,
            regret,
            ..Default::default()
        };
        let mut totals = vec![0.0; HORIZON];
        for seed in 0..RUNS {
            let report = SimulationRun::new(&config, seed).unwrap().run();
            for (total, &(_, r)) in totals.iter_mut().zip(&report.regret) {
                *total += r;
            }
        }
        for (round, total) in totals.iter().enumerate() {
            let mean = total / RUNS as f64;
            assert!(
                mean >= 0.0,
                "{regret:?} mean regret {mean} at round {} is negative",
                round + 1
            );
        }
    }
}

#[test]
fn sub_optimal_means_are_biased_downward() {
    let config = SimConfig {
        horizon: 60,
        ..Default::default()
    };
    let biases = (0..400)
        .flat_map(|seed| {
            let report = SimulationRun::new(&config, seed).unwrap().run();
            report.biases().into_iter().take(4)
        })
        .collect::<Vec<_>>();
    assert!(
        biases.iter().mean() < 0.0,
        "UCB1 underestimates the arms it abandons"
    );
}

#[test]
fn exploits_best_arm_over_long_horizon() {
    let found = (0..50)
        .filter(|&seed| {
            SimulationRun::new(&config(500), seed)
                .unwrap()
                .run()
                .found_best()
        })
        .count();
    assert!(found >= 45, "best arm exploited in {found}/50 runs");
}

#[test]
fn bootstrap_variant_runs() {
    let config = SimConfig {
        horizon: 40,
        best_std_dev: 3.0,
        estimator: MeanEstimator::Bootstrap(Bootstrap::default()),
        bias: BiasMeasure::Absolute,
        ..Default::default()
    };
    let report = SimulationRun::new(&config, 9).unwrap().run();
    assert_eq!(report.regret.len(), 40);
    assert!(
        report.arms.iter().all(|arm| arm.bias >= 0.0 && arm.pulls >= 1),
        "absolute biases are non-negative and every arm was played"
    );
}
