use std::{error::Error, fs, path::Path};

use log::info;
use ucb_bias::{util::transpose, Bootstrap, MeanEstimator, RunReport, SimConfig, SimulationRun};

const SIM_RUNS: u64 = 500;
const HORIZON: usize = 150;
const NUM_ARMS: usize = 5;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = Path::new("demos/ucb1_bias/out");
    fs::create_dir_all(path)?;

    let base = SimConfig {
        num_arms: NUM_ARMS,
        horizon: HORIZON,
        ..Default::default()
    };
    let variants = [
        ("simple", base.clone()),
        (
            "bootstrap",
            SimConfig {
                estimator: MeanEstimator::Bootstrap(Bootstrap::default()),
                ..base
            },
        ),
    ];

    for (name, config) in variants {
        let mut reports = Vec::with_capacity(SIM_RUNS as usize);
        for i in 0..SIM_RUNS {
            reports.push(SimulationRun::new(&config, i)?.run());
            info!("[{name}] Simulation {} complete.", i + 1);
        }

        let found = reports.iter().filter(|r| r.found_best()).count();
        info!("[{name}] Best arm exploited in {found}/{SIM_RUNS} runs");

        write_regret(&path.join(format!("{name}_regret.csv")), &reports)?;
        write_arm_stats(&path.join(format!("{name}_bias.csv")), &reports, |r| {
            r.biases().iter().map(f64::to_string).collect()
        })?;
        write_arm_stats(&path.join(format!("{name}_plays.csv")), &reports, |r| {
            r.pulls().iter().map(usize::to_string).collect()
        })?;
    }

    Ok(())
}

/// One column per run, one row per round
fn write_regret(path: &Path, reports: &[RunReport]) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record((1..=reports.len()).map(|i| format!("Sim{i}")))?;

    let traces: Vec<Vec<f64>> = reports
        .iter()
        .map(|r| r.regret.iter().map(|&(_, regret)| regret).collect())
        .collect();
    for row in transpose(traces) {
        wtr.write_record(row.iter().map(f64::to_string))?;
    }

    wtr.flush()?;
    Ok(())
}

/// One row per run, one column per arm
fn write_arm_stats(
    path: &Path,
    reports: &[RunReport],
    row: impl Fn(&RunReport) -> Vec<String>,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record((1..=NUM_ARMS).map(|i| format!("Arm{i}")))?;
    for report in reports {
        wtr.write_record(row(report))?;
    }

    wtr.flush()?;
    Ok(())
}
