// src/main.rs

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use dussim::config::{DusParametersConfig, Scenario};
use dussim::simulation::csv::{export_csv, validate_skip};
use dussim::simulation::load_parameters::{load_dus_parameters, load_scenario};
use dussim::{analyze, run_simulation, DriveInputs, DusParameters};

#[derive(Debug, Parser)]
#[command(author, version, about = "Two-axis vibratory rate gyroscope (DUS) simulator")]
struct Cli {
    /// DUS parameter file (YAML)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Scenario file (YAML)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Frame mass [kg]
    #[arg(long)]
    mass: Option<f64>,

    /// Drive-axis stiffness [N/m]
    #[arg(long)]
    k_drive: Option<f64>,

    /// Drive-axis damping [N·s/m]
    #[arg(long)]
    c_drive: Option<f64>,

    /// Sense-axis stiffness [N/m]
    #[arg(long)]
    k_sense: Option<f64>,

    /// Sense-axis damping [N·s/m]
    #[arg(long)]
    c_sense: Option<f64>,

    /// Angular rate around z [rad/s]
    #[arg(long, allow_negative_numbers = true)]
    omega_z: Option<f64>,

    /// Simulated duration [s]
    #[arg(long)]
    duration: Option<f64>,

    /// Integration step [s]
    #[arg(long)]
    dt: Option<f64>,

    /// Electrostatic drive force amplitude [N]
    #[arg(long)]
    drive_amplitude: Option<f64>,

    /// Write every n-th sample to the CSV
    #[arg(long)]
    skip: Option<usize>,

    /// CSV output path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    // 設定とシナリオの読み込み
    let mut params_config = match &cli.params {
        Some(path) => load_dus_parameters(path)?,
        None => DusParametersConfig::default(),
    };
    let mut scenario = match &cli.scenario {
        Some(path) => load_scenario(path)?,
        None => Scenario::default(),
    };

    // コマンドライン引数による上書き
    if let Some(v) = cli.mass {
        params_config.m = v;
    }
    if let Some(v) = cli.k_drive {
        params_config.k_d = v;
    }
    if let Some(v) = cli.c_drive {
        params_config.c_d = v;
    }
    if let Some(v) = cli.k_sense {
        params_config.k_s = v;
    }
    if let Some(v) = cli.c_sense {
        params_config.c_s = v;
    }
    if let Some(v) = cli.omega_z {
        scenario.omega_z = v;
    }
    if let Some(v) = cli.duration {
        scenario.duration = v;
    }
    if let Some(v) = cli.dt {
        scenario.dt = v;
    }
    if let Some(v) = cli.drive_amplitude {
        scenario.drive_amplitude = v;
    }
    if let Some(v) = cli.skip {
        scenario.csv_skip = v;
    }
    if let Some(v) = cli.output {
        scenario.output = v;
    }

    // 出力条件は積分の前に検証する
    validate_skip(scenario.csv_skip)?;

    let params = DusParameters::from(params_config);
    let inputs = DriveInputs::resonant(&params, scenario.omega_z, scenario.drive_amplitude);

    let series = run_simulation(&params, &inputs, scenario.duration, scenario.dt)?;
    let response = analyze(&series, &inputs)?;
    export_csv(&scenario.output, &series, &response.sense, scenario.csv_skip)?;

    println!(
        "Amplitude A={:.6e} m, phi={:.6} rad. Saved to {}",
        response.sense.amplitude,
        response.sense.phase,
        scenario.output.display()
    );
    println!(
        "Drive amplitude {:.6e} m at {:.3} rad/s ({} samples)",
        response.drive.amplitude,
        inputs.drive_frequency,
        series.len()
    );
    if let Some(scale) = response.scale_factor {
        println!("Scale factor {:.6e} m/(rad/s)", scale);
    }

    Ok(())
}
