// src/simulation/framework.rs

use std::f64::consts::TAU;
use std::mem::size_of;

use tracing::{debug, info, warn};

use crate::math::integrator::{rk4_step, OdeSystem};
use crate::math::{extract_harmonic, HarmonicFit};
use crate::models::{DriveInputs, DusModel, DusParameters, State};
use crate::simulation::{Sample, SimulationError, TimeSeries};

/// 単一ビン射影が信頼できるとみなす最小の駆動周期数
const MIN_DRIVE_CYCLES: f64 = 10.0;

/// 抽出結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GyroResponse {
    pub sense: HarmonicFit,         // sense 軸の調和成分
    pub drive: HarmonicFit,         // drive 軸の調和成分
    pub scale_factor: Option<f64>,  // A / Ω_z (m per rad/s)。Ω_z = 0 のときは None
}

/// ステップ数 N = floor(T / dt)
///
/// 切り捨てのため、実際の積分時間は T よりわずかに短くなることがある。
pub fn step_count(duration: f64, dt: f64) -> usize {
    (duration / dt).floor() as usize
}

/// 静止状態（全成分ゼロ）
pub fn initialize_state() -> State {
    State::default()
}

/// 物理パラメータの検証
///
/// 質量ゼロなどの退化したパラメータは積分中に inf/NaN を生むため、
/// ステッパを呼ぶ前にここで弾く。
pub fn validate_parameters(params: &DusParameters) -> Result<(), SimulationError> {
    let fields = [
        ("m", params.m),
        ("k_d", params.k_d),
        ("c_d", params.c_d),
        ("k_s", params.k_s),
        ("c_s", params.c_s),
    ];
    for (name, value) in fields {
        if !(value.is_finite() && value > 0.0) {
            return Err(SimulationError::InvalidParameter { name, value });
        }
    }
    Ok(())
}

/// 実行条件の検証
pub fn validate_run(inputs: &DriveInputs, duration: f64, dt: f64) -> Result<(), SimulationError> {
    if !(dt.is_finite() && dt > 0.0) {
        return Err(SimulationError::InvalidParameter { name: "dt", value: dt });
    }
    if !(duration.is_finite() && duration >= 0.0) {
        return Err(SimulationError::InvalidParameter {
            name: "duration",
            value: duration,
        });
    }
    // 初期サンプルを含めた時系列がアドレス空間に収まること
    let max_samples = isize::MAX as usize / size_of::<Sample>();
    if (duration / dt).floor() >= max_samples as f64 {
        return Err(SimulationError::InvalidParameter {
            name: "duration",
            value: duration,
        });
    }
    let fields = [
        ("omega_z", inputs.omega_z),
        ("drive_amplitude", inputs.drive_amplitude),
        ("drive_frequency", inputs.drive_frequency),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(SimulationError::InvalidParameter { name, value });
        }
    }
    Ok(())
}

/// 静止状態から `steps` 回 RK4 で積分する
///
/// t = 0 の初期サンプルを含めて `steps + 1` 個のサンプルを返す。
/// 各ステップは直前の状態に依存するため逐次的に進める。
pub fn simulate_steps<S>(sys: &S, dt: f64, steps: usize) -> TimeSeries
where
    S: OdeSystem<State = State>,
{
    let mut series = TimeSeries::with_capacity(steps + 1);
    integrate_into(sys, dt, steps, &mut series);
    series
}

fn integrate_into<S>(sys: &S, dt: f64, steps: usize, series: &mut TimeSeries)
where
    S: OdeSystem<State = State>,
{
    let mut state = initialize_state();
    series.push(0.0, state);

    for i in 0..steps {
        let t = i as f64 * dt;
        state = rk4_step(sys, &state, t, dt);
        series.push((i + 1) as f64 * dt, state);
    }
}

/// シミュレーションの実行
///
/// # 引数
/// - `params`: 物理パラメータ
/// - `inputs`: 角速度・駆動力・駆動周波数
/// - `duration`: シミュレーション時間 T (s)
/// - `dt`: 時間ステップ (s)
///
/// # 戻り値
/// - floor(T/dt) + 1 個のサンプルからなる時系列
pub fn run_simulation(
    params: &DusParameters,
    inputs: &DriveInputs,
    duration: f64,
    dt: f64,
) -> Result<TimeSeries, SimulationError> {
    validate_parameters(params)?;
    validate_run(inputs, duration, dt)?;

    let steps = step_count(duration, dt);
    let cycles = steps as f64 * dt * inputs.drive_frequency / TAU;
    debug!(
        drive_frequency = inputs.drive_frequency,
        drive_q = params.drive_quality_factor(),
        sense_q = params.sense_quality_factor(),
        cycles,
        "derived quantities"
    );
    if steps == 0 {
        warn!(duration, dt, "duration is shorter than one step; only the initial sample is recorded");
    } else if cycles < MIN_DRIVE_CYCLES {
        warn!(cycles, "run spans few drive cycles; harmonic extraction will be biased by leakage");
    }

    info!(steps, dt, omega_z = inputs.omega_z, "starting simulation");
    let mut series = TimeSeries::default();
    if series.try_reserve(steps + 1).is_err() {
        return Err(SimulationError::InvalidParameter {
            name: "duration",
            value: duration,
        });
    }
    integrate_into(&DusModel::new(*params, *inputs), dt, steps, &mut series);
    info!(samples = series.len(), "simulation finished");

    Ok(series)
}

/// 時系列から sense 軸と drive 軸の調和成分を抽出する
pub fn analyze(series: &TimeSeries, inputs: &DriveInputs) -> Result<GyroResponse, SimulationError> {
    let sense = extract_harmonic(series.sense_signal(), inputs.drive_frequency)?;
    let drive = extract_harmonic(series.drive_signal(), inputs.drive_frequency)?;
    let scale_factor = (inputs.omega_z != 0.0).then(|| sense.amplitude / inputs.omega_z);

    info!(
        amplitude = sense.amplitude,
        phase = sense.phase,
        drive_amplitude = drive.amplitude,
        "harmonic extraction"
    );

    Ok(GyroResponse {
        sense,
        drive,
        scale_factor,
    })
}
