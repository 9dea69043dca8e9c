// src/models/dus.rs

use crate::math::integrator::{rk4_step, OdeSystem, StateVector};

/// 二軸振動型角速度センサ（DUS）の物理パラメータ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DusParameters {
    pub m: f64,   // 可動フレームの質量 (kg)
    pub k_d: f64, // drive 軸のばね定数 (N/m)
    pub c_d: f64, // drive 軸の減衰係数 (N·s/m)
    pub k_s: f64, // sense 軸のばね定数 (N/m)
    pub c_s: f64, // sense 軸の減衰係数 (N·s/m)
}

impl Default for DusParameters {
    fn default() -> Self {
        Self {
            m: 6.5e-6,
            k_d: 350.0,
            c_d: 0.002,
            k_s: 350.0,
            c_s: 0.002,
        }
    }
}

impl DusParameters {
    /// drive 軸の固有角周波数 √(k_d/m) (rad/s)
    pub fn drive_natural_frequency(&self) -> f64 {
        (self.k_d / self.m).sqrt()
    }

    /// sense 軸の固有角周波数 √(k_s/m) (rad/s)
    pub fn sense_natural_frequency(&self) -> f64 {
        (self.k_s / self.m).sqrt()
    }

    /// drive 軸の Q 値 √(k_d·m)/c_d
    pub fn drive_quality_factor(&self) -> f64 {
        (self.k_d * self.m).sqrt() / self.c_d
    }

    /// sense 軸の Q 値 √(k_s·m)/c_s
    pub fn sense_quality_factor(&self) -> f64 {
        (self.k_s * self.m).sqrt() / self.c_s
    }
}

/// 状態 {x, ẋ, y, ẏ}
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct State {
    pub x: f64,  // drive 軸の変位 (m)
    pub vx: f64, // drive 軸の速度 (m/s)
    pub y: f64,  // sense 軸の変位 (m)
    pub vy: f64, // sense 軸の速度 (m/s)
}

impl StateVector for State {
    fn add_scaled(&self, h: f64, k: &Self) -> Self {
        State {
            x: self.x + h * k.x,
            vx: self.vx + h * k.vx,
            y: self.y + h * k.y,
            vy: self.vy + h * k.vy,
        }
    }
}

/// 1 回のシミュレーション中は一定の入力
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveInputs {
    pub omega_z: f64,         // z 軸まわりの角速度 Ω_z (rad/s)
    pub drive_amplitude: f64, // 静電駆動力の振幅 F_d (N)
    pub drive_frequency: f64, // 駆動角周波数 ω_d (rad/s)
}

impl DriveInputs {
    /// drive 軸の固有角周波数で共振駆動する入力を作る
    pub fn resonant(params: &DusParameters, omega_z: f64, drive_amplitude: f64) -> Self {
        Self {
            omega_z,
            drive_amplitude,
            drive_frequency: params.drive_natural_frequency(),
        }
    }
}

/// 運動方程式の右辺
///
/// ```text
/// m·ẍ + c_d·ẋ + k_d·x = F_d·sin(ω_d·t)
/// m·ÿ + c_s·ẏ + k_s·y = 2·m·Ω_z·ẋ
/// ```
///
/// 質量がゼロの場合は inf/NaN がそのまま返る。検証は呼び出し側で行うこと。
///
/// # 引数
/// - `p`: 物理パラメータ
/// - `s`: 現在の状態
/// - `omega_z`: 角速度 Ω_z
/// - `fd`: 駆動力振幅 F_d
/// - `omega_d`: 駆動角周波数 ω_d
/// - `t`: 時刻
///
/// # 戻り値
/// - 状態の時間微分 (ẋ, ẍ, ẏ, ÿ)
pub fn rhs(p: &DusParameters, s: &State, omega_z: f64, fd: f64, omega_d: f64, t: f64) -> State {
    State {
        x: s.vx,
        vx: (fd * (omega_d * t).sin() - p.c_d * s.vx - p.k_d * s.x) / p.m,
        y: s.vy,
        // コリオリ力 2·m·Ω_z·ẋ
        vy: (2.0 * p.m * omega_z * s.vx - p.c_s * s.vy - p.k_s * s.y) / p.m,
    }
}

/// RK4 による 1 ステップ
///
/// # 戻り値
/// - 時刻 `t + dt` における状態
#[allow(clippy::too_many_arguments)]
pub fn rk4(
    p: &DusParameters,
    s: &State,
    omega_z: f64,
    fd: f64,
    omega_d: f64,
    t: f64,
    dt: f64,
) -> State {
    let model = DusModel::new(
        *p,
        DriveInputs {
            omega_z,
            drive_amplitude: fd,
            drive_frequency: omega_d,
        },
    );
    rk4_step(&model, s, t, dt)
}

/// パラメータと入力を束ねた ODE 系
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DusModel {
    pub params: DusParameters,
    pub inputs: DriveInputs,
}

impl DusModel {
    pub fn new(params: DusParameters, inputs: DriveInputs) -> Self {
        Self { params, inputs }
    }
}

impl OdeSystem for DusModel {
    type State = State;

    fn rhs(&self, t: f64, state: &State) -> State {
        rhs(
            &self.params,
            state,
            self.inputs.omega_z,
            self.inputs.drive_amplitude,
            self.inputs.drive_frequency,
            t,
        )
    }
}
