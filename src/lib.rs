// src/lib.rs

//! 二軸振動型角速度センサ（DUS）のシミュレータ
//!
//! drive 軸と sense 軸の連成運動を固定刻みの RK4 で積分し、
//! sense 軸信号から駆動周波数の調和成分（振幅・位相）を抽出する。

pub mod config;
pub mod math;
pub mod models;
pub mod simulation;

pub use math::{extract_harmonic, HarmonicFit, MathError};
pub use models::{rhs, rk4, DriveInputs, DusModel, DusParameters, State};
pub use simulation::framework::{analyze, run_simulation, step_count, GyroResponse};
pub use simulation::{Sample, SimulationError, TimeSeries};
