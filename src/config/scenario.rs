// src/config/scenario.rs

use std::path::PathBuf;

use serde::Deserialize;

/// 1 回の実行条件
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Scenario {
    pub omega_z: f64,         // z 軸まわりの角速度 (rad/s)
    pub duration: f64,        // シミュレーション時間 (s)
    pub dt: f64,              // 時間ステップ (s)
    pub drive_amplitude: f64, // 静電駆動力の振幅 (N)
    pub csv_skip: usize,      // CSV に書き出すサンプルの間引き間隔
    pub output: PathBuf,      // CSV 出力先
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            omega_z: 100.0,
            duration: 0.01,
            dt: 1e-6,
            drive_amplitude: 1e-6,
            csv_skip: 10,
            output: PathBuf::from("dus_output.csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_yaml() {
        let yaml = "omega_z: 250.0\nduration: 0.02\ncsv_skip: 5\noutput: out/run.csv\n";
        let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(scenario.omega_z, 250.0);
        assert_eq!(scenario.duration, 0.02);
        assert_eq!(scenario.csv_skip, 5);
        assert_eq!(scenario.output, PathBuf::from("out/run.csv"));
        assert_eq!(scenario.dt, 1e-6);
        assert_eq!(scenario.drive_amplitude, 1e-6);
    }
}
