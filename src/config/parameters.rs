// src/config/parameters.rs

use serde::Deserialize;

use crate::models::DusParameters;

/// YAML から読み込む DUS パラメータ。省略した項目は標準値になる。
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DusParametersConfig {
    pub m: f64,   // 質量 (kg)
    pub k_d: f64, // drive 軸ばね定数 (N/m)
    pub c_d: f64, // drive 軸減衰係数 (N·s/m)
    pub k_s: f64, // sense 軸ばね定数 (N/m)
    pub c_s: f64, // sense 軸減衰係数 (N·s/m)
}

impl Default for DusParametersConfig {
    fn default() -> Self {
        let p = DusParameters::default();
        Self {
            m: p.m,
            k_d: p.k_d,
            c_d: p.c_d,
            k_s: p.k_s,
            c_s: p.c_s,
        }
    }
}

impl From<DusParametersConfig> for DusParameters {
    fn from(c: DusParametersConfig) -> Self {
        DusParameters {
            m: c.m,
            k_d: c.k_d,
            c_d: c.c_d,
            k_s: c.k_s,
            c_s: c.c_s,
        }
    }
}
