// src/simulation/error.rs

use thiserror::Error;

use crate::math::MathError;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("パラメータ {name} が不正です: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("CSV の間引き間隔は 1 以上である必要があります。")]
    InvalidSkip,
    #[error(transparent)]
    Math(#[from] MathError),
    #[error("入出力エラー: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML の解析に失敗しました: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
