// src/simulation/load_parameters.rs

use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::from_reader;

use crate::config::{DusParametersConfig, Scenario};
use crate::simulation::SimulationError;

/// YAML ファイルの読み込み共通関数
pub fn parse_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, SimulationError> {
    let file = File::open(path)?;
    let data: T = from_reader(file)?;
    Ok(data)
}

/// DUS パラメータの読み込み
pub fn load_dus_parameters(path: &Path) -> Result<DusParametersConfig, SimulationError> {
    parse_yaml(path)
}

/// シナリオの読み込み
pub fn load_scenario(path: &Path) -> Result<Scenario, SimulationError> {
    parse_yaml(path)
}
