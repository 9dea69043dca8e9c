// src/config/mod.rs

pub mod parameters;
pub mod scenario;

pub use parameters::DusParametersConfig;
pub use scenario::Scenario;
