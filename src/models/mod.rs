// src/models/mod.rs

pub mod dus;

pub use dus::{rhs, rk4, DriveInputs, DusModel, DusParameters, State};
