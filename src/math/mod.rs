// src/math/mod.rs

pub mod error;
pub mod harmonic;
pub mod integrator;

pub use error::MathError;
pub use harmonic::{extract_harmonic, HarmonicFit};
pub use integrator::{rk4_step, OdeSystem, StateVector};
