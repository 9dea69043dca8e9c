// src/math/error.rs

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MathError {
    #[error("時系列が空のため調和成分を抽出できません。")]
    EmptySeries,
}
