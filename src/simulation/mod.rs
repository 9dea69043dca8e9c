// src/simulation/mod.rs

pub mod csv;
pub mod error;
pub mod framework;
pub mod load_parameters;

pub use error::SimulationError;

use std::collections::TryReserveError;

use crate::models::State;

/// ある時刻の状態のスナップショット
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub t: f64,
    pub state: State,
}

/// 積分ループが生成する時系列（追記のみ）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    samples: Vec<Sample>,
}

impl TimeSeries {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// 追加で `additional` 個のサンプル領域を確保する。確保できなければエラー
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.samples.try_reserve(additional)
    }

    pub fn push(&mut self, t: f64, state: State) {
        self.samples.push(Sample { t, state });
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// 初期サンプルを除いた積分ステップ数
    pub fn steps(&self) -> usize {
        self.samples.len().saturating_sub(1)
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// sense 軸の (t, y) 列
    pub fn sense_signal(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        sense_signal(&self.samples)
    }

    /// drive 軸の (t, x) 列
    pub fn drive_signal(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        drive_signal(&self.samples)
    }

    /// 時刻 `from` 以降のサンプル
    pub fn tail(&self, from: f64) -> &[Sample] {
        let start = self.samples.partition_point(|s| s.t < from);
        &self.samples[start..]
    }
}

pub fn sense_signal(samples: &[Sample]) -> impl Iterator<Item = (f64, f64)> + '_ {
    samples.iter().map(|s| (s.t, s.state.y))
}

pub fn drive_signal(samples: &[Sample]) -> impl Iterator<Item = (f64, f64)> + '_ {
    samples.iter().map(|s| (s.t, s.state.x))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> TimeSeries {
        let mut ts = TimeSeries::with_capacity(4);
        for i in 0..4 {
            let v = i as f64;
            ts.push(
                v * 0.5,
                State {
                    x: v,
                    vx: 0.0,
                    y: -v,
                    vy: 0.0,
                },
            );
        }
        ts
    }

    #[test]
    fn test_signals() {
        let ts = series();

        assert_eq!(ts.len(), 4);
        assert_eq!(ts.steps(), 3);
        assert_eq!(
            ts.sense_signal().collect::<Vec<_>>(),
            vec![(0.0, 0.0), (0.5, -1.0), (1.0, -2.0), (1.5, -3.0)]
        );
        assert_eq!(ts.drive_signal().nth(2), Some((1.0, 2.0)));
    }

    #[test]
    fn test_tail() {
        let ts = series();

        assert_eq!(ts.tail(0.9).len(), 2);
        assert_eq!(ts.tail(1.0)[0].t, 1.0);
        assert!(ts.tail(2.0).is_empty());
        assert_eq!(ts.tail(-1.0).len(), 4);
    }

    #[test]
    fn test_empty() {
        let ts = TimeSeries::default();

        assert!(ts.is_empty());
        assert_eq!(ts.steps(), 0);
        assert!(ts.last().is_none());
    }
}
