// src/math/harmonic.rs

use crate::math::error::MathError;

/// 基準周波数における単一調和成分
///
/// 信号を `amplitude * cos(frequency * t + phase)` で近似する。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicFit {
    pub amplitude: f64, // 振幅
    pub phase: f64,     // 位相（rad, (-π, π]）
    pub frequency: f64, // 基準角周波数（rad/s）
}

impl HarmonicFit {
    /// 時刻 `t` における近似波形の値
    pub fn evaluate(&self, t: f64) -> f64 {
        self.amplitude * (self.frequency * t + self.phase).cos()
    }
}

/// 時系列から基準周波数の調和成分を抽出する（1 ビン DFT）
///
/// S = Σ y·sin(ωt), C = Σ y·cos(ωt) を全サンプルで単純加算し、
/// A = 2/M · √(S² + C²) とする（M はサンプル数）。
/// 窓掛け・トレンド除去・リーク補正は行わない。
///
/// # 引数
/// - `samples`: (t, y) の組の列
/// - `omega`: 基準角周波数（rad/s）
///
/// # 戻り値
/// - 抽出した調和成分
/// - サンプルが 1 つもない場合は `MathError::EmptySeries`
pub fn extract_harmonic<I>(samples: I, omega: f64) -> Result<HarmonicFit, MathError>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (count, sum_sin, sum_cos) = samples.into_iter().fold(
        (0usize, 0.0_f64, 0.0_f64),
        |(count, sum_sin, sum_cos), (t, y)| {
            let (sin, cos) = (omega * t).sin_cos();
            (count + 1, sum_sin + y * sin, sum_cos + y * cos)
        },
    );

    if count == 0 {
        return Err(MathError::EmptySeries);
    }

    let k = 2.0 / count as f64;
    Ok(HarmonicFit {
        amplitude: k * sum_sin.hypot(sum_cos),
        // y ≈ A cos(ωt + φ) のとき S ∝ -sin φ, C ∝ cos φ
        phase: (-sum_sin).atan2(sum_cos),
        frequency: omega,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    /// 整数周期分を等間隔にサンプリングした合成信号
    fn synthetic(amplitude: f64, phase: f64, omega: f64) -> Vec<(f64, f64)> {
        let per_cycle = 64;
        let cycles = 20;
        let dt = 2.0 * PI / omega / per_cycle as f64;
        (0..per_cycle * cycles)
            .map(|i| {
                let t = i as f64 * dt;
                (t, amplitude * (omega * t + phase).cos())
            })
            .collect()
    }

    #[test]
    fn test_recovers_amplitude_and_phase() {
        let omega = 2.0 * PI * 50.0;
        let fit = extract_harmonic(synthetic(3.0e-8, 0.7, omega), omega).unwrap();

        assert_relative_eq!(fit.amplitude, 3.0e-8, max_relative = 1e-9);
        assert_relative_eq!(fit.phase, 0.7, epsilon = 1e-9);
        assert_eq!(fit.frequency, omega);
    }

    #[test]
    fn test_recovers_negative_phase() {
        let omega = 7338.0;
        let fit = extract_harmonic(synthetic(1.5, -2.5, omega), omega).unwrap();

        assert_relative_eq!(fit.amplitude, 1.5, max_relative = 1e-9);
        assert_relative_eq!(fit.phase, -2.5, epsilon = 1e-9);
    }

    /// sin(ωt) = cos(ωt - π/2)
    #[test]
    fn test_pure_sine_has_quarter_period_lag() {
        let omega = 100.0;
        let samples = synthetic(1.0, -PI / 2.0, omega);
        let fit = extract_harmonic(samples.iter().copied(), omega).unwrap();

        assert_relative_eq!(fit.phase, -PI / 2.0, epsilon = 1e-9);
        for &(t, y) in samples.iter().step_by(7) {
            assert!((fit.evaluate(t) - y).abs() < 1e-9);
        }
    }

    /// 正規化係数はサンプル数のみで決まり、窓補正はかからない
    #[test]
    fn test_single_sample_uses_raw_projection() {
        let fit = extract_harmonic([(0.0, 1.0)], 10.0).unwrap();

        assert_eq!(fit.amplitude, 2.0);
        assert_eq!(fit.phase, 0.0);
    }

    #[test]
    fn test_zero_signal() {
        let omega = 10.0;
        let samples = (0..100).map(|i| (i as f64 * 0.01, 0.0));
        let fit = extract_harmonic(samples, omega).unwrap();

        assert_eq!(fit.amplitude, 0.0);
        assert_eq!(fit.evaluate(0.3), 0.0);
    }

    #[test]
    fn test_empty_series() {
        let result = extract_harmonic(std::iter::empty::<(f64, f64)>(), 1.0);

        assert_eq!(result, Err(MathError::EmptySeries));
    }
}
