// src/math/integrator.rs

/// 線形結合が定義された状態ベクトル
///
/// RK4 の段計算で必要になる `self + h * k` だけを要求する。
/// 実装はすべて値型で完結させ、ヒープ確保を行わないこと。
pub trait StateVector: Copy {
    /// `self + h * k` を成分ごとに計算した新しい状態を返す
    fn add_scaled(&self, h: f64, k: &Self) -> Self;
}

impl<const N: usize> StateVector for [f64; N] {
    fn add_scaled(&self, h: f64, k: &Self) -> Self {
        let mut out = *self;
        for (o, dk) in out.iter_mut().zip(k.iter()) {
            *o += h * dk;
        }
        out
    }
}

/// 常微分方程式系 dy/dt = f(t, y)
pub trait OdeSystem {
    /// 状態ベクトルの型
    type State: StateVector;

    /// 右辺 f(t, y) を評価する
    ///
    /// # 引数
    /// - `t`: 評価時刻（単調である必要はない）
    /// - `state`: 評価する状態
    ///
    /// # 戻り値
    /// - 状態の時間微分
    fn rhs(&self, t: f64, state: &Self::State) -> Self::State;
}

/// 古典的 4 次 Runge-Kutta 法による 1 ステップ積分
///
/// 刻み幅は固定で、誤差推定やステップの棄却は行わない。
///
/// # 引数
/// - `sys`: 積分する ODE 系
/// - `state`: 時刻 `t` における状態
/// - `t`: 現在時刻
/// - `dt`: 時間ステップ
///
/// # 戻り値
/// - 時刻 `t + dt` における状態
pub fn rk4_step<S: OdeSystem>(sys: &S, state: &S::State, t: f64, dt: f64) -> S::State {
    let half = 0.5 * dt;

    let k1 = sys.rhs(t, state);
    let k2 = sys.rhs(t + half, &state.add_scaled(half, &k1));
    let k3 = sys.rhs(t + half, &state.add_scaled(half, &k2));
    let k4 = sys.rhs(t + dt, &state.add_scaled(dt, &k3));

    // k1 + 2*k2 + 2*k3 + k4
    let slope = k1.add_scaled(2.0, &k2).add_scaled(2.0, &k3).add_scaled(1.0, &k4);
    state.add_scaled(dt / 6.0, &slope)
}
