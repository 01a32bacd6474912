//! # Easing 模块
//!
//! 缓动曲线，用于背景色过渡的时间插值。所有曲线在 0.0 - 1.0 上单调不减。

use serde::{Deserialize, Serialize};

/// 缓动函数类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingFunction {
    /// 线性（匀速）
    Linear,
    /// 缓入（二次）
    EaseIn,
    /// 缓出（二次）
    EaseOut,
    /// 缓入缓出
    ///
    /// 与移动端宿主默认的 timing 曲线一致：`inOut(cubic-bezier(0.42, 0, 1, 1))`。
    #[default]
    EaseInOut,
    /// CSS `ease`：`cubic-bezier(0.25, 0.1, 0.25, 1)`
    Ease,
}

impl EasingFunction {
    /// 计算缓动值
    ///
    /// # 参数
    /// - `t`: 时间进度 (0.0 - 1.0)，超出范围会被限制
    ///
    /// # 返回
    /// - 缓动后的进度值 (0.0 - 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t,
            EasingFunction::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            EasingFunction::EaseInOut => {
                let ease = |x: f32| CubicBezier::new(0.42, 0.0, 1.0, 1.0).solve(x);
                if t < 0.5 {
                    ease(t * 2.0) / 2.0
                } else {
                    1.0 - ease((1.0 - t) * 2.0) / 2.0
                }
            }
            EasingFunction::Ease => CubicBezier::new(0.25, 0.1, 0.25, 1.0).solve(t),
        }
    }
}

/// 以 (0,0) 和 (1,1) 为端点的三次贝塞尔曲线
#[derive(Debug, Clone, Copy)]
struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    const NEWTON_ITERATIONS: usize = 8;
    const EPSILON: f32 = 1e-6;

    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f32, a2: f32, t: f32) -> f32 {
        ((1.0 - 3.0 * a2 + 3.0 * a1) * t + (3.0 * a2 - 6.0 * a1)) * t * t + 3.0 * a1 * t
    }

    fn slope(a1: f32, a2: f32, t: f32) -> f32 {
        3.0 * (1.0 - 3.0 * a2 + 3.0 * a1) * t * t + 2.0 * (3.0 * a2 - 6.0 * a1) * t + 3.0 * a1
    }

    /// 由 x 反解参数 t（牛顿迭代，失败时退化为二分）
    fn t_for_x(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..Self::NEWTON_ITERATIONS {
            let dx = Self::sample(self.x1, self.x2, t) - x;
            if dx.abs() < Self::EPSILON {
                return t;
            }
            let d = Self::slope(self.x1, self.x2, t);
            if d.abs() < Self::EPSILON {
                break;
            }
            t -= dx / d;
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = x;
        while hi - lo > Self::EPSILON {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < Self::EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    fn solve(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.t_for_x(x)).clamp(0.0, 1.0)
    }
}
