//! # Tween 模块
//!
//! 单个补间实例：管理一个 f32 值从 `from` 到 `to` 在 `duration` 内的变化。

use std::time::Duration;

use super::EasingFunction;

/// 动画句柄
///
/// 每次 `Animator::start` 都会分配新的句柄，旧句柄随之失效。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(pub u64);

/// 补间状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TweenState {
    /// 正在播放
    #[default]
    Running,
    /// 已完成
    Completed,
    /// 已取消（值停留在取消时刻）
    Cancelled,
}

impl TweenState {
    /// 是否已结束
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// 补间实例
#[derive(Debug, Clone)]
pub struct Tween {
    pub handle: AnimationHandle,
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub easing: EasingFunction,
    pub state: TweenState,
    /// 当前进度（0.0 - 1.0，已应用缓动）
    progress: f32,
    elapsed: Duration,
}

impl Tween {
    /// 创建补间；时长为零时直接处于完成状态
    pub fn new(handle: AnimationHandle, from: f32, to: f32, duration: Duration) -> Self {
        let (state, progress) = if duration.is_zero() {
            (TweenState::Completed, 1.0)
        } else {
            (TweenState::Running, 0.0)
        };

        Self {
            handle,
            from,
            to,
            duration,
            easing: EasingFunction::default(),
            state,
            progress,
            elapsed: Duration::ZERO,
        }
    }

    /// 设置缓动函数
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// 推进时间
    ///
    /// # 返回
    /// - `true`: 补间仍在进行中
    /// - `false`: 补间已结束
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.state.is_finished() {
            return false;
        }

        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.progress = 1.0;
            self.state = TweenState::Completed;
            return false;
        }

        let raw = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.progress = self.easing.apply(raw);
        true
    }

    /// 取消，保留当前值
    pub fn cancel(&mut self) {
        if !self.state.is_finished() {
            self.state = TweenState::Cancelled;
        }
    }

    /// 获取当前值
    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.progress
    }

    /// 当前进度（已应用缓动）
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.state == TweenState::Running
    }
}
