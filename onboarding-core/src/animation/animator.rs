//! # Animator 模块
//!
//! 宿主补间原语的抽象。
//!
//! 过渡控制器只通过 [`Animator`] 驱动进度值，不关心时间从哪里来：
//! 真实 UI 中由帧循环调用 `advance`，测试中直接传入固定的 `dt`。

use std::time::Duration;

use super::tween::{AnimationHandle, Tween};
use super::EasingFunction;

/// 补间驱动器
///
/// 任一时刻最多只有一个补间在运行；再次 `start` 会直接替换旧补间。
pub trait Animator {
    /// 启动补间，返回新句柄
    fn start(&mut self, from: f32, to: f32, duration: Duration) -> AnimationHandle;

    /// 推进时间并返回当前值
    ///
    /// 没有正在运行的补间时返回最后一次的值。
    fn advance(&mut self, dt: Duration) -> f32;

    /// 取消指定补间
    ///
    /// 句柄已被替换或补间已结束时返回 `false`。
    fn cancel(&mut self, handle: AnimationHandle) -> bool;

    /// 当前值
    fn value(&self) -> f32;

    /// 是否有补间正在运行
    fn is_running(&self) -> bool;
}

/// 基于时间轴的默认实现
#[derive(Debug, Clone)]
pub struct TimelineAnimator {
    easing: EasingFunction,
    current: Option<Tween>,
    /// 空闲时保持的值
    resting_value: f32,
    next_id: u64,
}

impl TimelineAnimator {
    pub fn new(easing: EasingFunction) -> Self {
        Self {
            easing,
            current: None,
            resting_value: 1.0,
            next_id: 1,
        }
    }

    pub fn easing(&self) -> EasingFunction {
        self.easing
    }

    /// 当前补间
    pub fn current(&self) -> Option<&Tween> {
        self.current.as_ref()
    }

    fn next_handle(&mut self) -> AnimationHandle {
        let handle = AnimationHandle(self.next_id);
        self.next_id += 1;
        handle
    }
}

impl Default for TimelineAnimator {
    fn default() -> Self {
        Self::new(EasingFunction::default())
    }
}

impl Animator for TimelineAnimator {
    fn start(&mut self, from: f32, to: f32, duration: Duration) -> AnimationHandle {
        let handle = self.next_handle();
        let tween = Tween::new(handle, from, to, duration).with_easing(self.easing);
        self.resting_value = tween.value();
        self.current = Some(tween);
        handle
    }

    fn advance(&mut self, dt: Duration) -> f32 {
        if let Some(tween) = self.current.as_mut() {
            tween.advance(dt);
            self.resting_value = tween.value();
            if tween.state.is_finished() {
                self.current = None;
            }
        }
        self.resting_value
    }

    fn cancel(&mut self, handle: AnimationHandle) -> bool {
        match self.current.as_mut() {
            Some(tween) if tween.handle == handle && tween.is_running() => {
                tween.cancel();
                self.resting_value = tween.value();
                self.current = None;
                true
            }
            _ => false,
        }
    }

    fn value(&self) -> f32 {
        self.current
            .as_ref()
            .map(Tween::value)
            .unwrap_or(self.resting_value)
    }

    fn is_running(&self) -> bool {
        self.current.as_ref().is_some_and(Tween::is_running)
    }
}
