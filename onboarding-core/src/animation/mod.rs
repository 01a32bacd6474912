//! # Animation 模块
//!
//! 背景色过渡使用的补间系统。
//!
//! ## 核心设计理念
//!
//! 动画只负责 **时间轴管理**：
//! - 知道进度值从 A 到 B 需要在 duration 内变化
//! - 由调用方按帧推进（`advance(dt)`），不依赖真实时钟
//! - 不关心值被用来做什么（颜色插值由过渡控制器完成）
//!
//! ## 核心概念
//!
//! - `Animator`: 补间驱动器 trait，宿主可替换
//! - `TimelineAnimator`: 默认实现
//! - `Tween`: 单个补间实例
//! - `EasingFunction`: 缓动函数
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! let mut animator = TimelineAnimator::new(EasingFunction::Linear);
//! animator.start(0.0, 1.0, Duration::from_millis(500));
//!
//! // 每帧
//! let progress = animator.advance(Duration::from_millis(16));
//! ```

mod animator;
mod easing;
mod tween;

pub use animator::{Animator, TimelineAnimator};
pub use easing::EasingFunction;
pub use tween::{AnimationHandle, Tween, TweenState};
