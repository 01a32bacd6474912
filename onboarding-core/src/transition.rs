//! # Transition 模块
//!
//! 过渡控制器：跟踪当前可见页，驱动上一页与当前页背景色之间的交叉淡化。
//!
//! 同一时刻只混合两种颜色。过渡未完成时再次翻页，会以新的端点从进度 0
//! 重新开始，不排队，也不与更早的页面混合。

use std::time::Duration;

use tracing::{debug, warn};

use crate::animation::{AnimationHandle, Animator, EasingFunction, TimelineAnimator};
use crate::color::Color;
use crate::error::{OnboardingError, OnboardingResult};
use crate::host::PagingList;
use crate::state::{PaginationState, TransitionPhase};

/// 默认过渡时长（毫秒）
pub const DEFAULT_TRANSITION_DURATION_MS: u64 = 500;

/// 页索引变化回调
pub type PageIndexCallback = Box<dyn FnMut(usize)>;

/// 过渡控制器
pub struct TransitionController {
    /// 各页背景色，按页序排列
    colors: Vec<Color>,
    duration: Duration,
    animator: Box<dyn Animator>,
    state: PaginationState,
    /// 当前过渡动画
    animation: Option<AnimationHandle>,
    on_page_index_changed: Option<PageIndexCallback>,
}

impl TransitionController {
    /// 使用默认时间轴动画器创建控制器
    pub fn new(colors: Vec<Color>, duration: Duration) -> OnboardingResult<Self> {
        Self::with_animator(
            colors,
            duration,
            Box::new(TimelineAnimator::new(EasingFunction::default())),
        )
    }

    /// 使用自定义动画器创建控制器
    ///
    /// 页面列表为空时返回 [`OnboardingError::NoPages`]。
    pub fn with_animator(
        colors: Vec<Color>,
        duration: Duration,
        animator: Box<dyn Animator>,
    ) -> OnboardingResult<Self> {
        if colors.is_empty() {
            return Err(OnboardingError::NoPages);
        }

        Ok(Self {
            colors,
            duration,
            animator,
            state: PaginationState::initial(),
            animation: None,
            on_page_index_changed: None,
        })
    }

    /// 注册页索引变化回调
    pub fn set_page_index_callback(&mut self, callback: impl FnMut(usize) + 'static) {
        self.on_page_index_changed = Some(Box::new(callback));
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn num_pages(&self) -> usize {
        self.colors.len()
    }

    pub fn current_page_index(&self) -> usize {
        self.state.current_page_index
    }

    pub fn previous_page_index(&self) -> Option<usize> {
        self.state.previous_page_index
    }

    pub fn progress(&self) -> f32 {
        self.state.transition_progress
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn phase(&self) -> TransitionPhase {
        self.state.phase()
    }

    pub fn is_last_page(&self) -> bool {
        self.state.is_last_page(self.num_pages())
    }

    /// 可见页变化
    ///
    /// 以下情况忽略并返回 `false`：
    /// - 宿主没有报告已停稳的条目（`None`）
    /// - 索引与当前页相同（惯性滚动来回抖动时常见）
    /// - 索引越界
    ///
    /// 否则更新状态、通知回调、重新开始过渡动画并返回 `true`。
    pub fn on_visible_page_changed(&mut self, new_index: Option<usize>) -> bool {
        let Some(new_index) = new_index else {
            return false;
        };
        if new_index == self.state.current_page_index {
            return false;
        }
        if new_index >= self.num_pages() {
            warn!(
                index = new_index,
                num_pages = self.num_pages(),
                "忽略越界的可见页"
            );
            return false;
        }

        let previous = self.state.current_page_index;
        self.state = PaginationState {
            current_page_index: new_index,
            previous_page_index: Some(previous),
            transition_progress: 0.0,
        };
        debug!(from = previous, to = new_index, "可见页变化，开始背景过渡");

        if let Some(callback) = self.on_page_index_changed.as_mut() {
            callback(new_index);
        }

        // 先取消被替换的补间，新过渡从 0 开始
        if let Some(superseded) = self.animation.take() {
            self.animator.cancel(superseded);
        }
        self.animation = Some(self.animator.start(0.0, 1.0, self.duration));
        true
    }

    /// 请求列表滚动到目标页
    ///
    /// 只是转发指令，不修改状态；列表停稳后的可见性事件才会触发翻页。
    pub fn advance_to_index(
        &self,
        target_index: usize,
        list: &mut dyn PagingList,
    ) -> OnboardingResult<()> {
        if target_index >= self.num_pages() {
            return Err(OnboardingError::PageOutOfRange {
                index: target_index,
                num_pages: self.num_pages(),
            });
        }

        debug!(target = target_index, "请求滚动到页面");
        list.scroll_to_index(target_index, true);
        Ok(())
    }

    /// 推进过渡动画
    pub fn update(&mut self, dt: Duration) -> TransitionPhase {
        if self.animation.is_some() {
            let value = self.animator.advance(dt).clamp(0.0, 1.0);
            self.state.transition_progress = self.state.transition_progress.max(value);

            if !self.animator.is_running() {
                self.state.transition_progress = 1.0;
                self.animation = None;
            }
        }
        self.phase()
    }

    /// 当前帧的背景色
    ///
    /// 进度为 0 时等于上一页颜色，为 1 时等于当前页颜色。
    pub fn current_background_color(&self) -> Color {
        let current = self.page_color(self.state.current_page_index);
        match self
            .state
            .previous_page_index
            .and_then(|index| self.colors.get(index))
        {
            Some(previous) => previous.lerp(&current, self.state.transition_progress),
            None => current,
        }
    }

    /// 当前页的背景色（不含过渡）
    pub fn current_page_color(&self) -> Color {
        self.page_color(self.state.current_page_index)
    }

    /// 颜色是否为亮色
    pub fn is_light(color: &Color) -> bool {
        color.is_light()
    }

    fn page_color(&self, index: usize) -> Color {
        self.colors.get(index).copied().unwrap_or(Color::BLACK)
    }
}

impl std::fmt::Debug for TransitionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionController")
            .field("num_pages", &self.num_pages())
            .field("state", &self.state)
            .field("duration", &self.duration)
            .field("animating", &self.animation.is_some())
            .finish()
    }
}
