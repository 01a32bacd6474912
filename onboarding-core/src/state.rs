//! # State 模块
//!
//! 分页状态与过渡阶段。
//!
//! ## 状态转换
//!
//! ```text
//! Idle          -- 可见页变化 -->  Transitioning
//! Transitioning -- 动画完成   -->  Idle
//! Transitioning -- 可见页变化 -->  Transitioning（从 0 重新开始）
//! ```

use serde::Serialize;

/// 分页状态
///
/// 只由过渡控制器持有和修改。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    /// 当前页索引，始终小于页数
    pub current_page_index: usize,
    /// 上一页索引，首次翻页前为 `None`
    pub previous_page_index: Option<usize>,
    /// 过渡进度 (0.0 - 1.0)
    pub transition_progress: f32,
}

impl PaginationState {
    /// 挂载时的初始状态：停在第 0 页，无需动画
    pub fn initial() -> Self {
        Self {
            current_page_index: 0,
            previous_page_index: None,
            transition_progress: 1.0,
        }
    }

    /// 当前阶段
    pub fn phase(&self) -> TransitionPhase {
        if self.transition_progress >= 1.0 {
            TransitionPhase::Idle
        } else {
            TransitionPhase::Transitioning
        }
    }

    /// 是否为最后一页
    pub fn is_last_page(&self, num_pages: usize) -> bool {
        self.current_page_index + 1 == num_pages
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::initial()
    }
}

/// 过渡阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionPhase {
    /// 空闲（进度为 1）
    Idle,
    /// 背景色过渡中
    Transitioning,
}
