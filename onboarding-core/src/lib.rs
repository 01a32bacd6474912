//! # Onboarding Core
//!
//! 可滑动引导页组件的核心逻辑库。
//!
//! ## 架构概述
//!
//! `onboarding-core` 是纯逻辑核心，不绘制像素，也不拥有滚动列表和状态栏。
//! 它通过 **事件输入 + 视图输出** 与宿主通信：
//!
//! ```text
//! Host                               Onboarding
//!   │── on_viewable_items_changed ──►│  翻页 → 开始背景色过渡
//!   │── press(Intent) ──────────────►│  下一页 / 跳过 / 完成
//!   │── update(dt) ─────────────────►│  推进过渡动画
//!   │◄── PagingList / StatusBar ─────│  宿主能力调用
//!   │◄── frame() ────────────────────│  FrameView
//! ```
//!
//! ## 核心类型
//!
//! - [`Onboarding`]：根组件
//! - [`TransitionController`]：页码状态与背景色过渡
//! - [`ControlVisibility`]：分页按钮的显示规则
//! - [`FrameView`]：一帧的视图模型
//!
//! ## 使用示例
//!
//! ```ignore
//! use onboarding_core::{Onboarding, OnboardingOptions};
//!
//! let options = OnboardingOptions::load("onboarding.json")?;
//! let mut onboarding = Onboarding::builder(options)
//!     .on_done(|| navigate_home())
//!     .build(list, status_bar)?;
//!
//! loop {
//!     onboarding.update(dt);
//!     host.draw(&onboarding.frame());
//! }
//! ```
//!
//! ## 模块结构
//!
//! - [`animation`]：补间与缓动
//! - [`color`]：颜色解析、亮度与插值
//! - [`host`]：宿主能力接口
//! - [`options`]：可从 JSON 加载的配置
//! - [`render`]：主题、渲染器与视图模型

pub mod animation;
pub mod color;
pub mod error;
pub mod host;
pub mod onboarding;
pub mod options;
pub mod page;
pub mod pagination;
pub mod render;
pub mod state;
pub mod transition;

// 重导出核心类型
pub use animation::{AnimationHandle, Animator, EasingFunction, TimelineAnimator};
pub use color::Color;
pub use error::{ColorParseError, OnboardingError, OnboardingResult, OptionsError};
pub use host::{BarStyle, NoStatusBar, PagingList, StatusBarController, ViewToken};
pub use onboarding::{Callback, Onboarding, OnboardingBuilder};
pub use options::OnboardingOptions;
pub use page::{Content, ElementRef, Page, TextAlign, TextStyle};
pub use pagination::{ControlVisibility, Intent, PaginationFlags};
pub use render::{ButtonRenderer, DotRenderer, FrameView, PaginationView, Theme};
pub use state::{PaginationState, TransitionPhase};
pub use transition::{DEFAULT_TRANSITION_DURATION_MS, TransitionController};

#[cfg(test)]
mod tests {
    use super::*;

    struct Ignore;

    impl PagingList for Ignore {
        fn scroll_to_index(&mut self, _index: usize, _animated: bool) {}
    }

    #[test]
    fn test_public_api_accessible() {
        let options = OnboardingOptions::new(vec![Page::new(
            Color::rgb(0x33, 0x66, 0x99),
            "welcome.png",
            "Welcome",
            "Swipe to continue",
        )]);
        let onboarding = Onboarding::builder(options)
            .build(Ignore, NoStatusBar)
            .unwrap();
        assert_eq!(onboarding.num_pages(), 1);
        assert_eq!(onboarding.state().phase(), TransitionPhase::Idle);
        assert!(onboarding.control_visibility().is_last_page);
    }
}
