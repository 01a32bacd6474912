//! # Render 模块
//!
//! 把状态转换为宿主可绘制的视图模型。
//!
//! - `theme`: 颜色与尺寸
//! - `components`: 可替换的按钮/圆点渲染器
//! - `view`: 视图模型

pub mod components;
pub mod theme;
pub mod view;

pub use components::{
    ButtonProps, ButtonRenderer, DefaultDoneButton, DefaultDot, DefaultNextButton,
    DefaultSkipButton, DotProps, DotRenderer, Renderers, DONE_LABEL,
};
pub use theme::Theme;
pub use view::{
    ButtonView, DotView, FrameView, PageView, PageViewContext, PaginationView, TextView,
};
