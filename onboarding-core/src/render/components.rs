//! # 按钮与圆点渲染器
//!
//! 分页控件的可替换渲染器。宿主可以注入自己的实现，只要遵守固定的属性约定：
//! `is_light`、`label`、`intent`（对应按下事件）、`allow_font_scaling`。

use super::view::{ButtonView, DotView};
use super::Theme;
use crate::page::Content;
use crate::pagination::Intent;

/// 完成按钮的默认文案
pub const DONE_LABEL: &str = "✓";

/// 按钮属性
#[derive(Debug, Clone, Copy)]
pub struct ButtonProps<'a> {
    pub intent: Intent,
    /// 当前页背景是否为亮色
    pub is_light: bool,
    pub is_last_page: bool,
    /// 调用方配置的文案；完成按钮没有
    pub label: Option<&'a Content>,
    pub allow_font_scaling: bool,
    pub theme: &'a Theme,
}

/// 圆点属性
#[derive(Debug, Clone, Copy)]
pub struct DotProps<'a> {
    pub index: usize,
    pub selected: bool,
    pub is_light: bool,
    pub theme: &'a Theme,
}

/// 按钮渲染器
pub trait ButtonRenderer {
    fn render(&self, props: &ButtonProps<'_>) -> ButtonView;
}

/// 圆点渲染器
pub trait DotRenderer {
    fn render(&self, props: &DotProps<'_>) -> DotView;
}

fn text_button(props: &ButtonProps<'_>, fallback: &str) -> ButtonView {
    ButtonView {
        intent: props.intent,
        label: props
            .label
            .cloned()
            .unwrap_or_else(|| Content::text(fallback)),
        text_color: props.theme.button_text,
        font_size: props.theme.font_size_button,
        allow_font_scaling: props.allow_font_scaling,
    }
}

/// 默认跳过按钮
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSkipButton;

impl ButtonRenderer for DefaultSkipButton {
    fn render(&self, props: &ButtonProps<'_>) -> ButtonView {
        text_button(props, "Skip")
    }
}

/// 默认下一页按钮
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNextButton;

impl ButtonRenderer for DefaultNextButton {
    fn render(&self, props: &ButtonProps<'_>) -> ButtonView {
        text_button(props, "Next")
    }
}

/// 默认完成按钮，总是显示对勾
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDoneButton;

impl ButtonRenderer for DefaultDoneButton {
    fn render(&self, props: &ButtonProps<'_>) -> ButtonView {
        ButtonView {
            label: Content::text(DONE_LABEL),
            ..text_button(props, DONE_LABEL)
        }
    }
}

/// 默认圆点
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDot;

impl DotRenderer for DefaultDot {
    fn render(&self, props: &DotProps<'_>) -> DotView {
        let color = if props.selected {
            props.theme.dot_selected
        } else {
            props.theme.dot_unselected
        };
        DotView {
            index: props.index,
            selected: props.selected,
            color,
            size: props.theme.dot_size,
            margin: props.theme.dot_margin,
        }
    }
}

/// 分页控件使用的一组渲染器
pub struct Renderers {
    pub skip: Box<dyn ButtonRenderer>,
    pub next: Box<dyn ButtonRenderer>,
    pub done: Box<dyn ButtonRenderer>,
    pub dot: Box<dyn DotRenderer>,
}

impl Renderers {
    pub fn button(&self, intent: Intent) -> &dyn ButtonRenderer {
        match intent {
            Intent::Skip => self.skip.as_ref(),
            Intent::Next => self.next.as_ref(),
            Intent::Done => self.done.as_ref(),
        }
    }
}

impl Default for Renderers {
    fn default() -> Self {
        Self {
            skip: Box::new(DefaultSkipButton),
            next: Box::new(DefaultNextButton),
            done: Box::new(DefaultDoneButton),
            dot: Box::new(DefaultDot),
        }
    }
}

impl std::fmt::Debug for Renderers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderers").finish_non_exhaustive()
    }
}
