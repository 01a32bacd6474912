//! # 视图模型
//!
//! 宿主每帧绘制所需的全部数据。本库不绘制像素，只产出这些结构。

use serde::Serialize;

use super::Theme;
use crate::color::Color;
use crate::host::BarStyle;
use crate::page::{Content, ElementRef, Page, TextStyle};
use crate::pagination::Intent;
use crate::state::{PaginationState, TransitionPhase};

/// 文本槽位：已着色的文本，或原样透传的宿主元素
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TextView {
    Text {
        text: String,
        style: TextStyle,
        allow_font_scaling: bool,
    },
    Element {
        element: ElementRef,
    },
}

impl TextView {
    /// 按样式层级构建文本槽位
    ///
    /// 样式优先级：主题默认 < 全局样式 < 本页样式。元素内容不做样式处理。
    pub fn build(
        content: &Content,
        base: TextStyle,
        global: Option<&TextStyle>,
        page: Option<&TextStyle>,
        allow_font_scaling: bool,
    ) -> Self {
        match content {
            Content::Text(text) => TextView::Text {
                text: text.clone(),
                style: base.layered([global, page]),
                allow_font_scaling,
            },
            Content::Element { element } => TextView::Element {
                element: element.clone(),
            },
        }
    }
}

/// 单页视图
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub index: usize,
    /// 容器宽度，宿主尚未上报布局时为 `None`
    pub width: Option<f32>,
    /// 本页背景是否为亮色
    pub is_light: bool,
    pub image: ElementRef,
    pub image_padding_bottom: f32,
    /// 标题与副标题的左右内边距
    pub text_padding_horizontal: f32,
    pub title: TextView,
    pub subtitle: TextView,
}

/// 页面视图所需的全局参数
#[derive(Debug, Clone, Copy, Default)]
pub struct PageViewContext<'a> {
    pub width: Option<f32>,
    pub title_styles: Option<&'a TextStyle>,
    pub subtitle_styles: Option<&'a TextStyle>,
    pub allow_font_scaling: bool,
}

impl PageView {
    /// 明暗只取决于本页自身的背景色，而不是过渡中的插值色
    pub fn build(index: usize, page: &Page, ctx: &PageViewContext<'_>) -> Self {
        let is_light = page.is_light();
        let theme = Theme::for_background(is_light);

        Self {
            index,
            width: ctx.width,
            is_light,
            image: page.image.clone(),
            image_padding_bottom: theme.image_padding_bottom,
            text_padding_horizontal: theme.text_padding_horizontal,
            title: TextView::build(
                &page.title,
                theme.title_style(),
                ctx.title_styles,
                page.title_style.as_ref(),
                ctx.allow_font_scaling,
            ),
            subtitle: TextView::build(
                &page.subtitle,
                theme.subtitle_style(),
                ctx.subtitle_styles,
                page.subtitle_style.as_ref(),
                ctx.allow_font_scaling,
            ),
        }
    }
}

/// 按钮视图
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonView {
    /// 按下时应回传给 `Onboarding::press` 的意图
    pub intent: Intent,
    pub label: Content,
    pub text_color: Color,
    pub font_size: f32,
    pub allow_font_scaling: bool,
}

/// 分页圆点视图
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DotView {
    pub index: usize,
    pub selected: bool,
    pub color: Color,
    pub size: f32,
    pub margin: f32,
}

/// 分页控件视图
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationView {
    pub is_light: bool,
    pub is_last_page: bool,
    pub dots: Vec<DotView>,
    /// 按渲染顺序：Next、Done、Skip
    pub buttons: Vec<ButtonView>,
}

impl PaginationView {
    pub fn button(&self, intent: Intent) -> Option<&ButtonView> {
        self.buttons.iter().find(|b| b.intent == intent)
    }
}

/// 一帧的完整视图
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameView {
    /// 插值后的背景色
    pub background: Color,
    /// 由本组件控制状态栏时的样式
    pub bar_style: Option<BarStyle>,
    pub phase: TransitionPhase,
    pub state: PaginationState,
    pub pages: Vec<PageView>,
    pub pagination: Option<PaginationView>,
}

impl FrameView {
    /// 单行摘要，用于日志
    pub fn summary(&self) -> String {
        let buttons: Vec<String> = self
            .pagination
            .iter()
            .flat_map(|p| p.buttons.iter())
            .map(|b| format!("{:?}", b.intent).to_lowercase())
            .collect();
        format!(
            "page={} prev={} progress={:.2} bg={} buttons=[{}]",
            self.state.current_page_index,
            self.state
                .previous_page_index
                .map(|i| i.to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.state.transition_progress,
            self.background,
            buttons.join(",")
        )
    }
}
