//! # Page 模块
//!
//! 单页引导内容：背景色、插图、标题与副标题。

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// 宿主元素引用
///
/// 不透明的键（资源路径、组件 id 等），由宿主解释，本库只负责透传。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementRef(pub String);

impl ElementRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

/// 文本或宿主元素
///
/// JSON 中字符串解析为 `Text`，`{ "element": "..." }` 解析为 `Element`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// 纯文本，由本库按主题着色
    Text(String),
    /// 宿主元素，原样透传
    Element { element: ElementRef },
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn element(key: impl Into<String>) -> Self {
        Self::Element {
            element: ElementRef::new(key),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element { .. } => None,
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

/// 文本对齐
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// 文本样式
///
/// 所有字段可选，用 [`TextStyle::merge`] 逐层覆盖。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f32>,
}

impl TextStyle {
    /// 用 `other` 中已设置的字段覆盖当前样式
    pub fn merge(self, other: &TextStyle) -> TextStyle {
        TextStyle {
            font_size: other.font_size.or(self.font_size),
            color: other.color.or(self.color),
            text_align: other.text_align.or(self.text_align),
            padding_bottom: other.padding_bottom.or(self.padding_bottom),
        }
    }

    /// 依次合并多个可选样式
    pub fn layered<'a>(self, layers: impl IntoIterator<Item = Option<&'a TextStyle>>) -> TextStyle {
        layers
            .into_iter()
            .flatten()
            .fold(self, |acc, layer| acc.merge(layer))
    }
}

/// 单页引导内容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// 页面背景色
    pub background_color: Color,
    /// 插图
    pub image: ElementRef,
    /// 标题
    pub title: Content,
    /// 副标题
    pub subtitle: Content,
    /// 本页标题样式（覆盖全局样式）
    #[serde(default, rename = "titleStyles", skip_serializing_if = "Option::is_none")]
    pub title_style: Option<TextStyle>,
    /// 本页副标题样式（覆盖全局样式）
    #[serde(default, rename = "subTitleStyles", skip_serializing_if = "Option::is_none")]
    pub subtitle_style: Option<TextStyle>,
}

impl Page {
    pub fn new(
        background_color: Color,
        image: impl Into<String>,
        title: impl Into<Content>,
        subtitle: impl Into<Content>,
    ) -> Self {
        Self {
            background_color,
            image: ElementRef::new(image),
            title: title.into(),
            subtitle: subtitle.into(),
            title_style: None,
            subtitle_style: None,
        }
    }

    pub fn with_title_style(mut self, style: TextStyle) -> Self {
        self.title_style = Some(style);
        self
    }

    pub fn with_subtitle_style(mut self, style: TextStyle) -> Self {
        self.subtitle_style = Some(style);
        self
    }

    /// 本页背景是否为亮色
    pub fn is_light(&self) -> bool {
        self.background_color.is_light()
    }
}
