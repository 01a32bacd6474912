//! # 主题
//!
//! 定义引导页文字、按钮与分页圆点的颜色和尺寸。
//!
//! 文字颜色随背景明暗切换：深色背景用浅色文字，浅色背景用深色文字。

use crate::color::Color;
use crate::page::{TextAlign, TextStyle};

/// 引导页主题
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // ===== 颜色 =====
    /// 标题文字色
    pub title_color: Color,
    /// 副标题文字色
    pub subtitle_color: Color,
    /// 按钮文字色
    pub button_text: Color,
    /// 当前页圆点
    pub dot_selected: Color,
    /// 其它页圆点
    pub dot_unselected: Color,

    // ===== 尺寸 =====
    /// 标题字号
    pub font_size_title: f32,
    /// 副标题字号
    pub font_size_subtitle: f32,
    /// 按钮字号
    pub font_size_button: f32,

    /// 圆点直径
    pub dot_size: f32,
    /// 圆点左右外边距
    pub dot_margin: f32,
    /// 插图下方留白
    pub image_padding_bottom: f32,
    /// 文字左右内边距
    pub text_padding_horizontal: f32,
    /// 标题下方留白
    pub title_padding_bottom: f32,
}

impl Theme {
    /// 深色背景（浅色文字）
    pub fn dark() -> Self {
        Self {
            title_color: Color::WHITE,
            subtitle_color: Color::with_opacity(255, 255, 255, 0.7),
            button_text: Color::WHITE,
            dot_selected: Color::WHITE,
            dot_unselected: Color::with_opacity(255, 255, 255, 0.5),
            ..Self::metrics()
        }
    }

    /// 浅色背景（深色文字）
    pub fn light() -> Self {
        Self {
            title_color: Color::BLACK,
            subtitle_color: Color::with_opacity(0, 0, 0, 0.7),
            button_text: Color::with_opacity(0, 0, 0, 0.8),
            dot_selected: Color::with_opacity(0, 0, 0, 0.8),
            dot_unselected: Color::with_opacity(0, 0, 0, 0.3),
            ..Self::metrics()
        }
    }

    /// 按背景明暗选择主题
    pub fn for_background(is_light: bool) -> Self {
        if is_light { Self::light() } else { Self::dark() }
    }

    /// 标题默认样式
    pub fn title_style(&self) -> TextStyle {
        TextStyle {
            font_size: Some(self.font_size_title),
            color: Some(self.title_color),
            text_align: Some(TextAlign::Center),
            padding_bottom: Some(self.title_padding_bottom),
        }
    }

    /// 副标题默认样式
    pub fn subtitle_style(&self) -> TextStyle {
        TextStyle {
            font_size: Some(self.font_size_subtitle),
            color: Some(self.subtitle_color),
            text_align: Some(TextAlign::Center),
            padding_bottom: None,
        }
    }

    fn metrics() -> Self {
        Self {
            title_color: Color::WHITE,
            subtitle_color: Color::WHITE,
            button_text: Color::WHITE,
            dot_selected: Color::WHITE,
            dot_unselected: Color::WHITE,

            font_size_title: 26.0,
            font_size_subtitle: 16.0,
            font_size_button: 16.0,

            dot_size: 6.0,
            dot_margin: 3.0,
            image_padding_bottom: 60.0,
            text_padding_horizontal: 10.0,
            title_padding_bottom: 15.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_contrasts_with_background() {
        let dark = Theme::for_background(false);
        assert_eq!(dark.title_color, Color::WHITE);
        let light = Theme::for_background(true);
        assert_eq!(light.title_color, Color::BLACK);
        assert!((light.subtitle_color.opacity() - 0.7).abs() < 0.01);
    }

    #[test]
    fn test_shared_metrics() {
        assert_eq!(Theme::dark().font_size_title, Theme::light().font_size_title);
        assert_eq!(Theme::dark().title_style().font_size, Some(26.0));
        assert_eq!(Theme::light().subtitle_style().font_size, Some(16.0));
    }
}
