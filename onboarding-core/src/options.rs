//! # Options 模块
//!
//! 引导页的全部数据型配置，可从 JSON 加载。
//!
//! 回调与自定义渲染器不在这里，见 [`crate::OnboardingBuilder`]。
//!
//! ## 示例
//!
//! ```json
//! {
//!   "pages": [
//!     { "backgroundColor": "#fff", "image": "img/1.png", "title": "Hi", "subtitle": "..." }
//!   ],
//!   "skipToPage": 2,
//!   "transitionAnimationDuration": 300
//! }
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::animation::EasingFunction;
use crate::error::{OnboardingError, OnboardingResult, OptionsError};
use crate::page::{Content, Page, TextStyle};
use crate::pagination::PaginationFlags;
use crate::transition::DEFAULT_TRANSITION_DURATION_MS;

/// 引导页配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingOptions {
    /// 页面列表（必须非空）
    pub pages: Vec<Page>,

    /// 是否显示跳过按钮
    #[serde(default = "default_true")]
    pub show_skip: bool,

    /// 是否显示下一页按钮
    #[serde(default = "default_true")]
    pub show_next: bool,

    /// 是否显示完成按钮
    #[serde(default = "default_true")]
    pub show_done: bool,

    /// 是否显示分页控件
    #[serde(default = "default_true")]
    pub show_pagination: bool,

    /// 跳过按钮文案
    #[serde(default = "default_skip_label")]
    pub skip_label: Content,

    /// 下一页按钮文案
    #[serde(default = "default_next_label")]
    pub next_label: Content,

    /// 设置后，跳过按钮滚动到该页而不是调用 `on_skip`
    #[serde(default)]
    pub skip_to_page: Option<usize>,

    /// 背景色过渡时长（毫秒）
    #[serde(default = "default_transition_duration")]
    pub transition_animation_duration: u64,

    /// 默认动画器使用的缓动曲线
    #[serde(default)]
    pub easing: EasingFunction,

    /// 是否由本组件控制状态栏样式
    #[serde(default = "default_true")]
    pub control_status_bar: bool,

    /// 页面文字是否跟随系统字号缩放
    #[serde(default = "default_true")]
    pub allow_font_scaling_text: bool,

    /// 按钮文字是否跟随系统字号缩放
    #[serde(default = "default_true")]
    pub allow_font_scaling_buttons: bool,

    /// 全局标题样式
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_styles: Option<TextStyle>,

    /// 全局副标题样式
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_title_styles: Option<TextStyle>,
}

// 默认值函数
fn default_true() -> bool {
    true
}

fn default_skip_label() -> Content {
    Content::text("Skip")
}

fn default_next_label() -> Content {
    Content::text("Next")
}

fn default_transition_duration() -> u64 {
    DEFAULT_TRANSITION_DURATION_MS
}

impl OnboardingOptions {
    /// 以默认值创建配置
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages,
            show_skip: true,
            show_next: true,
            show_done: true,
            show_pagination: true,
            skip_label: default_skip_label(),
            next_label: default_next_label(),
            skip_to_page: None,
            transition_animation_duration: default_transition_duration(),
            easing: EasingFunction::default(),
            control_status_bar: true,
            allow_font_scaling_text: true,
            allow_font_scaling_buttons: true,
            title_styles: None,
            sub_title_styles: None,
        }
    }

    /// 从 JSON 字符串解析（不做校验）
    pub fn from_json_str(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 加载并校验配置文件
    pub fn load(path: impl AsRef<Path>) -> OnboardingResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let options = Self::from_json_str(&content)?;
        options.validate()?;
        debug!(path = %path.display(), pages = options.pages.len(), "配置文件加载成功");
        Ok(options)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> OnboardingResult<()> {
        if self.pages.is_empty() {
            return Err(OnboardingError::NoPages);
        }

        if let Some(index) = self.skip_to_page
            && index >= self.pages.len()
        {
            return Err(OnboardingError::InvalidSkipTarget {
                index,
                num_pages: self.pages.len(),
            });
        }

        Ok(())
    }

    /// 过渡时长
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_animation_duration)
    }

    pub fn flags(&self) -> PaginationFlags {
        PaginationFlags {
            show_skip: self.show_skip,
            show_next: self.show_next,
            show_done: self.show_done,
        }
    }

    pub fn with_skip_to_page(mut self, index: usize) -> Self {
        self.skip_to_page = Some(index);
        self
    }

    pub fn with_transition_duration(mut self, millis: u64) -> Self {
        self.transition_animation_duration = millis;
        self
    }

    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::color::Color;

    const MINIMAL: &str = r##"{
        "pages": [
            { "backgroundColor": "#fff", "image": "a.png", "title": "A", "subtitle": "a" },
            { "backgroundColor": "#000", "image": "b.png", "title": "B", "subtitle": "b" }
        ]
    }"##;

    #[test]
    fn test_defaults_from_json() {
        let options = OnboardingOptions::from_json_str(MINIMAL).unwrap();
        assert_eq!(options.pages.len(), 2);
        assert!(options.show_skip && options.show_next && options.show_done);
        assert!(options.show_pagination);
        assert!(options.control_status_bar);
        assert_eq!(options.skip_label, Content::text("Skip"));
        assert_eq!(options.next_label, Content::text("Next"));
        assert_eq!(options.skip_to_page, None);
        assert_eq!(options.transition_duration(), Duration::from_millis(500));
        assert_eq!(options.easing, EasingFunction::EaseInOut);
        assert_eq!(options, OnboardingOptions::new(options.pages.clone()));
    }

    #[test]
    fn test_overrides_from_json() {
        let json = r##"{
            "pages": [
                { "backgroundColor": "red", "image": "a.png", "title": "A", "subtitle": "a" }
            ],
            "showSkip": false,
            "nextLabel": { "element": "arrow-icon" },
            "transitionAnimationDuration": 250,
            "easing": "linear",
            "controlStatusBar": false,
            "titleStyles": { "color": "#123456" }
        }"##;
        let options = OnboardingOptions::from_json_str(json).unwrap();
        assert!(!options.show_skip);
        assert_eq!(options.next_label, Content::element("arrow-icon"));
        assert_eq!(options.transition_animation_duration, 250);
        assert_eq!(options.easing, EasingFunction::Linear);
        assert!(!options.control_status_bar);
        assert_eq!(
            options.title_styles.unwrap().color,
            Some(Color::rgb(0x12, 0x34, 0x56))
        );
    }

    #[test]
    fn test_validate() {
        let options = OnboardingOptions::from_json_str(MINIMAL).unwrap();
        assert!(options.validate().is_ok());
        assert!(options.clone().with_skip_to_page(1).validate().is_ok());
        assert!(matches!(
            options.with_skip_to_page(2).validate(),
            Err(OnboardingError::InvalidSkipTarget {
                index: 2,
                num_pages: 2
            })
        ));
        assert!(matches!(
            OnboardingOptions::new(Vec::new()).validate(),
            Err(OnboardingError::NoPages)
        ));
    }

    #[test]
    fn test_invalid_color_is_parse_error() {
        let json = r#"{ "pages": [ { "backgroundColor": "nope", "image": "a", "title": "t", "subtitle": "s" } ] }"#;
        assert!(matches!(
            OnboardingOptions::from_json_str(json),
            Err(OptionsError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();
        let options = OnboardingOptions::load(file.path()).unwrap();
        assert_eq!(options.pages.len(), 2);

        let missing = OnboardingOptions::load("/definitely/not/here.json");
        assert!(matches!(
            missing,
            Err(OnboardingError::Options(OptionsError::Io { .. }))
        ));
    }
}
