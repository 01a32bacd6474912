//! # Error 模块
//!
//! 定义 onboarding-core 中使用的错误类型。

use thiserror::Error;

/// 颜色解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// 空字符串
    #[error("颜色字符串为空")]
    Empty,

    /// 十六进制格式错误
    #[error("无效的十六进制颜色 '{0}'")]
    InvalidHex(String),

    /// rgb()/rgba() 函数格式错误
    #[error("无效的 rgb/rgba 颜色 '{0}'")]
    InvalidFunction(String),

    /// 未知的颜色名
    #[error("未知的颜色名 '{0}'")]
    UnknownName(String),
}

/// 配置错误
#[derive(Error, Debug)]
pub enum OptionsError {
    /// 读取配置文件失败
    #[error("配置文件读取失败: {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON 解析失败
    #[error("配置解析失败: {0}")]
    Parse(#[from] serde_json::Error),
}

/// onboarding-core 统一错误类型
#[derive(Error, Debug)]
pub enum OnboardingError {
    /// 页面列表为空
    #[error("页面列表不能为空")]
    NoPages,

    /// 页面索引越界
    #[error("页面索引 {index} 越界，有效范围是 0..{num_pages}")]
    PageOutOfRange { index: usize, num_pages: usize },

    /// skipToPage 指向不存在的页面
    #[error("skipToPage = {index} 越界，有效范围是 0..{num_pages}")]
    InvalidSkipTarget { index: usize, num_pages: usize },

    /// 配置错误
    #[error(transparent)]
    Options(#[from] OptionsError),
}

/// Result 类型别名
pub type OnboardingResult<T> = Result<T, OnboardingError>;
