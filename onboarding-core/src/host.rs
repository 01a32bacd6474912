//! # Host 模块
//!
//! 宿主提供的能力接口。
//!
//! 本库不拥有滚动列表和系统状态栏，只通过这里的 trait 发出指令：
//!
//! ```text
//! Host                               Onboarding
//!   │── on_viewable_items_changed ──►│
//!   │── press(intent) ──────────────►│
//!   │── update(dt) ─────────────────►│
//!   │◄── PagingList::scroll_to_index ─│
//!   │◄── StatusBarController::set_style│
//!   │◄── frame() ─────────────────────│
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// 横向分页列表
pub trait PagingList {
    /// 滚动到指定页；滚动停稳后宿主应上报可见性变化
    fn scroll_to_index(&mut self, index: usize, animated: bool);
}

/// 状态栏样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BarStyle {
    /// 系统默认
    #[default]
    Default,
    /// 浅色内容（用于深色背景）
    LightContent,
    /// 深色内容（用于浅色背景）
    DarkContent,
}

impl BarStyle {
    /// 按背景色选择状态栏样式
    pub fn for_background(color: &Color) -> Self {
        if color.is_light() {
            Self::DarkContent
        } else {
            Self::LightContent
        }
    }
}

/// 状态栏控制
pub trait StatusBarController {
    fn set_style(&mut self, style: BarStyle, animated: bool);
}

/// 不接管状态栏时使用
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStatusBar;

impl StatusBarController for NoStatusBar {
    fn set_style(&mut self, _style: BarStyle, _animated: bool) {}
}

/// 可见性事件中的单个条目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewToken {
    /// 条目索引，宿主尚未确定时为 `None`
    pub index: Option<usize>,
    pub is_viewable: bool,
}

impl ViewToken {
    pub fn viewable(index: usize) -> Self {
        Self {
            index: Some(index),
            is_viewable: true,
        }
    }
}

impl<T: PagingList + ?Sized> PagingList for Rc<RefCell<T>> {
    fn scroll_to_index(&mut self, index: usize, animated: bool) {
        self.borrow_mut().scroll_to_index(index, animated);
    }
}

impl<T: StatusBarController + ?Sized> StatusBarController for Rc<RefCell<T>> {
    fn set_style(&mut self, style: BarStyle, animated: bool) {
        self.borrow_mut().set_style(style, animated);
    }
}
