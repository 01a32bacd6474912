//! # Pagination 模块
//!
//! 分页控件的显示规则与用户意图。

use serde::{Deserialize, Serialize};

/// 分页控件发出的用户意图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// 下一页
    Next,
    /// 跳过
    Skip,
    /// 完成
    Done,
}

/// 按钮开关
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationFlags {
    pub show_skip: bool,
    pub show_next: bool,
    pub show_done: bool,
}

impl Default for PaginationFlags {
    fn default() -> Self {
        Self {
            show_skip: true,
            show_next: true,
            show_done: true,
        }
    }
}

/// 各按钮是否可见
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlVisibility {
    pub is_last_page: bool,
    pub skip: bool,
    pub next: bool,
    pub done: bool,
}

impl ControlVisibility {
    /// 计算按钮可见性
    ///
    /// - Next：`show_next` 且不是最后一页
    /// - Done：`show_done` 且是最后一页
    /// - Skip：只看 `show_skip`，与页码无关
    pub fn compute(current_page_index: usize, num_pages: usize, flags: PaginationFlags) -> Self {
        let is_last_page = current_page_index + 1 == num_pages;
        Self {
            is_last_page,
            skip: flags.show_skip,
            next: flags.show_next && !is_last_page,
            done: flags.show_done && is_last_page,
        }
    }

    /// 按渲染顺序列出可见按钮
    pub fn visible_intents(&self) -> Vec<Intent> {
        let mut intents = Vec::with_capacity(3);
        if self.next {
            intents.push(Intent::Next);
        }
        if self.done {
            intents.push(Intent::Done);
        }
        if self.skip {
            intents.push(Intent::Skip);
        }
        intents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_of_three() {
        let v = ControlVisibility::compute(0, 3, PaginationFlags::default());
        assert!(!v.is_last_page);
        assert!(v.next);
        assert!(!v.done);
        assert!(v.skip);
    }

    #[test]
    fn test_last_page_shows_done() {
        let v = ControlVisibility::compute(2, 3, PaginationFlags::default());
        assert!(v.is_last_page);
        assert!(!v.next);
        assert!(v.done);
        assert!(v.skip);
    }

    #[test]
    fn test_flags_disable_buttons() {
        let flags = PaginationFlags {
            show_skip: false,
            show_next: false,
            show_done: false,
        };
        for index in 0..3 {
            let v = ControlVisibility::compute(index, 3, flags);
            assert!(!v.skip && !v.next && !v.done);
        }
    }

    #[test]
    fn test_visibility_rules_exhaustive() {
        for num_pages in 1..5 {
            for current in 0..num_pages {
                for bits in 0..8u8 {
                    let flags = PaginationFlags {
                        show_skip: bits & 1 != 0,
                        show_next: bits & 2 != 0,
                        show_done: bits & 4 != 0,
                    };
                    let v = ControlVisibility::compute(current, num_pages, flags);
                    let last = current == num_pages - 1;
                    assert_eq!(v.is_last_page, last);
                    assert_eq!(v.next, flags.show_next && !last);
                    assert_eq!(v.done, flags.show_done && last);
                    assert_eq!(v.skip, flags.show_skip);
                }
            }
        }
    }

    #[test]
    fn test_visible_intents_order() {
        let v = ControlVisibility::compute(0, 2, PaginationFlags::default());
        assert_eq!(v.visible_intents(), vec![Intent::Next, Intent::Skip]);
        let v = ControlVisibility::compute(1, 2, PaginationFlags::default());
        assert_eq!(v.visible_intents(), vec![Intent::Done, Intent::Skip]);
    }
}
