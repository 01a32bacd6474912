//! # 模拟宿主
//!
//! 无界面模式下代替真实的分页列表和系统状态栏。

use std::cell::RefCell;
use std::rc::Rc;

use onboarding_core::{BarStyle, PagingList, StatusBarController};
use tracing::info;

/// 分页列表：记录最近一次滚动目标，`settle` 时交出
#[derive(Debug, Default)]
pub struct SimulatedList {
    pending: Option<usize>,
}

impl SimulatedList {
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }

    /// 滚动停稳，返回应上报为可见的页
    pub fn settle(&mut self) -> Option<usize> {
        self.pending.take()
    }
}

impl PagingList for SimulatedList {
    fn scroll_to_index(&mut self, index: usize, animated: bool) {
        info!(index, animated, "列表滚动");
        self.pending = Some(index);
    }
}

/// 状态栏：只打印日志
#[derive(Debug, Default)]
pub struct LoggingStatusBar {
    pub current: BarStyle,
}

impl StatusBarController for LoggingStatusBar {
    fn set_style(&mut self, style: BarStyle, animated: bool) {
        info!(?style, animated, "状态栏样式");
        self.current = style;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_takes_latest_target() {
        let mut list = SimulatedList::default();
        list.scroll_to_index(1, true);
        list.scroll_to_index(2, true);
        assert_eq!(list.settle(), Some(2));
        assert_eq!(list.settle(), None);
    }
}
