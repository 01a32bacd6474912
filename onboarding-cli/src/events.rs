//! # 事件脚本
//!
//! 无界面模式下模拟宿主事件的小型脚本语言。
//!
//! ```text
//! swipe:1      # 用户手动滑到第 1 页
//! tick:250     # 经过 250ms
//! next         # 按下 Next
//! settle       # 列表滚动停稳，上报可见页
//! layout:414   # 容器宽度变化
//! ```
//!
//! 事件之间可用逗号、空白或换行分隔；`#` 之后为注释。

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, bail};
use onboarding_core::Intent;

/// 单个宿主事件
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Swipe(usize),
    Tick(Duration),
    Press(Intent),
    Layout(f32),
    Settle,
}

impl FromStr for Event {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        let event = match (name, arg) {
            ("swipe", Some(arg)) => {
                Event::Swipe(arg.parse().with_context(|| format!("无效的页索引: {arg}"))?)
            }
            ("tick", Some(arg)) => Event::Tick(Duration::from_millis(
                arg.parse().with_context(|| format!("无效的毫秒数: {arg}"))?,
            )),
            ("layout", Some(arg)) => {
                Event::Layout(arg.parse().with_context(|| format!("无效的宽度: {arg}"))?)
            }
            ("next", None) => Event::Press(Intent::Next),
            ("skip", None) => Event::Press(Intent::Skip),
            ("done", None) => Event::Press(Intent::Done),
            ("settle", None) => Event::Settle,
            _ => bail!("未知事件: {s}"),
        };
        Ok(event)
    }
}

/// 解析事件脚本
pub fn parse_events(script: &str) -> anyhow::Result<Vec<Event>> {
    script
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .flat_map(|line| line.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}
