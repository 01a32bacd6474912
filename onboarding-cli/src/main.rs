//! # Onboarding CLI
//!
//! 无界面运行引导页：加载配置，回放事件脚本，逐帧打印状态。
//!
//! ## 用法
//!
//! ```bash
//! cargo run -p onboarding-cli -- --events "swipe:1,tick:250,tick:250"
//! cargo run -p onboarding-cli -- --options demos/onboarding.json --script demos/walkthrough.txt
//! cargo run -p onboarding-cli -- --events "next,settle,tick:500" --json
//! ```

mod events;
mod sim;

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use onboarding_core::{Color, Onboarding, OnboardingOptions, Page, ViewToken};
use tracing::{debug, info, warn};

use events::{Event, parse_events};
use sim::{LoggingStatusBar, SimulatedList};

#[derive(Parser)]
#[command(name = "onboarding-cli")]
#[command(about = "无界面运行引导页并回放宿主事件")]
#[command(version)]
struct Cli {
    /// 配置文件（JSON），缺省时使用内置的三页示例
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// 事件脚本，逗号或空白分隔
    #[arg(short, long, default_value = "")]
    events: String,

    /// 从文件读取事件脚本，追加在 --events 之后
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// 帧间隔（毫秒），tick 事件按此步长推进
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,

    /// 结束时以 JSON 输出最后一帧
    #[arg(long)]
    json: bool,

    /// 未设置 RUST_LOG 时使用的日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_target(false)
        .init();

    let options = match &cli.options {
        Some(path) => OnboardingOptions::load(path)
            .with_context(|| format!("无法加载配置 {}", path.display()))?,
        None => demo_options(),
    };

    let mut script = cli.events.clone();
    if let Some(path) = &cli.script {
        let content = fs::read_to_string(path)
            .with_context(|| format!("无法读取事件脚本 {}", path.display()))?;
        script.push('\n');
        script.push_str(&content);
    }
    let events = parse_events(&script)?;

    let list = SimulatedList::shared();
    let finished = Rc::new(RefCell::new(false));
    let on_skip = finished.clone();
    let on_done = finished.clone();

    let mut onboarding = Onboarding::builder(options)
        .page_index_callback(|index| info!(index, "页码变化"))
        .on_skip(move || {
            info!("用户跳过引导");
            *on_skip.borrow_mut() = true;
        })
        .on_done(move || {
            info!("引导完成");
            *on_done.borrow_mut() = true;
        })
        .build(list.clone(), LoggingStatusBar::default())?;

    info!(pages = onboarding.num_pages(), events = events.len(), "开始回放");
    info!("{}", onboarding.frame().summary());

    let frame_step = Duration::from_millis(cli.tick_ms.max(1));
    for event in events {
        if *finished.borrow() {
            warn!(?event, "引导已结束，忽略剩余事件");
            break;
        }
        debug!(?event, "事件");
        match event {
            Event::Swipe(index) => {
                onboarding.on_viewable_items_changed(&[ViewToken::viewable(index)]);
            }
            Event::Settle => {
                let target = list.borrow_mut().settle();
                match target {
                    Some(index) => {
                        onboarding.on_viewable_items_changed(&[ViewToken::viewable(index)]);
                    }
                    None => debug!("没有等待中的滚动"),
                }
            }
            Event::Tick(total) => {
                let mut remaining = total;
                while !remaining.is_zero() {
                    let dt = remaining.min(frame_step);
                    onboarding.update(dt);
                    remaining -= dt;
                }
            }
            Event::Press(intent) => {
                if let Err(e) = onboarding.press(intent) {
                    warn!("按下 {intent:?} 失败: {e}");
                }
            }
            Event::Layout(width) => onboarding.on_layout(width),
        }
        info!("{}", onboarding.frame().summary());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&onboarding.frame())?);
    }
    Ok(())
}

/// 内置示例：浅色、彩色、深色各一页
fn demo_options() -> OnboardingOptions {
    OnboardingOptions::new(vec![
        Page::new(
            Color::WHITE,
            "images/circle.png",
            "Welcome",
            "Swipe left to see what's new",
        ),
        Page::new(
            Color::rgb(0xfe, 0x6e, 0x58),
            "images/square.png",
            "Stay in sync",
            "Your notes follow you across devices",
        ),
        Page::new(
            Color::rgb(0x20, 0x20, 0x20),
            "images/triangle.png",
            "All set",
            "Tap the check mark to get started",
        ),
    ])
}
