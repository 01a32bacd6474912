//! # xtask - 开发辅助工具
//!
//! 提供本地质量门禁与开发辅助命令。
//!
//! ## 命令
//!
//! - `check-all`: 运行 fmt、clippy、test
//! - `cov-core`: 运行 onboarding-core 覆盖率
//! - `options-check`: 检查引导页配置文件（JSON 格式、页面、插图引用）

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;
use clap::{Parser, Subcommand};
use onboarding_core::{Content, OnboardingOptions};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "引导页开发辅助工具")]
struct Cli {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Task {
    /// fmt、clippy、test 门禁检查
    CheckAll,
    /// onboarding-core 覆盖率报告（HTML）
    CovCore,
    /// 检查引导页配置：JSON 格式、页面、插图引用
    OptionsCheck {
        /// 配置文件或目录，缺省为 demos/
        path: Option<PathBuf>,
    },
}

/// 门禁步骤，依次执行
const GATE: &[&[&str]] = &[
    &["fmt", "--all", "--", "--check"],
    &["clippy", "--workspace", "--all-targets"],
    &["test", "--workspace"],
];

fn main() -> anyhow::Result<()> {
    match Cli::parse().command {
        Task::CheckAll => GATE.iter().try_for_each(|args| cargo(args)),
        Task::CovCore => {
            let llvm_cov = Command::new("cargo").args(["llvm-cov", "--version"]).output();
            if !llvm_cov.is_ok_and(|out| out.status.success()) {
                anyhow::bail!(
                    "找不到 cargo llvm-cov，请先执行 `cargo install cargo-llvm-cov` \
                     和 `rustup component add llvm-tools-preview`"
                );
            }
            cargo(&["llvm-cov", "-p", "onboarding-core", "--html"])?;
            eprintln!("\n覆盖率报告: target/llvm-cov/html/index.html");
            Ok(())
        }
        Task::OptionsCheck { path } => options_check(path),
    }
}

/// 在 workspace 中执行一条 cargo 命令，失败即中止
fn cargo(args: &[&str]) -> anyhow::Result<()> {
    let line = args.join(" ");
    eprintln!("\n==> cargo {line}");
    let status = Command::new("cargo")
        .args(args)
        .status()
        .with_context(|| format!("无法启动 cargo {line}"))?;
    anyhow::ensure!(status.success(), "cargo {line} 失败: {status}");
    Ok(())
}

//=============================================================================
// options-check 命令实现
//=============================================================================

/// 默认配置目录（相对于 workspace root）
const DEFAULT_OPTIONS_DIR: &str = "demos";

/// 检查结果
#[derive(Debug, Default)]
struct OptionsCheckResult {
    files_checked: usize,
    errors: Vec<String>,
    warnings: Vec<String>,
}

fn options_check(path: Option<PathBuf>) -> anyhow::Result<()> {
    let root = path.unwrap_or_else(|| PathBuf::from(DEFAULT_OPTIONS_DIR));
    if !root.exists() {
        anyhow::bail!(
            "路径不存在: {}\n请在 workspace 根目录运行，或指定配置路径",
            root.display()
        );
    }

    let files = collect_options_files(&root);
    if files.is_empty() {
        eprintln!("未找到配置文件（.json）");
        return Ok(());
    }

    eprintln!("==> 检查 {} 个配置文件...\n", files.len());

    let mut result = OptionsCheckResult::default();
    for file in &files {
        check_options_file(file, &mut result);
    }

    print_check_result(&result);

    if !result.errors.is_empty() {
        anyhow::bail!("配置检查发现错误");
    }
    Ok(())
}

/// 收集配置文件，单个文件直接返回
fn collect_options_files(root: &Path) -> Vec<PathBuf> {
    if root.is_file() {
        return vec![root.to_path_buf()];
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

fn check_options_file(file: &Path, result: &mut OptionsCheckResult) {
    let id = file.display().to_string();
    result.files_checked += 1;

    let options = match OnboardingOptions::load(file) {
        Ok(options) => options,
        Err(e) => {
            result.errors.push(format!("{id}: {e}"));
            return;
        }
    };

    let base = file.parent().unwrap_or_else(|| Path::new("."));
    for (index, page) in options.pages.iter().enumerate() {
        let image = base.join(page.image.key());
        if !image.exists() {
            result
                .warnings
                .push(format!("{id}: 第 {index} 页插图不存在: {}", image.display()));
        }
        if matches!(&page.title, Content::Text(text) if text.trim().is_empty()) {
            result.warnings.push(format!("{id}: 第 {index} 页标题为空"));
        }
    }
}

fn print_check_result(result: &OptionsCheckResult) {
    eprintln!("─────────────────────────────────────────────────────");
    eprintln!("检查完成: {} 个配置文件", result.files_checked);
    eprintln!();

    for error in &result.errors {
        eprintln!("[ERROR] {error}");
    }
    for warning in &result.warnings {
        eprintln!("[WARN] {warning}");
    }

    eprintln!();
    if !result.errors.is_empty() {
        eprintln!(
            "❌ {} 个错误, {} 个警告",
            result.errors.len(),
            result.warnings.len()
        );
    } else if !result.warnings.is_empty() {
        eprintln!("⚠️  0 个错误, {} 个警告", result.warnings.len());
    } else {
        eprintln!("✅ 检查通过，无错误");
    }
}
