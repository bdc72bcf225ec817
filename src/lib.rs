//! # Harness Runner Library / Harness Runner 库
//!
//! This library provides the core functionality for the Harness Runner tool,
//! a small test harness that runs discovered test artifacts and drives an
//! external build tool through file-system scenarios.
//!
//! 此库为 Harness Runner 工具提供核心功能，
//! 这是一个运行已发现的测试产物并驱动外部构建工具执行文件系统场景的小型测试框架。
//!
//! ## Modules / 模块
//!
//! - `core` - Configuration, data models, artifact discovery and the file-system sequence
//! - `infra` - Infrastructure services like command execution and file system operations
//! - `reporting` - Console output for banners, step progress and failures
//! - `cli` - Command-line interface
//! - `commands` - Implementations of the `run`, `fs-oper` and `init` subcommands
//!
//! - `core` - 配置、数据模型、产物发现和文件系统操作序列
//! - `infra` - 基础设施服务，如命令执行和文件系统操作
//! - `reporting` - 横幅、步骤进度和失败信息的控制台输出
//! - `cli` - 命令行接口
//! - `commands` - `run`、`fs-oper` 和 `init` 子命令的实现

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::config;
pub use core::discovery;
pub use core::models;
pub use core::sequence;

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");

/// Resolves the locale used for all user-facing messages.
///
/// An explicitly requested locale wins; otherwise the system locale is used.
/// The full tag is tried first (e.g. "zh-CN"), then the language part alone
/// (e.g. "en" from "en-US", "zh-CN" from "zh"), and finally the default "en".
///
/// 解析所有面向用户消息所使用的语言区域。
/// 显式请求的语言优先；否则使用系统语言。
/// 先尝试完整标签（如 "zh-CN"），再尝试语言部分（如 "en-US" 中的 "en"），最后回退到 "en"。
pub fn resolve_locale(requested: Option<&str>) -> String {
    let locale = requested
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string())
        .replace('_', "-");
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&locale.as_str()) {
        return locale;
    }

    locale
        .split('-')
        .next()
        .and_then(|lang_code| {
            available_locales
                .iter()
                .find(|available| available.split('-').next() == Some(lang_code))
                .map(|available| available.to_string())
        })
        .unwrap_or_else(|| "en".to_string())
}
