//! # Configuration Initialization Module / 配置初始化模块
//!
//! This module provides functionality for initializing a new harness
//! configuration through an interactive command-line wizard. It helps users
//! create a `Harness.toml` file describing where test artifacts live and how
//! the build tool is driven.
//!
//! 此模块通过交互式命令行向导提供初始化新测试框架配置的功能。
//! 它帮助用户创建 `Harness.toml` 文件，描述测试产物所在位置以及如何驱动构建工具。
//!
//! ## Features / 功能特性
//!
//! - **Interactive Wizard**: Step-by-step prompts with the defaults pre-filled
//! - **Non-interactive Mode**: Writes the defaults without asking anything
//! - **Overwrite Protection**: Confirmation prompt before overwriting an existing file
//!
//! - **交互式向导**: 预填默认值的逐步提示
//! - **非交互模式**: 不询问任何问题直接写入默认值
//! - **覆盖保护**: 覆盖现有文件前的确认提示

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::{DiscoverConfig, FsOperConfig, HarnessConfig};
use crate::infra::t;

/// Runs the wizard that generates the configuration file at `config_path`.
///
/// In non-interactive mode the default configuration is written directly,
/// replacing any existing file.
///
/// 运行生成 `config_path` 处配置文件的向导。
/// 在非交互模式下直接写入默认配置，并替换任何已有文件。
pub fn run_init_wizard(config_path: &Path, language: &str, non_interactive: bool) -> Result<()> {
    if non_interactive {
        return write_config(config_path, &HarnessConfig::default(), language);
    }

    let theme = ColorfulTheme::default();

    println!("\n{}", t!("init.welcome", locale = language).cyan().bold());
    println!("{}", t!("init.description", locale = language));

    if config_path.exists() {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!(
                "init.overwrite_prompt",
                locale = language,
                path = config_path.display()
            ))
            .default(false)
            .interact()
            .context(t!("init.user_confirmation_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init.aborted", locale = language));
            return Ok(());
        }
    }

    let defaults = HarnessConfig::default();

    let root: String = Input::with_theme(&theme)
        .with_prompt(t!("init.prompt_root", locale = language))
        .default(defaults.discover.root.display().to_string())
        .interact_text()
        .context(t!("init.user_confirmation_failed", locale = language).to_string())?;

    let extensions: String = Input::with_theme(&theme)
        .with_prompt(t!("init.prompt_extensions", locale = language))
        .allow_empty(true)
        .interact_text()
        .context(t!("init.user_confirmation_failed", locale = language).to_string())?;

    let make_command: String = Input::with_theme(&theme)
        .with_prompt(t!("init.prompt_make_command", locale = language))
        .default(defaults.fs_oper.make_command.clone())
        .interact_text()
        .context(t!("init.user_confirmation_failed", locale = language).to_string())?;

    let makefile: String = Input::with_theme(&theme)
        .with_prompt(t!("init.prompt_makefile", locale = language))
        .default(defaults.fs_oper.makefile.display().to_string())
        .interact_text()
        .context(t!("init.user_confirmation_failed", locale = language).to_string())?;

    let reference: String = Input::with_theme(&theme)
        .with_prompt(t!("init.prompt_reference", locale = language))
        .default(defaults.fs_oper.reference.display().to_string())
        .interact_text()
        .context(t!("init.user_confirmation_failed", locale = language).to_string())?;

    let config = HarnessConfig {
        language: Some(language.to_string()),
        discover: DiscoverConfig {
            root: PathBuf::from(root),
            extensions: parse_extension_list(&extensions),
        },
        fs_oper: FsOperConfig {
            make_command,
            makefile: PathBuf::from(makefile),
            reference: PathBuf::from(reference),
            ..defaults.fs_oper
        },
    };

    write_config(config_path, &config, language)
}

/// Splits a comma or whitespace separated list of extensions, dropping the
/// leading dots, e.g. `".exe, test"` becomes `["exe", "test"]`.
pub fn parse_extension_list(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(|ext| ext.trim_start_matches('.'))
        .filter(|ext| !ext.is_empty())
        .map(str::to_string)
        .collect()
}

fn write_config(path: &Path, config: &HarnessConfig, language: &str) -> Result<()> {
    let toml_string = toml::to_string_pretty(config)
        .context(t!("init.serialize_failed", locale = language).to_string())?;

    fs::write(path, toml_string).with_context(|| {
        t!("init.write_failed", locale = language, path = path.display()).to_string()
    })?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!("init.success_created", locale = language, path = path.display()).bold()
    );
    println!("{}", t!("init.usage_hint", locale = language));

    Ok(())
}
