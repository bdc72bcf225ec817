// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use colored::*;
use std::{env, path::PathBuf};

use crate::{
    commands::{self, fs_oper::FsOperArgs},
    core::config::{DEFAULT_CONFIG_FILE, HarnessConfig},
    infra::t,
    resolve_locale,
};

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` or `--lang=<VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        return args.get(pos + 1).cloned();
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang="))
        .map(str::to_string)
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("harness-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("cli.config", locale = locale).to_string())
                .value_name("CONFIG")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("run")
                .about(t!("cli.run_about", locale = locale).to_string())
                .arg(
                    Arg::new("path")
                        .help(t!("cli.run_path", locale = locale).to_string())
                        .value_name("PATH")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("root")
                        .long("root")
                        .help(t!("cli.run_root", locale = locale).to_string())
                        .value_name("DIR")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("ext")
                        .short('e')
                        .long("ext")
                        .help(t!("cli.run_ext", locale = locale).to_string())
                        .value_name("EXT")
                        .value_delimiter(',')
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(
            Command::new("fs-oper")
                .about(t!("cli.fs_oper_about", locale = locale).to_string())
                .arg(
                    Arg::new("make-command")
                        .help(t!("cli.fs_oper_make_command", locale = locale).to_string())
                        .value_name("MAKE_CMD")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("makefile")
                        .short('f')
                        .long("makefile")
                        .help(t!("cli.fs_oper_makefile", locale = locale).to_string())
                        .value_name("FILE")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("reference")
                        .long("reference")
                        .help(t!("cli.fs_oper_reference", locale = locale).to_string())
                        .value_name("FILE")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("work-dir")
                        .long("work-dir")
                        .help(t!("cli.fs_oper_work_dir", locale = locale).to_string())
                        .value_name("DIR")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cli.init_about", locale = locale).to_string())
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("cli.init_non_interactive", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let requested_language = pre_parse_language();
    let mut locale = resolve_locale(requested_language.as_deref());
    rust_i18n::set_locale(&locale);

    let matches = build_cli(&locale).get_matches();
    let config_arg = matches.get_one::<PathBuf>("config").cloned();

    match matches.subcommand() {
        Some(("init", init_matches)) => {
            let non_interactive = init_matches.get_flag("non-interactive");
            let config_path = config_arg.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

            // Show language detection message if it was auto-detected
            if requested_language.is_none() && !non_interactive {
                println!(
                    "🌐 {}",
                    t!("system_language_detected", locale = &locale, lang = &locale)
                );
            }
            commands::init::run_init_wizard(&config_path, &locale, non_interactive)?;
        }
        Some((name, sub_matches)) => {
            let (config, config_path) = HarnessConfig::resolve(config_arg.as_deref(), &locale)?;

            // The configured language applies unless --lang was given.
            if requested_language.is_none() {
                if let Some(language) = config.language.as_deref() {
                    locale = resolve_locale(Some(language));
                    rust_i18n::set_locale(&locale);
                }
            }
            if let Some(path) = &config_path {
                println!(
                    "{}",
                    t!("config.loaded", locale = &locale, path = path.display()).dimmed()
                );
            }

            dispatch(name, sub_matches, &config, &locale).await?;
        }
        None => {
            // Clap has already printed the help text.
        }
    }
    Ok(())
}

async fn dispatch(
    name: &str,
    matches: &ArgMatches,
    config: &HarnessConfig,
    locale: &str,
) -> Result<()> {
    match name {
        "run" => {
            let explicit = matches.get_one::<PathBuf>("path").cloned();
            let root = matches.get_one::<PathBuf>("root").cloned();
            let extensions: Vec<String> = matches
                .get_many::<String>("ext")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();

            commands::run::execute(explicit, root, extensions, &config.discover, locale).await?;
        }
        "fs-oper" => {
            let args = FsOperArgs {
                make_command: matches.get_one::<String>("make-command").cloned(),
                makefile: matches.get_one::<PathBuf>("makefile").cloned(),
                reference: matches.get_one::<PathBuf>("reference").cloned(),
                work_dir: matches.get_one::<PathBuf>("work-dir").cloned(),
            };

            commands::fs_oper::execute(args, &config.fs_oper, locale).await?;
        }
        _ => {}
    }
    Ok(())
}
