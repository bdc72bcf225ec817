// src/commands/fs_oper.rs

use anyhow::Result;
use colored::*;
use std::path::PathBuf;

use crate::{
    core::{config::FsOperConfig, models::SequenceReport, sequence::FsOperSequence},
    infra::t,
    reporting::print_sequence_failure,
};

/// Command-line overrides for the file-system operation sequence.
/// Every `None` falls back to the configuration file value.
#[derive(Debug, Clone, Default)]
pub struct FsOperArgs {
    pub make_command: Option<String>,
    pub makefile: Option<PathBuf>,
    pub reference: Option<PathBuf>,
    pub work_dir: Option<PathBuf>,
}

impl FsOperArgs {
    /// Applies the overrides on top of the configured values.
    pub fn merge(self, config: &FsOperConfig) -> FsOperConfig {
        FsOperConfig {
            make_command: self
                .make_command
                .unwrap_or_else(|| config.make_command.clone()),
            makefile: self.makefile.unwrap_or_else(|| config.makefile.clone()),
            reference: self.reference.unwrap_or_else(|| config.reference.clone()),
            work_dir: self.work_dir.unwrap_or_else(|| config.work_dir.clone()),
        }
    }
}

/// Runs the file-system operation sequence and reports the outcome.
///
/// A failed sequence prints its details and returns an error, which makes the
/// process exit with a non-zero status. `tmp` and `tmp2` are gone either way.
pub async fn execute(args: FsOperArgs, config: &FsOperConfig, locale: &str) -> Result<SequenceReport> {
    let settings = args.merge(config);

    println!(
        "{}",
        t!("fs.started", locale = locale, time = super::started_at()).bold()
    );
    println!(
        "{}",
        t!("fs.make_command", locale = locale, command = &settings.make_command).cyan()
    );
    println!(
        "{}",
        t!("fs.work_dir", locale = locale, path = settings.work_dir.display()).cyan()
    );

    if !settings.work_dir.is_dir() {
        anyhow::bail!(t!(
            "fs.work_dir_missing",
            locale = locale,
            path = settings.work_dir.display()
        )
        .to_string());
    }

    let sequence = FsOperSequence::from(&settings);
    let stop_token = super::setup_signal_handler(locale);

    match sequence.run(&stop_token, locale).await {
        Ok(report) => {
            println!(
                "\n{}",
                t!(
                    "fs.passed",
                    locale = locale,
                    count = report.steps.len(),
                    duration = format!("{:.2?}", report.total_duration())
                )
                .green()
                .bold()
            );
            Ok(report)
        }
        Err(e) => {
            print_sequence_failure(&e, locale);
            Err(anyhow::Error::new(e).context(t!("fs.sequence_failed", locale = locale).to_string()))
        }
    }
}
