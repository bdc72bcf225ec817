//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the harness's progress and failures to the console,
//! color coded and localized.
//!
//! 此模块将测试框架的进度和失败信息打印到控制台，带有颜色编码并支持本地化。

use colored::*;
use std::path::Path;

use crate::core::error::{AssertionFailure, SequenceError};
use crate::core::models::{ArtifactRun, InvocationOutcome, StepRecord, Target};
use crate::infra::t;

/// The delimiter line printed before an artifact is invoked.
///
/// # Output Format / 输出格式
/// ```text
/// ========== tests/unit/parser.exe ==========
/// ```
pub fn artifact_banner(path: &Path) -> String {
    format!("========== {} ==========", path.display())
}

/// Prints the delimiter banner for an artifact.
/// 打印产物的分隔横幅。
pub fn print_artifact_banner(path: &Path) {
    println!("{}", artifact_banner(path).bold());
}

/// Prints the closing line of a discovery run: how many artifacts were
/// invoked and, if any, which ones could not be launched.
///
/// 打印发现运行的结束行：调用了多少个产物，以及哪些产物无法启动（如果有）。
pub fn print_run_summary(runs: &[ArtifactRun], locale: &str) {
    println!(
        "\n{}",
        t!("run.finished", locale = locale, count = runs.len()).bold()
    );

    for run in runs {
        if let InvocationOutcome::LaunchFailed { error } = &run.outcome {
            println!(
                "  - {}",
                t!(
                    "run.launch_failed",
                    locale = locale,
                    path = run.path.display(),
                    error = error
                )
                .red()
            );
        }
    }
}

/// Prints the "step started" line of the file-system sequence.
///
/// # Output Format / 输出格式
/// ```text
/// [1/6] Running target 'create-tmp'...
/// ```
pub fn print_step_started(number: usize, total: usize, target: Target, locale: &str) {
    println!(
        "{}",
        t!(
            "fs.step_running",
            locale = locale,
            index = number,
            total = total,
            target = target
        )
        .blue()
    );
}

pub fn print_step_passed(record: &StepRecord, total: usize, locale: &str) {
    println!(
        "{}",
        t!(
            "fs.step_passed",
            locale = locale,
            index = record.number,
            total = total,
            target = record.target,
            duration = format!("{:.2?}", record.duration)
        )
        .green()
    );
}

/// Prints a warning when `tmp`/`tmp2` could not be removed after the sequence
/// already failed for another reason.
pub fn print_cleanup_failure(error: &SequenceError, locale: &str) {
    eprintln!(
        "{}",
        t!("fs.cleanup_failed", locale = locale, error = error).yellow()
    );
}

/// Prints detailed information about why the sequence stopped.
///
/// Assertion failures name the step and target; a listing mismatch also shows
/// the expected and actual normalized output side by side.
///
/// 打印序列停止原因的详细信息。
/// 断言失败会指出步骤和目标；列表不匹配时还会并列显示期望和实际的规范化输出。
pub fn print_sequence_failure(error: &SequenceError, locale: &str) {
    println!("\n{}", t!("fs.failed_banner", locale = locale).red().bold());
    println!("{}", "-".repeat(80));

    match error {
        SequenceError::Assertion(failure) => {
            println!(
                "{}",
                t!(
                    "fs.failed_step",
                    locale = locale,
                    index = failure.step(),
                    target = failure.target()
                )
                .red()
            );
            if let AssertionFailure::ListingMismatch {
                expected, actual, ..
            } = failure
            {
                println!("\n--- {} ---", t!("fs.listing_expected", locale = locale).yellow());
                println!("{expected}");
                println!("--- {} ---", t!("fs.listing_actual", locale = locale).yellow());
                println!("{actual}");
            }
        }
        SequenceError::Interrupted => {
            println!("{}", t!("fs.interrupted", locale = locale).yellow());
        }
        _ => {}
    }

    println!("{error}");
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        println!("  {}: {cause}", t!("caused_by", locale = locale));
        source = std::error::Error::source(cause);
    }
    println!("{}", "-".repeat(80));
}
