//! # Artifact Discovery Module / 产物发现模块
//!
//! This module finds test artifacts below a root directory and runs them one
//! after another. Each invocation is preceded by a delimiter banner and the
//! child's exit code never stops the runner.
//!
//! 此模块在根目录下查找测试产物并逐个运行它们。
//! 每次调用前都会打印分隔横幅，子进程的退出码不会使运行器停止。

use colored::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use walkdir::WalkDir;

use crate::{
    core::models::{ArtifactRun, InvocationOutcome},
    infra::{command, t},
    reporting,
};

/// Decides whether a file is a runnable test artifact.
/// 决定一个文件是否为可运行的测试产物。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactFilter {
    /// Only files whose extension is in the list (compared case-insensitively,
    /// stored without the leading dot).
    /// 仅限扩展名在列表中的文件（不区分大小写比较，存储时不含前导点）。
    Extensions(Vec<String>),
    /// Files the platform considers executable: any execute bit on Unix, the
    /// `exe` extension elsewhere.
    /// 平台认为可执行的文件：Unix 上任意执行位，其他平台上为 `exe` 扩展名。
    Executable,
}

impl ArtifactFilter {
    /// Builds the filter from a configured allow-list. An empty list selects
    /// platform executable detection.
    pub fn from_extensions<S: AsRef<str>>(extensions: &[S]) -> Self {
        let normalized: Vec<String> = extensions
            .iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();

        if normalized.is_empty() {
            ArtifactFilter::Executable
        } else {
            ArtifactFilter::Extensions(normalized)
        }
    }

    /// Returns `true` if `path` should be invoked as a test artifact.
    pub fn matches(&self, path: &Path) -> bool {
        match self {
            ArtifactFilter::Extensions(allowed) => path
                .extension()
                .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
                .is_some_and(|ext| allowed.iter().any(|a| *a == ext)),
            ArtifactFilter::Executable => is_executable(path),
        }
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("exe"))
}

/// Recursively collects every regular file below `root`.
///
/// Entries of a directory are visited in file-name order, depth first, so the
/// result is stable across runs and platforms. Symbolic links to files are
/// collected under their own path; links to directories are not descended
/// into. Entries that cannot be read are reported as warnings and skipped. A
/// missing root yields no candidates.
///
/// 递归收集 `root` 下的所有普通文件。
/// 目录中的条目按文件名顺序深度优先访问，因此结果在多次运行和不同平台之间保持稳定。
/// 指向文件的符号链接以其自身路径收集；不会进入指向目录的链接。
/// 无法读取的条目会以警告形式报告并跳过。根目录不存在时不产生任何候选项。
pub fn collect_candidates(root: &Path, locale: &str) -> Vec<PathBuf> {
    if !root.exists() {
        return Vec::new();
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(root).display().to_string();
                eprintln!(
                    "{}",
                    t!("run.walk_skipped", locale = locale, path = path, error = e).yellow()
                );
                continue;
            }
        };
        let file_type = entry.file_type();
        if file_type.is_file() || (file_type.is_symlink() && entry.path().is_file()) {
            files.push(entry.into_path());
        }
    }
    files
}

/// Keeps the candidates accepted by `filter`, preserving their order.
pub fn select_artifacts(candidates: Vec<PathBuf>, filter: &ArtifactFilter) -> Vec<PathBuf> {
    candidates
        .into_iter()
        .filter(|path| filter.matches(path))
        .collect()
}

/// Invokes each artifact in turn, printing a banner before every invocation.
///
/// The child inherits the harness's stdout and stderr. Its exit code is
/// recorded but otherwise ignored; an artifact that cannot be launched is
/// reported and skipped. When `stop_token` is cancelled the running child is
/// killed and no further artifacts are started.
///
/// # Arguments
/// * `artifacts` - Paths to invoke, in order
/// * `stop_token` - Cancelled on Ctrl-C
/// * `locale` - The language locale to use for messages
///
/// # Returns
/// One `ArtifactRun` per artifact that was started (or failed to start).
///
/// 依次调用每个产物，并在每次调用前打印横幅。
/// 子进程继承本程序的 stdout 和 stderr。其退出码会被记录但不影响后续执行；
/// 无法启动的产物会被报告并跳过。当 `stop_token` 被取消时，
/// 正在运行的子进程会被终止，且不再启动后续产物。
pub async fn run_artifacts(
    artifacts: &[PathBuf],
    stop_token: &CancellationToken,
    locale: &str,
) -> Vec<ArtifactRun> {
    let mut runs = Vec::with_capacity(artifacts.len());

    for path in artifacts {
        if stop_token.is_cancelled() {
            break;
        }

        reporting::print_artifact_banner(path);

        let mut cmd = tokio::process::Command::new(path);
        cmd.kill_on_drop(true);

        let start_time = Instant::now();
        let status = tokio::select! {
            biased;
            _ = stop_token.cancelled() => {
                println!("{}", t!("run.interrupted", locale = locale).yellow());
                break;
            }
            status = command::run_inherited(cmd) => status,
        };

        let outcome = match status {
            Ok(status) => InvocationOutcome::Completed {
                code: status.code(),
                duration: start_time.elapsed(),
            },
            Err(e) => {
                eprintln!(
                    "{}",
                    t!(
                        "run.launch_failed",
                        locale = locale,
                        path = path.display(),
                        error = e
                    )
                    .red()
                );
                InvocationOutcome::LaunchFailed {
                    error: e.to_string(),
                }
            }
        };

        runs.push(ArtifactRun {
            path: path.clone(),
            outcome,
        });
    }

    runs
}
