//! # Command Execution Module / 命令执行模块
//!
//! Helpers for turning a configured command line into a program and its
//! arguments, and for running children whose output either goes straight to
//! the harness's own terminal or into a file.
//!
//! 将配置的命令行拆分为程序及其参数的辅助函数，
//! 以及运行子进程的函数：其输出要么直接进入本程序的终端，要么写入文件。

use anyhow::{Context, Result};
use std::fs::File;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// Expands environment references and `~` in a command line and splits it
/// into words the way a POSIX shell would.
///
/// # Arguments
/// * `command_line` - e.g. `"make -s"` or `"$HOME/bin/gmake"`
///
/// # Returns
/// The program followed by its arguments. An empty command line is an error.
///
/// 展开命令行中的环境变量引用和 `~`，并按照 POSIX shell 的方式拆分为单词。
pub fn split_command(command_line: &str) -> Result<Vec<String>> {
    let expanded = shellexpand::full(command_line)
        .with_context(|| format!("Failed to expand command: {command_line}"))?
        .to_string();

    let parts = shlex::split(&expanded)
        .ok_or_else(|| anyhow::anyhow!("Failed to parse command: {}", expanded))?;

    if parts.is_empty() {
        anyhow::bail!("Empty command after parsing.");
    }
    Ok(parts)
}

/// Builds a `tokio::process::Command` from already split words.
/// The child is killed if the returned future is dropped before it exits.
///
/// 从已拆分的单词构建 `tokio::process::Command`。
/// 如果在子进程退出前丢弃返回的 future，子进程会被终止。
pub fn command_from_parts(parts: &[String]) -> Option<Command> {
    let (program, args) = parts.split_first()?;
    let mut cmd = Command::new(program);
    cmd.args(args).kill_on_drop(true);
    Some(cmd)
}

/// Runs a command with stdin, stdout and stderr inherited from the harness,
/// so the child's output surfaces directly in the harness's own output.
///
/// 以继承本程序 stdin、stdout 和 stderr 的方式运行命令，
/// 使子进程的输出直接出现在本程序的输出中。
pub async fn run_inherited(mut cmd: Command) -> std::io::Result<ExitStatus> {
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
}

/// Runs a command with its stdout redirected into `sink`. Stderr stays
/// attached to the harness's terminal so build tool diagnostics remain visible.
///
/// 运行命令并将其 stdout 重定向到 `sink`。
/// stderr 仍然连接到本程序的终端，以便构建工具的诊断信息保持可见。
pub async fn run_with_stdout_to(mut cmd: Command, sink: File) -> std::io::Result<ExitStatus> {
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::from(sink))
        .stderr(Stdio::inherit())
        .status()
        .await
}
