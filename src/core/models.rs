//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures shared by the discovery runner and
//! the file-system operation sequence: invocation outcomes, build tool targets
//! and the per-step report of a sequence run.
//!
//! 此模块定义了发现运行器和文件系统操作序列共用的数据结构：
//! 调用结果、构建工具目标以及序列运行的逐步报告。

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// The outcome of invoking a single test artifact.
/// 调用单个测试产物的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationOutcome {
    /// The child ran to completion. `code` is `None` when it was terminated
    /// by a signal.
    /// 子进程运行结束。被信号终止时 `code` 为 `None`。
    Completed {
        code: Option<i32>,
        duration: Duration,
    },
    /// The child could not be started at all.
    /// 子进程根本无法启动。
    LaunchFailed { error: String },
}

/// The record of one artifact invocation made by the discovery runner.
/// 发现运行器对一个产物进行调用的记录。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRun {
    /// The artifact that was invoked / 被调用的产物
    pub path: PathBuf,
    /// What happened when it was invoked / 调用时发生了什么
    pub outcome: InvocationOutcome,
}

impl ArtifactRun {
    /// Returns `true` if the artifact exited with status 0.
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, InvocationOutcome::Completed { code: Some(0), .. })
    }
}

/// A named operation exposed by the external build tool.
/// 外部构建工具提供的命名操作。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Creates the `tmp` directory / 创建 `tmp` 目录
    CreateTmp,
    /// Copies `tmp` to `tmp2` / 将 `tmp` 复制到 `tmp2`
    CpTmp,
    /// Deletes `tmp` / 删除 `tmp`
    DelTmp,
    /// Lists the content of `tmp` on stdout / 在 stdout 上列出 `tmp` 的内容
    LsTmp,
}

impl Target {
    /// The target name as understood by the build tool.
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::CreateTmp => "create-tmp",
            Target::CpTmp => "cp-tmp",
            Target::DelTmp => "del-tmp",
            Target::LsTmp => "ls-tmp",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One completed step of the file-system operation sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// 1-based position in the sequence
    pub number: usize,
    pub target: Target,
    pub duration: Duration,
}

/// The report of a fully successful sequence run.
/// 完全成功的序列运行报告。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceReport {
    pub steps: Vec<StepRecord>,
}

impl SequenceReport {
    /// Total time spent in build tool invocations and their checks.
    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|step| step.duration).sum()
    }
}
