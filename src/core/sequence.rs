//! # File-System Operation Sequence Module / 文件系统操作序列模块
//!
//! This module drives an external build tool through a fixed, ordered list of
//! targets (`create-tmp`, `cp-tmp`, `del-tmp`, `ls-tmp`) and checks the exit
//! status and the resulting state of the `tmp` and `tmp2` directories after
//! every step. The first failed check aborts the sequence. Whatever happens,
//! both directories are removed before `FsOperSequence::run` returns.
//!
//! 此模块驱动外部构建工具按固定顺序执行一系列目标
//! （`create-tmp`、`cp-tmp`、`del-tmp`、`ls-tmp`），并在每一步之后检查退出状态
//! 以及 `tmp` 和 `tmp2` 目录的最终状态。第一个失败的检查会中止整个序列。
//! 无论结果如何，两个目录都会在 `FsOperSequence::run` 返回前被删除。

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        config::FsOperConfig,
        error::{AssertionFailure, SequenceError},
        models::{SequenceReport, StepRecord, Target},
    },
    infra::{command, fs as harness_fs},
    reporting,
};

/// The directory the build tool creates, copies, deletes and lists.
pub const SOURCE_DIR: &str = "tmp";
/// The destination of `cp-tmp`.
pub const COPY_DIR: &str = "tmp2";
/// The file written into `tmp` to make it non-empty.
pub const PAYLOAD_FILE: &str = "file";
/// The literal content of the payload file.
pub const PAYLOAD: &str = "test";

/// What the harness does itself before invoking the build tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setup {
    Nothing,
    /// Write `tmp/file` with the payload, creating `tmp` if needed.
    PopulateSource,
}

/// A postcondition checked after the build tool exited with status 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// The named directory exists.
    Exists(&'static str),
    /// The named path does not exist.
    Absent(&'static str),
    /// `tmp2` lists exactly the same relative paths as `tmp`.
    CopyMirrorsSource,
    /// The captured stdout, stripped of CR and LF, equals the reference file
    /// stripped the same way.
    ListingMatchesReference,
}

/// What the harness does itself after the checks passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Teardown {
    Nothing,
    /// Remove `tmp2`.
    RemoveCopy,
}

/// One entry of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub setup: Setup,
    pub target: Target,
    pub checks: &'static [Check],
    pub teardown: Teardown,
}

impl Step {
    /// Whether the build tool's stdout must be captured for this step.
    pub fn captures_output(&self) -> bool {
        self.checks.contains(&Check::ListingMatchesReference)
    }
}

/// The fixed sequence, in execution order.
pub const STEPS: [Step; 6] = [
    Step {
        setup: Setup::Nothing,
        target: Target::CreateTmp,
        checks: &[Check::Exists(SOURCE_DIR)],
        teardown: Teardown::Nothing,
    },
    Step {
        setup: Setup::Nothing,
        target: Target::CpTmp,
        checks: &[Check::Exists(COPY_DIR)],
        teardown: Teardown::Nothing,
    },
    Step {
        setup: Setup::Nothing,
        target: Target::DelTmp,
        checks: &[Check::Absent(SOURCE_DIR)],
        teardown: Teardown::RemoveCopy,
    },
    Step {
        setup: Setup::PopulateSource,
        target: Target::CpTmp,
        checks: &[Check::Exists(COPY_DIR), Check::CopyMirrorsSource],
        teardown: Teardown::Nothing,
    },
    Step {
        setup: Setup::PopulateSource,
        target: Target::DelTmp,
        checks: &[Check::Absent(SOURCE_DIR)],
        teardown: Teardown::Nothing,
    },
    Step {
        setup: Setup::PopulateSource,
        target: Target::LsTmp,
        checks: &[Check::ListingMatchesReference],
        teardown: Teardown::Nothing,
    },
];

/// Removes every carriage return and line feed byte.
///
/// 删除所有回车符和换行符字节。
pub fn normalize_listing(raw: &[u8]) -> Vec<u8> {
    raw.iter()
        .copied()
        .filter(|byte| !matches!(byte, b'\r' | b'\n'))
        .collect()
}

/// Owns `tmp` and `tmp2` for the duration of a sequence run.
///
/// `release` removes both and reports errors; if the guard is dropped without
/// being released (e.g. the future was cancelled), `Drop` removes them on a
/// best-effort basis.
///
/// 在序列运行期间持有 `tmp` 和 `tmp2`。
/// `release` 删除两者并报告错误；如果 guard 未被 release 就被丢弃
/// （例如 future 被取消），`Drop` 会尽力删除它们。
#[derive(Debug)]
pub struct ScratchDirs {
    dirs: [PathBuf; 2],
    armed: bool,
}

impl ScratchDirs {
    pub fn new(work_dir: &Path) -> Self {
        Self {
            dirs: [work_dir.join(SOURCE_DIR), work_dir.join(COPY_DIR)],
            armed: true,
        }
    }

    /// Removes both directories if they exist.
    pub fn clear(&self) -> Result<(), SequenceError> {
        for dir in &self.dirs {
            harness_fs::remove_dir_if_exists(dir).map_err(|e| SequenceError::io(dir, e))?;
        }
        Ok(())
    }

    /// Removes both directories and disarms the guard.
    pub fn release(mut self) -> Result<(), SequenceError> {
        self.armed = false;
        self.clear()
    }
}

impl Drop for ScratchDirs {
    fn drop(&mut self) {
        if self.armed {
            for dir in &self.dirs {
                let _ = harness_fs::remove_dir_if_exists(dir);
            }
        }
    }
}

/// The file-system operation sequence against one build tool and makefile.
/// 针对一个构建工具和 makefile 的文件系统操作序列。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsOperSequence {
    /// Build tool command line, split and expanded before use
    pub make_command: String,
    /// Passed to the build tool as `-f <makefile>`, relative to `work_dir`
    pub makefile: PathBuf,
    /// Reference listing, resolved against `work_dir`
    pub reference: PathBuf,
    /// Where the build tool runs and where `tmp`/`tmp2` live
    pub work_dir: PathBuf,
}

impl From<&FsOperConfig> for FsOperSequence {
    fn from(config: &FsOperConfig) -> Self {
        Self {
            make_command: config.make_command.clone(),
            makefile: config.makefile.clone(),
            reference: config.reference.clone(),
            work_dir: config.work_dir.clone(),
        }
    }
}

impl FsOperSequence {
    /// Runs all steps in order and always removes `tmp` and `tmp2` afterwards.
    ///
    /// Leftovers of an earlier run are removed before the first step so that
    /// existence checks observe the build tool's work only. They are removed
    /// even when the build tool command cannot be parsed.
    ///
    /// # Arguments
    /// * `stop_token` - Cancelled on Ctrl-C; the running build tool is killed
    /// * `locale` - The language locale to use for progress messages
    ///
    /// # Returns
    /// The per-step report, or the first error that stopped the sequence
    ///
    /// 按顺序运行所有步骤，并在之后始终删除 `tmp` 和 `tmp2`。
    /// 在第一步之前会删除先前运行的残留，使存在性检查只反映构建工具的操作。
    pub async fn run(
        &self,
        stop_token: &CancellationToken,
        locale: &str,
    ) -> Result<SequenceReport, SequenceError> {
        let scratch = ScratchDirs::new(&self.work_dir);
        let outcome = match scratch.clear() {
            Ok(()) => match command::split_command(&self.make_command) {
                Ok(parts) => self.run_steps(&parts, stop_token, locale).await,
                Err(e) => Err(SequenceError::InvalidCommand {
                    command: self.make_command.clone(),
                    source: e.into(),
                }),
            },
            Err(e) => Err(e),
        };
        let cleanup = scratch.release();

        match (outcome, cleanup) {
            (Ok(report), Ok(())) => Ok(report),
            (Ok(_), Err(cleanup_err)) => Err(cleanup_err),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(cleanup_err)) => {
                reporting::print_cleanup_failure(&cleanup_err, locale);
                Err(e)
            }
        }
    }

    async fn run_steps(
        &self,
        parts: &[String],
        stop_token: &CancellationToken,
        locale: &str,
    ) -> Result<SequenceReport, SequenceError> {
        let mut report = SequenceReport::default();
        for (index, step) in STEPS.iter().enumerate() {
            let record = self
                .run_step(index + 1, step, parts, stop_token, locale)
                .await?;
            report.steps.push(record);
        }
        Ok(report)
    }

    async fn run_step(
        &self,
        number: usize,
        step: &Step,
        parts: &[String],
        stop_token: &CancellationToken,
        locale: &str,
    ) -> Result<StepRecord, SequenceError> {
        let source = self.work_dir.join(SOURCE_DIR);
        if step.setup == Setup::PopulateSource {
            harness_fs::write_payload(&source, PAYLOAD_FILE, PAYLOAD)
                .map_err(|e| SequenceError::io(source.join(PAYLOAD_FILE), e))?;
        }

        reporting::print_step_started(number, STEPS.len(), step.target, locale);
        let start_time = Instant::now();

        let mut cmd = command::command_from_parts(parts).ok_or_else(|| {
            SequenceError::InvalidCommand {
                command: self.make_command.clone(),
                source: "empty command line".into(),
            }
        })?;
        cmd.arg("-f")
            .arg(&self.makefile)
            .arg(step.target.as_str())
            .current_dir(&self.work_dir);

        let captured = if step.captures_output() {
            Some(NamedTempFile::new().map_err(|e| SequenceError::io(std::env::temp_dir(), e))?)
        } else {
            None
        };
        let sink = match &captured {
            Some(file) => Some(file.reopen().map_err(|e| SequenceError::io(file.path(), e))?),
            None => None,
        };

        let invocation = async move {
            match sink {
                Some(sink) => command::run_with_stdout_to(cmd, sink).await,
                None => command::run_inherited(cmd).await,
            }
        };

        let status = tokio::select! {
            biased;
            _ = stop_token.cancelled() => return Err(SequenceError::Interrupted),
            status = invocation => status.map_err(|source| SequenceError::Launch {
                program: parts[0].clone(),
                target: step.target,
                source,
            })?,
        };

        if !status.success() {
            return Err(AssertionFailure::NonZeroExit {
                step: number,
                target: step.target,
                code: status.code(),
            }
            .into());
        }

        for check in step.checks {
            self.verify(number, step.target, *check, captured.as_ref().map(|f| f.path()))?;
        }

        if step.teardown == Teardown::RemoveCopy {
            let copy = self.work_dir.join(COPY_DIR);
            harness_fs::remove_dir_if_exists(&copy).map_err(|e| SequenceError::io(&copy, e))?;
        }

        let record = StepRecord {
            number,
            target: step.target,
            duration: start_time.elapsed(),
        };
        reporting::print_step_passed(&record, STEPS.len(), locale);
        Ok(record)
    }

    fn verify(
        &self,
        number: usize,
        target: Target,
        check: Check,
        captured: Option<&Path>,
    ) -> Result<(), SequenceError> {
        match check {
            Check::Exists(name) => {
                let path = self.work_dir.join(name);
                if !harness_fs::is_directory(&path) {
                    return Err(AssertionFailure::MissingPath {
                        step: number,
                        target,
                        path,
                    }
                    .into());
                }
            }
            Check::Absent(name) => {
                let path = self.work_dir.join(name);
                if path.exists() {
                    return Err(AssertionFailure::UnexpectedPath {
                        step: number,
                        target,
                        path,
                    }
                    .into());
                }
            }
            Check::CopyMirrorsSource => {
                let source = self.work_dir.join(SOURCE_DIR);
                let copy = self.work_dir.join(COPY_DIR);
                let source_listing = harness_fs::relative_listing(&source)
                    .map_err(|e| SequenceError::io(&source, e))?;
                let copy_listing = harness_fs::relative_listing(&copy)
                    .map_err(|e| SequenceError::io(&copy, e))?;
                if source_listing != copy_listing {
                    return Err(AssertionFailure::CopyMismatch {
                        step: number,
                        target,
                        source_listing,
                        copy: copy_listing,
                    }
                    .into());
                }
            }
            Check::ListingMatchesReference => {
                let actual = match captured {
                    Some(path) => fs::read(path).map_err(|e| SequenceError::io(path, e))?,
                    None => Vec::new(),
                };
                let reference_path = self.work_dir.join(&self.reference);
                let expected = fs::read(&reference_path)
                    .map_err(|e| SequenceError::io(&reference_path, e))?;

                let actual = normalize_listing(&actual);
                let expected = normalize_listing(&expected);
                if actual != expected {
                    return Err(AssertionFailure::ListingMismatch {
                        step: number,
                        target,
                        expected: String::from_utf8_lossy(&expected).into_owned(),
                        actual: String::from_utf8_lossy(&actual).into_owned(),
                    }
                    .into());
                }
            }
        }
        Ok(())
    }
}
