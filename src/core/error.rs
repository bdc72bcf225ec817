//! Error types of the file-system operation sequence.
//!
//! An `AssertionFailure` is a check that did not hold after a build tool
//! invocation; a `SequenceError` is anything that stops the sequence.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::models::Target;

/// A postcondition that did not hold after a step.
#[derive(Debug, Error)]
pub enum AssertionFailure {
    #[error("step {step}: `{target}` exited with {}", describe_code(.code))]
    NonZeroExit {
        step: usize,
        target: Target,
        code: Option<i32>,
    },

    #[error("step {step}: `{target}` succeeded but `{}` does not exist", .path.display())]
    MissingPath {
        step: usize,
        target: Target,
        path: PathBuf,
    },

    #[error("step {step}: `{target}` succeeded but `{}` still exists", .path.display())]
    UnexpectedPath {
        step: usize,
        target: Target,
        path: PathBuf,
    },

    #[error("step {step}: `{target}` produced a copy whose listing {copy:?} differs from the source listing {source_listing:?}")]
    CopyMismatch {
        step: usize,
        target: Target,
        source_listing: Vec<String>,
        copy: Vec<String>,
    },

    #[error("step {step}: `{target}` output {actual:?} does not match the reference {expected:?}")]
    ListingMismatch {
        step: usize,
        target: Target,
        expected: String,
        actual: String,
    },
}

impl AssertionFailure {
    /// The 1-based number of the step that failed.
    pub fn step(&self) -> usize {
        match self {
            AssertionFailure::NonZeroExit { step, .. }
            | AssertionFailure::MissingPath { step, .. }
            | AssertionFailure::UnexpectedPath { step, .. }
            | AssertionFailure::CopyMismatch { step, .. }
            | AssertionFailure::ListingMismatch { step, .. } => *step,
        }
    }

    /// The build tool target of the failed step.
    pub fn target(&self) -> Target {
        match self {
            AssertionFailure::NonZeroExit { target, .. }
            | AssertionFailure::MissingPath { target, .. }
            | AssertionFailure::UnexpectedPath { target, .. }
            | AssertionFailure::CopyMismatch { target, .. }
            | AssertionFailure::ListingMismatch { target, .. } => *target,
        }
    }
}

/// Anything that aborts the file-system operation sequence.
#[derive(Debug, Error)]
pub enum SequenceError {
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),

    #[error("failed to launch build tool `{program}` for target `{target}`")]
    Launch {
        program: String,
        target: Target,
        #[source]
        source: io::Error,
    },

    #[error("invalid build tool command: {command:?}")]
    InvalidCommand {
        command: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("I/O error on `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("interrupted")]
    Interrupted,
}

impl SequenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SequenceError::Io {
            path: path.into(),
            source,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}
