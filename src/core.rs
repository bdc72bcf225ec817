//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Harness Runner,
//! including configuration, data models, artifact discovery and the
//! file-system operation sequence.
//!
//! 此模块包含 Harness Runner 的核心功能，
//! 包括配置、数据模型、产物发现和文件系统操作序列。

pub mod config;
pub mod discovery;
pub mod error;
pub mod models;
pub mod sequence;

// Re-exports
pub use config::HarnessConfig;
pub use discovery::{ArtifactFilter, run_artifacts};
pub use error::{AssertionFailure, SequenceError};
pub use models::{ArtifactRun, InvocationOutcome, SequenceReport};
pub use sequence::FsOperSequence;
