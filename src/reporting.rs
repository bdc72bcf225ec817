//! # Reporting Module / 报告模块
//!
//! This module handles everything the harness prints about its own progress:
//! artifact banners, sequence step progress and failure details, all with
//! internationalization support.
//!
//! 此模块处理测试框架自身进度的所有输出：
//! 产物横幅、序列步骤进度和失败详情，均支持国际化。

pub mod console;

// Re-export common reporting functions
pub use console::{
    artifact_banner, print_artifact_banner, print_cleanup_failure, print_run_summary,
    print_sequence_failure, print_step_passed, print_step_started,
};
