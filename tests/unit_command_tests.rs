//! # Command Module Unit Tests / Command 模块单元测试
//!
//! This module contains unit tests for the `command.rs` module, testing
//! command line splitting and child process execution.
//!
//! 此模块包含 `command.rs` 模块的单元测试，测试命令行拆分和子进程执行。

use harness_runner::infra::command::{
    command_from_parts, run_inherited, run_with_stdout_to, split_command,
};

#[cfg(test)]
mod split_command_tests {
    use super::*;

    #[test]
    fn test_split_simple_command() {
        assert_eq!(split_command("make").unwrap(), vec!["make"]);
    }

    #[test]
    fn test_split_command_with_arguments_and_quotes() {
        assert_eq!(
            split_command("make -s 'CC=gcc -O2'").unwrap(),
            vec!["make", "-s", "CC=gcc -O2"]
        );
    }

    #[test]
    fn test_split_expands_environment_references() {
        let path = std::env::var("PATH").unwrap();
        let parts = split_command("echo \"$PATH\"").unwrap();
        assert_eq!(parts, vec!["echo".to_string(), path]);
    }

    #[test]
    fn test_split_rejects_empty_command() {
        assert!(split_command("").is_err());
        assert!(split_command("   ").is_err());
    }

    #[test]
    fn test_split_rejects_unterminated_quote() {
        assert!(split_command("make 'oops").is_err());
    }

    #[test]
    fn test_split_rejects_undefined_variable() {
        assert!(split_command("$HARNESS_RUNNER_SURELY_UNDEFINED_VARIABLE_12345").is_err());
    }

    #[test]
    fn test_command_from_no_parts() {
        assert!(command_from_parts(&[]).is_none());
    }
}

#[cfg(all(test, unix))]
mod execution_tests {
    use super::*;
    use std::fs;

    fn parts(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[tokio::test]
    async fn test_run_inherited_reports_exit_status() {
        let ok = command_from_parts(&parts(&["sh", "-c", "exit 0"])).unwrap();
        assert!(run_inherited(ok).await.unwrap().success());

        let failed = command_from_parts(&parts(&["sh", "-c", "exit 7"])).unwrap();
        assert_eq!(run_inherited(failed).await.unwrap().code(), Some(7));
    }

    #[tokio::test]
    async fn test_run_inherited_fails_for_missing_program() {
        let cmd = command_from_parts(&parts(&["harness-runner-no-such-program-12345"])).unwrap();
        assert!(run_inherited(cmd).await.is_err());
    }

    #[tokio::test]
    async fn test_run_with_stdout_to_captures_only_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let out_path = dir.path().join("out.txt");
        let sink = fs::File::create(&out_path).unwrap();

        let cmd = command_from_parts(&parts(&[
            "sh",
            "-c",
            "printf 'line one\\r\\nline two\\n'; echo diagnostics >&2",
        ]))
        .unwrap();
        let status = run_with_stdout_to(cmd, sink).await.unwrap();

        assert!(status.success());
        assert_eq!(fs::read(&out_path).unwrap(), b"line one\r\nline two\n");
    }
}
