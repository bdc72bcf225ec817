//! # Config Module Unit Tests / Config 模块单元测试
//!
//! This module contains unit tests for the `config.rs` module, testing the
//! defaults, partial files and loading errors of `HarnessConfig`.
//!
//! 此模块包含 `config.rs` 模块的单元测试，
//! 测试 `HarnessConfig` 的默认值、部分配置文件和加载错误。

use harness_runner::commands::fs_oper::FsOperArgs;
use harness_runner::core::config::{DiscoverConfig, FsOperConfig, HarnessConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[cfg(test)]
mod harness_config_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HarnessConfig::default();

        assert!(config.language.is_none());
        assert_eq!(config.discover.root, PathBuf::from("tests"));
        assert!(config.discover.extensions.is_empty());
        assert_eq!(config.fs_oper.make_command, "make");
        assert_eq!(config.fs_oper.makefile, PathBuf::from("test_fs_oper.mk"));
        assert_eq!(config.fs_oper.reference, PathBuf::from("test_fs_oper.ref"));
        assert_eq!(config.fs_oper.work_dir, PathBuf::from("."));
    }

    #[test]
    fn test_empty_file_is_the_default_config() {
        let config: HarnessConfig = toml::from_str("").unwrap();
        assert_eq!(config, HarnessConfig::default());
    }

    #[test]
    fn test_partial_sections_keep_remaining_defaults() {
        let toml_str = r#"
            language = "zh-CN"

            [discover]
            extensions = ["exe"]

            [fs_oper]
            make_command = "mingw32-make -s"
        "#;

        let config: HarnessConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.language.as_deref(), Some("zh-CN"));
        assert_eq!(config.discover.root, PathBuf::from("tests"));
        assert_eq!(config.discover.extensions, vec!["exe".to_string()]);
        assert_eq!(config.fs_oper.make_command, "mingw32-make -s");
        assert_eq!(config.fs_oper.makefile, PathBuf::from("test_fs_oper.mk"));
    }

    #[test]
    fn test_serialization_round_trip_of_custom_values() {
        let config = HarnessConfig {
            language: Some("en".to_string()),
            discover: DiscoverConfig {
                root: PathBuf::from("build/tests"),
                extensions: vec!["exe".to_string(), "test".to_string()],
            },
            fs_oper: FsOperConfig {
                make_command: "gmake".to_string(),
                work_dir: PathBuf::from("fixtures"),
                ..FsOperConfig::default()
            },
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("make_command = \"gmake\""));
        assert!(toml_str.contains("root = \"build/tests\""));

        let parsed: HarnessConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_unset_language_is_not_serialized() {
        let toml_str = toml::to_string(&HarnessConfig::default()).unwrap();
        assert!(!toml_str.contains("language"));
    }

    #[test]
    fn test_load_reports_parse_errors_with_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[discover\nroot = 1").unwrap();

        let err = HarnessConfig::load(&path, "en").unwrap_err();
        assert!(err.to_string().contains("Failed to parse configuration file"));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_load_rejects_wrong_types() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wrong.toml");
        fs::write(&path, "[discover]\nextensions = \"exe\"\n").unwrap();

        assert!(HarnessConfig::load(&path, "en").is_err());
    }

    #[test]
    fn test_resolve_with_explicit_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[discover]\nroot = \"artifacts\"\n").unwrap();

        let (config, used) = HarnessConfig::resolve(Some(&path), "en").unwrap();
        assert_eq!(config.discover.root, PathBuf::from("artifacts"));
        assert_eq!(used, Some(path));
    }

    #[test]
    fn test_resolve_with_missing_explicit_path_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = HarnessConfig::resolve(Some(&path), "en").unwrap_err();
        assert!(err.to_string().contains("Failed to read configuration file"));
    }
}

#[cfg(test)]
mod fs_oper_args_tests {
    use super::*;

    #[test]
    fn test_arguments_override_configured_values() {
        let config = FsOperConfig {
            make_command: "gmake".to_string(),
            reference: PathBuf::from("configured.ref"),
            ..FsOperConfig::default()
        };
        let args = FsOperArgs {
            make_command: Some("make -s".to_string()),
            work_dir: Some(PathBuf::from("fixtures")),
            ..FsOperArgs::default()
        };

        let merged = args.merge(&config);

        assert_eq!(merged.make_command, "make -s");
        assert_eq!(merged.work_dir, PathBuf::from("fixtures"));
        assert_eq!(merged.reference, PathBuf::from("configured.ref"));
        assert_eq!(merged.makefile, PathBuf::from("test_fs_oper.mk"));
    }
}
